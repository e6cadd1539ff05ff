use clap::Parser;
use repo_judge::cli::{self, Commands};
use repo_judge::config;
use repo_judge::error::JudgeError;
use repo_judge::judge::ChatCompletionClient;
use repo_judge::orchestrator::{Orchestrator, SubmissionContext};
use repo_judge::report::{self, archive};
use repo_judge::source::github::GitHubClient;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const SUSPICIOUS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run() -> Result<i32, JudgeError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let cfg = config::load_config(Path::new("."))?;
    let source = GitHubClient::new(&cfg.source, &cfg.http);
    let reasoning = ChatCompletionClient::new(cfg.reasoning.clone(), &cfg.http);
    if cfg.reasoning.has_credential() {
        tracing::info!(model = reasoning.model(), "judges will consult the reasoning service");
    } else {
        tracing::info!("no reasoning credential configured; judges will use heuristics");
    }
    let orchestrator = Orchestrator::new(&source, &reasoning);

    match cli.command {
        Commands::Evaluate(cmd) => {
            let result = orchestrator.evaluate_repo(
                &cmd.url,
                Some(SubmissionContext {
                    submission_id: Some(cmd.submission_id),
                    team_name: Some(cmd.team),
                }),
            )?;
            let rendered = report::render(&result, cmd.format.into())?;
            println!("{rendered}");

            if cmd.save {
                let record = archive::RunRecord::new(&result)?;
                let path = archive::write_run(Path::new("."), &record)?;
                eprintln!("run saved: {}", path.display());
            }

            if result.anti_cheat.suspicious {
                Ok(exit_code::SUSPICIOUS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        Commands::Evidence(cmd) => {
            let evidence = orchestrator.build_evidence(&cmd.url)?;
            println!("{}", serde_json::to_string_pretty(&evidence)?);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
