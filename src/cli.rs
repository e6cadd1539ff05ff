use crate::orchestrator::{DEFAULT_SUBMISSION_ID, DEFAULT_TEAM_NAME};
use crate::report::OutputFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "repo-judge",
    version,
    about = "Evidence-based repository scoring for hackathon submissions"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full pipeline and print the scored result
    Evaluate(EvaluateCommand),
    /// Collect evidence only and print it as JSON
    Evidence(EvidenceCommand),
}

#[derive(Args)]
pub struct EvaluateCommand {
    /// Repository URL, e.g. https://github.com/owner/repo
    pub url: String,
    #[arg(long, default_value = DEFAULT_TEAM_NAME)]
    pub team: String,
    #[arg(long, default_value = DEFAULT_SUBMISSION_ID)]
    pub submission_id: String,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Archive the JSON result under .repo-judge/runs/
    #[arg(long)]
    pub save: bool,
}

#[derive(Args)]
pub struct EvidenceCommand {
    pub url: String,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Sarif,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Json => OutputFormat::Json,
            ReportFormat::Md => OutputFormat::Md,
            ReportFormat::Sarif => OutputFormat::Sarif,
        }
    }
}
