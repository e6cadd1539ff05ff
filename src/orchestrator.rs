//! Sequences the evaluation stages for one submission.
//!
//! Extraction, activity and sampling failures abort the run; everything after
//! evidence assembly always succeeds, so a returned result is always complete.

use crate::analyze::{self, EvidenceInput};
use crate::error::Result;
use crate::judge::{CodeJudge, ProductJudge, ReasoningService};
use crate::report::{self, ReportInput};
use crate::scan::{analyze_structure, CodeSampler, RepoActivityProbe, RepoExtractor};
use crate::source::SourceApi;
use crate::types::evidence::Evidence;
use crate::types::report::{OrchestratorInput, OrchestratorResult};

pub const DEFAULT_SUBMISSION_ID: &str = "n/a";
pub const DEFAULT_TEAM_NAME: &str = "Unknown Team";

#[derive(Debug, Clone, Default)]
pub struct SubmissionContext {
    pub submission_id: Option<String>,
    pub team_name: Option<String>,
}

pub struct Orchestrator<'a> {
    source: &'a dyn SourceApi,
    reasoning: &'a dyn ReasoningService,
}

impl<'a> Orchestrator<'a> {
    pub fn new(source: &'a dyn SourceApi, reasoning: &'a dyn ReasoningService) -> Self {
        Self { source, reasoning }
    }

    pub fn evaluate_repo(
        &self,
        url: &str,
        context: Option<SubmissionContext>,
    ) -> Result<OrchestratorResult> {
        let context = context.unwrap_or_default();
        self.execute(&OrchestratorInput {
            submission_id: context
                .submission_id
                .unwrap_or_else(|| DEFAULT_SUBMISSION_ID.to_string()),
            team_name: context
                .team_name
                .unwrap_or_else(|| DEFAULT_TEAM_NAME.to_string()),
            github_url: url.to_string(),
        })
    }

    /// Extraction through evidence assembly. Activity, structure and sampling
    /// run concurrently; their outputs are merged in a fixed order.
    pub fn build_evidence(&self, url: &str) -> Result<Evidence> {
        let repo = RepoExtractor::new(self.source).extract(url)?;

        let (activity, (structure, samples)) = rayon::join(
            || RepoActivityProbe::new(self.source).probe(&repo),
            || {
                rayon::join(
                    || analyze_structure(&repo),
                    || CodeSampler::new(self.source).sample(&repo),
                )
            },
        );

        Ok(analyze::build_evidence(EvidenceInput {
            repo: &repo,
            activity: activity?,
            structure,
            samples,
        }))
    }

    pub fn execute(&self, input: &OrchestratorInput) -> Result<OrchestratorResult> {
        tracing::info!(
            submission = %input.submission_id,
            team = %input.team_name,
            url = %input.github_url,
            "evaluation started"
        );
        let evidence = self.build_evidence(&input.github_url)?;

        let anti_cheat = analyze::detect(&evidence);
        let code_score = CodeJudge::new(self.reasoning).judge(&evidence);
        let product_score = ProductJudge::new(self.reasoning).judge(&evidence);
        let scoring = analyze::score(&code_score, &product_score, &anti_cheat);
        let report = report::generate(ReportInput {
            team_name: &input.team_name,
            final_score: scoring.final_score,
            evidence: &evidence,
            anti_cheat_flags: &anti_cheat.flags,
        });

        tracing::info!(
            submission = %input.submission_id,
            final_score = scoring.final_score,
            suspicious = anti_cheat.suspicious,
            "evaluation finished"
        );
        Ok(OrchestratorResult {
            submission_id: input.submission_id.clone(),
            final_score: scoring.final_score,
            evidence,
            anti_cheat,
            code_score,
            product_score,
            scoring,
            report,
        })
    }
}
