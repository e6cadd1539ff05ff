use crate::types::evidence::Evidence;
use crate::types::report::ReportResult;
use crate::types::scoring::Score;
use indexmap::IndexSet;

pub struct ReportInput<'a> {
    pub team_name: &'a str,
    pub final_score: Score,
    pub evidence: &'a Evidence,
    pub anti_cheat_flags: &'a [String],
}

pub fn generate(input: ReportInput<'_>) -> ReportResult {
    let structure = &input.evidence.structure;
    let activity = &input.evidence.activity;
    let mut highlights = IndexSet::new();
    let mut warnings = IndexSet::new();

    if structure.has_backend {
        highlights.insert("Backend layer detected".to_string());
    }
    if structure.has_frontend {
        highlights.insert("Frontend layer detected".to_string());
    }
    if activity.contributors > 1 {
        highlights.insert("Multiple contributors detected".to_string());
    }
    if structure.has_tests {
        highlights.insert("Automated tests detected".to_string());
    } else {
        warnings.insert("No test coverage detected".to_string());
    }
    if activity.commits < 3 {
        warnings.insert("Limited commit history".to_string());
    }
    warnings.extend(input.anti_cheat_flags.iter().cloned());

    ReportResult {
        title: format!("{} - Score {:.2}", input.team_name, input.final_score),
        summary: format!(
            "Repository {}/{} evaluated with evidence-based scoring.",
            input.evidence.repo.owner, input.evidence.repo.repo
        ),
        highlights: highlights.into_iter().collect(),
        warnings: warnings.into_iter().collect(),
        score: input.final_score,
    }
}
