use crate::types::evidence::Evidence;
use crate::types::scoring::{
    AntiCheatResult, CodeJudgeScore, ProductJudgeScore, Score, ScoringResult,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportResult {
    pub title: String,
    pub summary: String,
    pub highlights: Vec<String>,
    pub warnings: Vec<String>,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrchestratorInput {
    pub submission_id: String,
    pub team_name: String,
    pub github_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrchestratorResult {
    pub submission_id: String,
    pub final_score: Score,
    pub evidence: Evidence,
    pub anti_cheat: AntiCheatResult,
    pub code_score: CodeJudgeScore,
    pub product_score: ProductJudgeScore,
    pub scoring: ScoringResult,
    pub report: ReportResult,
}
