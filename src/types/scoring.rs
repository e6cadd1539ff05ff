use serde::{Deserialize, Serialize};

pub type Score = f64;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntiCheatResult {
    pub suspicious: bool,
    /// Not clamped here; the scoring engine clamps the final score.
    pub penalty: u32,
    pub flags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeJudgeScore {
    pub complexity: u8,
    pub code_quality: u8,
    pub architecture: u8,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductJudgeScore {
    pub innovation: u8,
    pub impact: u8,
    pub usability: u8,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringBreakdown {
    pub complexity_weighted: Score,
    pub innovation_weighted: Score,
    pub impact_weighted: Score,
    pub quality_weighted: Score,
    pub raw_before_penalty: Score,
    pub penalty: u32,
    pub final_score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub final_score: Score,
    pub breakdown: ScoringBreakdown,
}
