use crate::types::scoring::{
    AntiCheatResult, CodeJudgeScore, ProductJudgeScore, Score, ScoringBreakdown, ScoringResult,
};

pub const COMPLEXITY_WEIGHT: Score = 0.30;
pub const INNOVATION_WEIGHT: Score = 0.25;
pub const IMPACT_WEIGHT: Score = 0.20;
pub const QUALITY_WEIGHT: Score = 0.25;

/// Weighted judge scores scaled to 0-100, minus the anti-cheat penalty,
/// rounded to two decimals and clamped.
pub fn score(
    code: &CodeJudgeScore,
    product: &ProductJudgeScore,
    anti_cheat: &AntiCheatResult,
) -> ScoringResult {
    let complexity_weighted = Score::from(code.complexity) * COMPLEXITY_WEIGHT;
    let innovation_weighted = Score::from(product.innovation) * INNOVATION_WEIGHT;
    let impact_weighted = Score::from(product.impact) * IMPACT_WEIGHT;
    let quality_weighted = Score::from(code.code_quality) * QUALITY_WEIGHT;

    let raw_before_penalty =
        complexity_weighted + innovation_weighted + impact_weighted + quality_weighted;
    let final_score =
        round2(raw_before_penalty * 10.0 - Score::from(anti_cheat.penalty)).clamp(0.0, 100.0);

    ScoringResult {
        final_score,
        breakdown: ScoringBreakdown {
            complexity_weighted,
            innovation_weighted,
            impact_weighted,
            quality_weighted,
            raw_before_penalty,
            penalty: anti_cheat.penalty,
            final_score,
        },
    }
}

fn round2(value: Score) -> Score {
    (value * 100.0).round() / 100.0
}
