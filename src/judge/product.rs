use super::{clamp_score, reasoning_text, request_verdict, ReasoningService, FALLBACK_REASONING};
use crate::analyze::evidence::README_NOT_FOUND;
use crate::types::evidence::Evidence;
use crate::types::scoring::ProductJudgeScore;

const SYSTEM_PROMPT: &str =
    "You are a strict product judge. Evaluate only factual evidence. Return JSON only.";
const TASK: &str = "Evaluate the product quality";
const FIELDS: &str = "innovation (0-10), impact (0-10), usability (0-10), reasoning (string)";

pub struct ProductJudge<'a> {
    service: &'a dyn ReasoningService,
}

impl<'a> ProductJudge<'a> {
    pub fn new(service: &'a dyn ReasoningService) -> Self {
        Self { service }
    }

    pub fn judge(&self, evidence: &Evidence) -> ProductJudgeScore {
        if !self.service.is_configured() {
            return fallback(evidence);
        }

        match request_verdict(self.service, SYSTEM_PROMPT, TASK, evidence, FIELDS) {
            Ok(verdict) => ProductJudgeScore {
                innovation: clamp_score(verdict.get("innovation")),
                impact: clamp_score(verdict.get("impact")),
                usability: clamp_score(verdict.get("usability")),
                reasoning: reasoning_text(verdict.get("reasoning")),
            },
            Err(err) => {
                tracing::warn!(error = %err, "product judge falling back to heuristic");
                fallback(evidence)
            }
        }
    }
}

pub fn fallback(evidence: &Evidence) -> ProductJudgeScore {
    let structure = &evidence.structure;
    ProductJudgeScore {
        innovation: if evidence.readme_summary == README_NOT_FOUND { 3 } else { 6 },
        impact: if structure.has_frontend || structure.has_backend { 6 } else { 4 },
        usability: if structure.has_frontend { 6 } else { 4 },
        reasoning: FALLBACK_REASONING.to_string(),
    }
}
