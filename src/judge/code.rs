use super::{clamp_score, reasoning_text, request_verdict, ReasoningService, FALLBACK_REASONING};
use crate::types::evidence::Evidence;
use crate::types::scoring::CodeJudgeScore;

const SYSTEM_PROMPT: &str =
    "You are a strict senior software judge. Evaluate only proven evidence. Return JSON only.";
const TASK: &str = "Evaluate the technical quality";
const FIELDS: &str =
    "complexity (0-10), code_quality (0-10), architecture (0-10), reasoning (string)";

pub struct CodeJudge<'a> {
    service: &'a dyn ReasoningService,
}

impl<'a> CodeJudge<'a> {
    pub fn new(service: &'a dyn ReasoningService) -> Self {
        Self { service }
    }

    pub fn judge(&self, evidence: &Evidence) -> CodeJudgeScore {
        if !self.service.is_configured() {
            return fallback(evidence);
        }

        match request_verdict(self.service, SYSTEM_PROMPT, TASK, evidence, FIELDS) {
            Ok(verdict) => CodeJudgeScore {
                complexity: clamp_score(verdict.get("complexity")),
                code_quality: clamp_score(verdict.get("code_quality")),
                architecture: clamp_score(verdict.get("architecture")),
                reasoning: reasoning_text(verdict.get("reasoning")),
            },
            Err(err) => {
                tracing::warn!(error = %err, "code judge falling back to heuristic");
                fallback(evidence)
            }
        }
    }
}

pub fn fallback(evidence: &Evidence) -> CodeJudgeScore {
    let structure = &evidence.structure;
    CodeJudgeScore {
        complexity: (structure.file_count / 40).clamp(2, 10) as u8,
        code_quality: if structure.has_tests { 7 } else { 5 },
        architecture: structure.architecture_quality * 2,
        reasoning: FALLBACK_REASONING.to_string(),
    }
}
