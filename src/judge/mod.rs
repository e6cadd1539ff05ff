//! AI-assisted judging with a deterministic fallback.
//!
//! Each judge asks a [`ReasoningService`] for a JSON verdict. When no
//! credential is configured the service is never called; when the call
//! fails for any reason the failure stays inside the judge and the
//! heuristic score is returned instead.

pub mod client;
pub mod code;
pub mod product;

pub use client::ChatCompletionClient;
pub use code::CodeJudge;
pub use product::ProductJudge;

use crate::types::evidence::Evidence;
use serde_json::{Map, Value};
use thiserror::Error;

pub const MAX_REASONING_CHARS: usize = 1200;
pub const MISSING_REASONING: &str = "No reasoning provided";
pub const FALLBACK_REASONING: &str =
    "Fallback heuristic scoring used because AI provider is unavailable.";

#[derive(Error, Debug)]
pub enum ReasoningError {
    #[error("reasoning service credential is not configured")]
    MissingCredential,

    #[error("reasoning service request failed: {0}")]
    Transport(String),

    #[error("reasoning service failed ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("reasoning service returned empty content")]
    EmptyContent,

    #[error("reasoning service did not return a JSON object: {0}")]
    InvalidJson(String),

    #[error("could not build prompt: {0}")]
    Prompt(String),
}

pub trait ReasoningService: Send + Sync {
    fn is_configured(&self) -> bool;

    /// One request with a system and a user instruction; the reply content
    /// must parse as JSON.
    fn ask_for_json(&self, system: &str, user: &str) -> Result<Value, ReasoningError>;
}

/// Sends the serialized evidence with a task description and the fields the
/// verdict must contain. A reply that is valid JSON but not an object has no
/// fields, so every score reads as missing.
pub(crate) fn request_verdict(
    service: &dyn ReasoningService,
    system: &str,
    task: &str,
    evidence: &Evidence,
    fields: &str,
) -> Result<Map<String, Value>, ReasoningError> {
    let serialized =
        serde_json::to_string(evidence).map_err(|e| ReasoningError::Prompt(e.to_string()))?;
    let user = format!("{task} from this evidence:\n{serialized}\n\nReturn JSON with: {fields}.");
    match service.ask_for_json(system, &user)? {
        Value::Object(map) => Ok(map),
        other => {
            tracing::debug!(reply = %other, "verdict is not a JSON object");
            Ok(Map::new())
        }
    }
}

/// Non-numeric values become 0; numbers are rounded into [0, 10].
pub(crate) fn clamp_score(value: Option<&Value>) -> u8 {
    value
        .and_then(Value::as_f64)
        .filter(|number| !number.is_nan())
        .map(|number| number.round().clamp(0.0, 10.0) as u8)
        .unwrap_or(0)
}

pub(crate) fn reasoning_text(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .unwrap_or(MISSING_REASONING)
        .chars()
        .take(MAX_REASONING_CHARS)
        .collect()
}
