//! Evaluates a public source repository for a hackathon submission.
//!
//! The pipeline extracts repository metadata, gathers activity, structure
//! and code-sample evidence, screens it for low-effort signals, asks two
//! judges for scores (falling back to heuristics when no reasoning service
//! is available), combines everything into a 0-100 score and renders a
//! human-readable report.

pub mod analyze;
pub mod cli;
pub mod config;
pub mod error;
pub mod judge;
pub mod orchestrator;
pub mod report;
pub mod scan;
pub mod source;
pub mod types;

pub use error::{JudgeError, Result};
pub use orchestrator::{Orchestrator, SubmissionContext};
