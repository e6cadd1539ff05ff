pub mod archive;
pub mod generator;
pub mod json;
pub mod md;
pub mod sarif;

pub use generator::{generate, ReportInput};

use crate::error::JudgeError;
use crate::types::report::OrchestratorResult;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    Sarif,
}

pub fn render(result: &OrchestratorResult, format: OutputFormat) -> Result<String, JudgeError> {
    match format {
        OutputFormat::Json => json::to_json(result).map_err(JudgeError::Json),
        OutputFormat::Md => Ok(md::to_markdown(result)),
        OutputFormat::Sarif => sarif::to_sarif(result).map_err(JudgeError::Json),
    }
}
