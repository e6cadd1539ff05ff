use crate::error::{JudgeError, Result};
use crate::types::evidence::Evidence;
use crate::types::report::OrchestratorResult;
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

pub const RUNS_DIR: &str = ".repo-judge/runs";

#[derive(Debug, Clone, Serialize)]
pub struct RunRecord<'a> {
    pub version: String,
    pub generated_at: String,
    /// SHA-256 of the serialized evidence, so reruns can be compared.
    pub evidence_sha256: String,
    pub result: &'a OrchestratorResult,
}

impl<'a> RunRecord<'a> {
    pub fn new(result: &'a OrchestratorResult) -> Result<Self> {
        Ok(Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            evidence_sha256: evidence_digest(&result.evidence)?,
            result,
        })
    }
}

pub fn evidence_digest(evidence: &Evidence) -> Result<String> {
    let bytes = serde_json::to_vec(evidence)?;
    let digest = Sha256::digest(&bytes);
    Ok(digest.iter().map(|byte| format!("{byte:02x}")).collect())
}

pub fn write_run(root: &Path, record: &RunRecord<'_>) -> Result<PathBuf> {
    let dir = root.join(RUNS_DIR);
    fs::create_dir_all(&dir).map_err(JudgeError::Io)?;
    let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3fZ");
    let out_path = dir.join(format!("run-{stamp}.json"));
    let json = serde_json::to_string_pretty(record)?;
    fs::write(&out_path, json).map_err(JudgeError::Io)?;
    Ok(out_path)
}
