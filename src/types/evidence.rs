use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    pub path: String,
    pub size: u64,
}

/// Everything the extractor learned about a repository. `tree` and
/// `tree_with_size` list the same blob paths in the same order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoMetadata {
    pub owner: String,
    pub repo: String,
    pub default_branch: String,
    pub readme: String,
    pub tree: Vec<String>,
    pub tree_with_size: Vec<TreeEntry>,
    pub file_count: usize,
    pub languages: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub last_pushed_at: Option<DateTime<Utc>>,
    pub html_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoActivity {
    /// Approximated from the pagination header at page size 1.
    pub commits: u64,
    /// Counts the first page (100) of contributors only.
    pub contributors: u64,
    pub last_commit: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureAnalysis {
    pub has_backend: bool,
    pub has_frontend: bool,
    pub has_tests: bool,
    pub has_ci: bool,
    pub languages: Vec<String>,
    pub config_files: Vec<String>,
    pub architecture_quality: u8,
    pub file_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleReason {
    Entry,
    Api,
    Component,
    Largest,
}

impl fmt::Display for SampleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SampleReason::Entry => "entry",
            SampleReason::Api => "api",
            SampleReason::Component => "component",
            SampleReason::Largest => "largest",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSample {
    pub path: String,
    pub reason: SampleReason,
    pub snippet: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSamplingResult {
    pub code_samples: Vec<CodeSample>,
    /// Every selected path, including ones whose fetch came back empty.
    pub sampled_files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub owner: String,
    pub repo: String,
    pub default_branch: String,
    pub html_url: String,
    pub languages: Vec<String>,
    pub file_count: usize,
}

impl From<&RepoMetadata> for RepoSummary {
    fn from(meta: &RepoMetadata) -> Self {
        Self {
            owner: meta.owner.clone(),
            repo: meta.repo.clone(),
            default_branch: meta.default_branch.clone(),
            html_url: meta.html_url.clone(),
            languages: meta.languages.clone(),
            file_count: meta.file_count,
        }
    }
}

/// The aggregate consumed by anti-cheat, judging and reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub repo: RepoSummary,
    pub readme_summary: String,
    pub activity: RepoActivity,
    pub structure: StructureAnalysis,
    pub stack: Vec<String>,
    pub dependencies: Vec<String>,
    pub verified_files: Vec<String>,
    pub code_samples: Vec<CodeSample>,
}
