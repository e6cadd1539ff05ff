use crate::error::Result;
use crate::source::url::{encode_component, parse_repo_url};
use crate::source::{request_json, request_text, SourceApi};
use crate::types::evidence::{RepoMetadata, TreeEntry};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Deserialize)]
struct RepoOwner {
    login: String,
}

#[derive(Deserialize)]
struct RepoPayload {
    owner: RepoOwner,
    name: String,
    default_branch: String,
    created_at: DateTime<Utc>,
    pushed_at: Option<DateTime<Utc>>,
    html_url: String,
}

#[derive(Deserialize)]
struct TreeItem {
    path: String,
    #[serde(rename = "type")]
    kind: String,
    size: Option<u64>,
}

#[derive(Deserialize)]
struct TreePayload {
    tree: Vec<TreeItem>,
}

pub struct RepoExtractor<'a> {
    api: &'a dyn SourceApi,
}

impl<'a> RepoExtractor<'a> {
    pub fn new(api: &'a dyn SourceApi) -> Self {
        Self { api }
    }

    /// Resolves a repository URL into metadata, README, blob tree and
    /// languages. A malformed URL fails before any request is issued.
    pub fn extract(&self, repo_url: &str) -> Result<RepoMetadata> {
        let parsed = parse_repo_url(repo_url)?;
        let base = format!("/repos/{}/{}", parsed.owner, parsed.repo);
        tracing::info!(owner = %parsed.owner, repo = %parsed.repo, "extracting repository");

        let repo: RepoPayload = request_json(self.api, &base)?;
        let readme = request_text(self.api, &format!("{base}/readme"));
        let tree: TreePayload = request_json(
            self.api,
            &format!(
                "{base}/git/trees/{}?recursive=1",
                encode_component(&repo.default_branch)
            ),
        )?;
        let languages: IndexMap<String, u64> =
            request_json(self.api, &format!("{base}/languages"))?;

        let tree_with_size = tree
            .tree
            .into_iter()
            .filter(|item| item.kind == "blob")
            .map(|item| TreeEntry {
                path: item.path,
                size: item.size.unwrap_or(0),
            })
            .collect::<Vec<_>>();
        let paths = tree_with_size
            .iter()
            .map(|entry| entry.path.clone())
            .collect::<Vec<_>>();

        tracing::info!(files = paths.len(), readme_bytes = readme.len(), "repository extracted");
        Ok(RepoMetadata {
            owner: repo.owner.login,
            repo: repo.name,
            default_branch: repo.default_branch,
            readme,
            file_count: paths.len(),
            tree: paths,
            tree_with_size,
            languages: languages.into_keys().collect(),
            created_at: repo.created_at,
            last_pushed_at: repo.pushed_at,
            html_url: repo.html_url,
        })
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::source::fake::FakeSource;
    use crate::source::SourceResponse;

    pub const REPO_JSON: &str = r#"{
        "owner": {"login": "acme"},
        "name": "widget",
        "default_branch": "main",
        "created_at": "2024-01-02T03:04:05Z",
        "pushed_at": "2024-03-01T00:00:00Z",
        "html_url": "https://github.com/acme/widget"
    }"#;

    pub const TREE_JSON: &str = r#"{"tree": [
        {"path": "src", "type": "tree"},
        {"path": "README.md", "type": "blob", "size": 120},
        {"path": "src/main.ts", "type": "blob", "size": 900},
        {"path": "src/api/users.controller.ts", "type": "blob", "size": 2400},
        {"path": "web/components/Button.tsx", "type": "blob", "size": 300},
        {"path": "test/app.spec.ts", "type": "blob"},
        {"path": "Dockerfile", "type": "blob", "size": 80}
    ]}"#;

    pub const LANGUAGES_JSON: &str = r#"{"TypeScript": 52000, "JavaScript": 1200, "Dockerfile": 80}"#;

    /// Routes for a healthy `acme/widget` repository.
    pub fn widget_source() -> FakeSource {
        FakeSource::new()
            .route("/repos/acme/widget", SourceResponse::ok(REPO_JSON))
            .route(
                "/repos/acme/widget/readme",
                SourceResponse::ok("# Widget\n\nA postgres-backed widget service."),
            )
            .route(
                "/repos/acme/widget/git/trees/main?recursive=1",
                SourceResponse::ok(TREE_JSON),
            )
            .route("/repos/acme/widget/languages", SourceResponse::ok(LANGUAGES_JSON))
    }
}
