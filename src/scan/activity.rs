use crate::error::Result;
use crate::source::{request_json, request_with_response, SourceApi};
use crate::types::evidence::{RepoActivity, RepoMetadata};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::de::IgnoredAny;
use serde::Deserialize;
use std::sync::OnceLock;

static LAST_PAGE: OnceLock<Regex> = OnceLock::new();

fn last_page() -> &'static Regex {
    LAST_PAGE.get_or_init(|| {
        Regex::new(r#"<[^>]*[?&]page=(\d+)[^>]*>; rel="last""#).expect("link pattern is valid")
    })
}

#[derive(Deserialize, Default)]
struct CommitSignature {
    date: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Default)]
struct CommitDetail {
    committer: Option<CommitSignature>,
}

#[derive(Deserialize)]
struct CommitItem {
    commit: Option<CommitDetail>,
}

pub struct RepoActivityProbe<'a> {
    api: &'a dyn SourceApi,
}

impl<'a> RepoActivityProbe<'a> {
    pub fn new(api: &'a dyn SourceApi) -> Self {
        Self { api }
    }

    /// Commit count is approximated from the `rel="last"` page number at page
    /// size 1; contributors are counted from a single page of 100.
    pub fn probe(&self, repo: &RepoMetadata) -> Result<RepoActivity> {
        let base = format!("/repos/{}/{}", repo.owner, repo.repo);

        let response = request_with_response(self.api, &format!("{base}/commits?per_page=1"))?;
        let first_page: Vec<CommitItem> = serde_json::from_str(&response.body)?;
        let commits = total_from_link_header(response.link.as_deref())
            .unwrap_or(first_page.len() as u64);
        let last_commit = first_page
            .into_iter()
            .next()
            .and_then(|item| item.commit)
            .and_then(|commit| commit.committer)
            .and_then(|committer| committer.date);

        let contributors: Vec<IgnoredAny> =
            request_json(self.api, &format!("{base}/contributors?per_page=100"))?;

        tracing::info!(
            owner = %repo.owner,
            repo = %repo.repo,
            commits,
            contributors = contributors.len(),
            "repository activity probed"
        );
        Ok(RepoActivity {
            commits,
            contributors: contributors.len() as u64,
            last_commit,
            created_at: repo.created_at,
        })
    }
}

/// Page number of the `rel="last"` link, which equals the total item count
/// when the page size is 1.
pub fn total_from_link_header(link: Option<&str>) -> Option<u64> {
    let captures = last_page().captures(link?)?;
    captures[1].parse().ok()
}
