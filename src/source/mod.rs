//! Read-only access to the source-control REST API and its raw-content host.
//!
//! Stages talk to [`SourceApi`] rather than to HTTP directly so the pipeline
//! can be exercised against in-memory fakes.

#[cfg(test)]
pub(crate) mod fake;
pub mod github;
pub mod url;

use crate::error::{JudgeError, Result};
use serde::de::DeserializeOwned;

pub const ACCEPT_JSON: &str = "application/vnd.github+json";
pub const ACCEPT_RAW: &str = "application/vnd.github.raw";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceResponse {
    pub status: u16,
    /// Value of the `link` pagination header, if any.
    pub link: Option<String>,
    pub body: String,
}

impl SourceResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            link: None,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait SourceApi: Send + Sync {
    /// GET `path` (for example `/repos/{owner}/{repo}`) against the API base.
    /// Transport failures and timeouts are errors; HTTP statuses are not.
    fn get(&self, path: &str, accept: &str) -> Result<SourceResponse>;

    /// Raw file content from the content host. `None` means "no sample":
    /// a failed or empty fetch is never an error.
    fn get_raw(&self, owner: &str, repo: &str, branch: &str, path: &str) -> Option<String>;
}

/// GET that fails with [`JudgeError::Upstream`] on any non-success status.
pub fn request_with_response(api: &dyn SourceApi, path: &str) -> Result<SourceResponse> {
    let response = api.get(path, ACCEPT_JSON)?;
    if !response.is_success() {
        return Err(JudgeError::upstream(response.status, &response.body));
    }
    Ok(response)
}

pub fn request_json<T: DeserializeOwned>(api: &dyn SourceApi, path: &str) -> Result<T> {
    let response = request_with_response(api, path)?;
    Ok(serde_json::from_str(&response.body)?)
}

/// Raw-text GET that degrades to an empty string on any failure.
pub fn request_text(api: &dyn SourceApi, path: &str) -> String {
    match api.get(path, ACCEPT_RAW) {
        Ok(response) if response.is_success() => response.body,
        Ok(response) => {
            tracing::debug!(path, status = response.status, "text fetch returned no content");
            String::new()
        }
        Err(err) => {
            tracing::warn!(path, error = %err, "text fetch failed");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeSource;
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Named {
        name: String,
    }

    #[test]
    fn request_json_decodes_success_body() {
        let api = FakeSource::new().route("/repos/a/b", SourceResponse::ok(r#"{"name":"b"}"#));
        let named: Named = request_json(&api, "/repos/a/b").expect("request should succeed");
        assert_eq!(named.name, "b");
    }

    #[test]
    fn request_json_maps_error_status_to_upstream() {
        let api = FakeSource::new().route(
            "/repos/a/b",
            SourceResponse {
                status: 404,
                link: None,
                body: r#"{"message":"Not Found"}"#.to_string(),
            },
        );
        let err = request_json::<Named>(&api, "/repos/a/b").expect_err("404 should fail");
        assert!(matches!(err, JudgeError::Upstream { status: 404, .. }));
        assert!(err.to_string().contains("Not Found"));
    }

    #[test]
    fn request_text_swallows_missing_routes() {
        let api = FakeSource::new();
        assert_eq!(request_text(&api, "/repos/a/b/readme"), "");
    }
}
