//! GitHub implementation of [`SourceApi`] over sync HTTP (ureq).

use super::url::{encode_component, encode_path};
use super::{SourceApi, SourceResponse};
use crate::error::{JudgeError, Result};
use crate::types::config::{HttpConfig, SourceConfig};
use std::time::Duration;

pub struct GitHubClient {
    api_base: String,
    raw_base: String,
    token: Option<String>,
    agent: ureq::Agent,
}

fn make_agent(timeout: Duration) -> ureq::Agent {
    ureq::config::Config::builder()
        .http_status_as_error(false)
        .timeout_global(Some(timeout))
        .build()
        .new_agent()
}

impl GitHubClient {
    pub fn new(source: &SourceConfig, http: &HttpConfig) -> Self {
        Self {
            api_base: source.api_base.trim_end_matches('/').to_string(),
            raw_base: source.raw_base.trim_end_matches('/').to_string(),
            token: source
                .token
                .clone()
                .filter(|token| !token.trim().is_empty()),
            agent: make_agent(Duration::from_secs(http.timeout_secs)),
        }
    }

    pub fn raw_url(&self, owner: &str, repo: &str, branch: &str, path: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.raw_base,
            encode_component(owner),
            encode_component(repo),
            encode_component(branch),
            encode_path(path)
        )
    }

    fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }
}

impl SourceApi for GitHubClient {
    fn get(&self, path: &str, accept: &str) -> Result<SourceResponse> {
        let url = format!("{}{}", self.api_base, path);
        let mut request = self.agent.get(url.as_str()).header("Accept", accept);
        if let Some(auth) = self.authorization() {
            request = request.header("Authorization", &auth);
        }

        let response = request
            .call()
            .map_err(|e| JudgeError::Transport(format!("GET {path}: {e}")))?;
        let status = response.status().as_u16();
        let link = response
            .headers()
            .get("link")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response
            .into_body()
            .read_to_string()
            .map_err(|e| JudgeError::Transport(format!("GET {path}: {e}")))?;

        tracing::debug!(path, status, "source API response");
        Ok(SourceResponse { status, link, body })
    }

    fn get_raw(&self, owner: &str, repo: &str, branch: &str, path: &str) -> Option<String> {
        let url = self.raw_url(owner, repo, branch, path);
        let mut request = self.agent.get(url.as_str());
        if let Some(auth) = self.authorization() {
            request = request.header("Authorization", &auth);
        }

        let response = match request.call() {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(path, error = %err, "raw content fetch failed");
                return None;
            }
        };
        if !response.status().is_success() {
            tracing::debug!(path, status = response.status().as_u16(), "raw content unavailable");
            return None;
        }
        response
            .into_body()
            .read_to_string()
            .ok()
            .filter(|content| !content.is_empty())
    }
}
