use crate::error::{JudgeError, Result};
use regex::Regex;
use std::sync::OnceLock;

static REPO_URL: OnceLock<Regex> = OnceLock::new();

fn repo_url() -> &'static Regex {
    REPO_URL.get_or_init(|| {
        Regex::new(r"(?i)^https?://(?:www\.)?github\.com/([^/]+)/([^/]+?)(?:\.git)?$")
            .expect("repository URL pattern is valid")
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

/// Parses `http(s)://[www.]github.com/<owner>/<repo>[.git][/]`.
pub fn parse_repo_url(url: &str) -> Result<RepoRef> {
    let normalized = url.trim().trim_end_matches('/');
    let captures = repo_url().captures(normalized).ok_or_else(|| {
        JudgeError::Validation("githubUrl must be a valid GitHub repo URL".to_string())
    })?;
    Ok(RepoRef {
        owner: captures[1].to_string(),
        repo: captures[2].to_string(),
    })
}

/// Percent-encodes one URI component, leaving `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub fn encode_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(byte as char),
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

/// Encodes each `/`-separated segment of a repository path.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(encode_component)
        .collect::<Vec<_>>()
        .join("/")
}
