use crate::source::SourceApi;
use crate::types::evidence::{CodeSample, CodeSamplingResult, RepoMetadata, SampleReason, TreeEntry};
use indexmap::IndexMap;
use rayon::prelude::*;
use regex::Regex;
use std::sync::OnceLock;

pub const MAX_SAMPLES: usize = 8;
pub const MAX_LARGEST: usize = 5;
pub const MAX_SNIPPET_LINES: usize = 120;
pub const MAX_SNIPPET_CHARS: usize = 4000;
pub const TRUNCATION_MARKER: &str = "\n// ... truncated ...";

struct Patterns {
    source: Regex,
    entry: Regex,
    api: Regex,
    component: Regex,
}

static PATTERNS: OnceLock<Patterns> = OnceLock::new();

fn patterns() -> &'static Patterns {
    PATTERNS.get_or_init(|| Patterns {
        source: Regex::new(r"(?i)\.(ts|tsx|js|jsx|py|go|java|cs|rb|php)$")
            .expect("source pattern is valid"),
        entry: Regex::new(r"(?i)(main|index|app|server)\.(ts|tsx|js|jsx|py|go|java|cs|rb|php)$")
            .expect("entry pattern is valid"),
        api: Regex::new(r"(?i)(controller|route|router|endpoint|api)").expect("api pattern is valid"),
        component: Regex::new(r"(?i)(component|screen|page|view)")
            .expect("component pattern is valid"),
    })
}

pub struct CodeSampler<'a> {
    api: &'a dyn SourceApi,
}

impl<'a> CodeSampler<'a> {
    pub fn new(api: &'a dyn SourceApi) -> Self {
        Self { api }
    }

    /// Fetches snippets for the representative files. Fetches run in
    /// parallel but samples keep selection order; empty fetches are skipped.
    pub fn sample(&self, repo: &RepoMetadata) -> CodeSamplingResult {
        let selected = select_representative_files(&repo.tree_with_size);

        let code_samples = selected
            .par_iter()
            .map(|(path, reason)| {
                let raw = self
                    .api
                    .get_raw(&repo.owner, &repo.repo, &repo.default_branch, path);
                match raw {
                    Some(content) => {
                        tracing::debug!(path = %path, reason = %reason, "sampled file");
                        Some(CodeSample {
                            path: path.clone(),
                            reason: *reason,
                            snippet: to_snippet(&content),
                        })
                    }
                    None => {
                        tracing::warn!(path = %path, "skipping sample with no content");
                        None
                    }
                }
            })
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

        tracing::info!(
            selected = selected.len(),
            fetched = code_samples.len(),
            "code sampling finished"
        );
        CodeSamplingResult {
            code_samples,
            sampled_files: selected.into_iter().map(|(path, _)| path).collect(),
        }
    }
}

/// Picks one entry, api and component file, then the largest sources.
/// A path keeps the first reason it was selected for.
pub fn select_representative_files(files: &[TreeEntry]) -> Vec<(String, SampleReason)> {
    let patterns = patterns();
    let source = files
        .iter()
        .filter(|entry| patterns.source.is_match(&entry.path))
        .collect::<Vec<_>>();

    let entry = source.iter().find(|entry| {
        let name = entry.path.rsplit('/').next().unwrap_or_default();
        patterns.entry.is_match(name)
    });
    let api = source.iter().find(|entry| patterns.api.is_match(&entry.path));
    let component = source
        .iter()
        .find(|entry| patterns.component.is_match(&entry.path));

    let mut by_size = source.clone();
    by_size.sort_by(|a, b| b.size.cmp(&a.size));

    let candidates = [
        entry.map(|item| (item, SampleReason::Entry)),
        api.map(|item| (item, SampleReason::Api)),
        component.map(|item| (item, SampleReason::Component)),
    ]
    .into_iter()
    .flatten()
    .chain(
        by_size
            .iter()
            .take(MAX_LARGEST)
            .map(|item| (item, SampleReason::Largest)),
    );

    let mut unique = IndexMap::new();
    for (item, reason) in candidates {
        unique.entry(item.path.clone()).or_insert(reason);
    }
    unique.into_iter().take(MAX_SAMPLES).collect()
}

/// First 120 lines, then at most 4000 characters plus a truncation marker.
pub fn to_snippet(content: &str) -> String {
    let lines = content
        .split('\n')
        .take(MAX_SNIPPET_LINES)
        .collect::<Vec<_>>()
        .join("\n");
    if lines.chars().count() <= MAX_SNIPPET_CHARS {
        return lines;
    }
    let mut snippet = lines.chars().take(MAX_SNIPPET_CHARS).collect::<String>();
    snippet.push_str(TRUNCATION_MARKER);
    snippet
}
