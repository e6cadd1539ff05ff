use crate::types::evidence::{RepoMetadata, StructureAnalysis};
use regex::Regex;
use std::sync::OnceLock;

pub const MAX_CONFIG_FILES: usize = 20;

struct Markers {
    backend: Regex,
    frontend: Regex,
    tests: Regex,
    ci: Regex,
    config: Regex,
}

static MARKERS: OnceLock<Markers> = OnceLock::new();

fn markers() -> &'static Markers {
    MARKERS.get_or_init(|| Markers {
        backend: Regex::new(r"(?i)(backend|server|api|src/main\.(ts|js)|nest-cli\.json|pom\.xml)$")
            .expect("backend pattern is valid"),
        frontend: Regex::new(r"(?i)(frontend|client|src/app|src/pages|vite\.config|next\.config)")
            .expect("frontend pattern is valid"),
        tests: Regex::new(r"(?i)(test|tests|spec|__tests__|\.spec\.|\.test\.)")
            .expect("tests pattern is valid"),
        ci: Regex::new(r"(?i)^\.github/workflows/.+\.(yml|yaml)$").expect("ci pattern is valid"),
        config: Regex::new(
            r"(?i)(^|/)(dockerfile|docker-compose\.ya?ml|package\.json|tsconfig\.json|requirements\.txt|pyproject\.toml|go\.mod|pom\.xml|build\.gradle)$",
        )
        .expect("config pattern is valid"),
    })
}

/// Classifies the blob tree into structural signals. Pure and deterministic.
pub fn analyze_structure(repo: &RepoMetadata) -> StructureAnalysis {
    let markers = markers();
    let files = &repo.tree;

    let has_backend = files.iter().any(|path| markers.backend.is_match(path));
    let has_frontend = files.iter().any(|path| markers.frontend.is_match(path));
    let has_tests = files.iter().any(|path| markers.tests.is_match(path));
    let has_ci = files.iter().any(|path| markers.ci.is_match(path));

    let config_files = files
        .iter()
        .filter(|path| markers.config.is_match(path))
        .cloned()
        .collect::<Vec<_>>();
    let architecture_quality = architecture_quality(
        has_backend,
        has_frontend,
        has_tests,
        has_ci || config_files.len() > 3,
    );

    StructureAnalysis {
        has_backend,
        has_frontend,
        has_tests,
        has_ci,
        languages: repo.languages.clone(),
        config_files: config_files.into_iter().take(MAX_CONFIG_FILES).collect(),
        architecture_quality,
        file_count: repo.file_count,
    }
}

fn architecture_quality(backend: bool, frontend: bool, tests: bool, ops: bool) -> u8 {
    let gained = [backend, frontend, tests, ops]
        .iter()
        .filter(|signal| **signal)
        .count() as u8;
    (1 + gained).min(5)
}
