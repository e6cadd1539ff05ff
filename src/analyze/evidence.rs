use crate::types::evidence::{
    CodeSamplingResult, Evidence, RepoActivity, RepoMetadata, RepoSummary, StructureAnalysis,
};
use indexmap::IndexSet;
use regex::Regex;
use std::sync::OnceLock;

pub const README_NOT_FOUND: &str = "README not found";
pub const MAX_README_LINES: usize = 30;
pub const MAX_README_CHARS: usize = 1200;
pub const MAX_STACK_TAGS: usize = 20;

/// Marker fragment (matched case-insensitively anywhere in a path) and the
/// technology it implies.
const STACK_MARKERS: [(&str, &str); 5] = [
    ("nest-cli.json", "NestJS"),
    ("next.config", "Next.js"),
    ("vite.config", "Vite"),
    ("dockerfile", "Docker"),
    ("prisma/schema.prisma", "Prisma"),
];

const DEPENDENCY_VOCABULARY: [&str; 6] = ["postgres", "mongodb", "redis", "docker", "kafka", "rabbitmq"];

static WHITESPACE: OnceLock<Regex> = OnceLock::new();

fn whitespace() -> &'static Regex {
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

pub struct EvidenceInput<'a> {
    pub repo: &'a RepoMetadata,
    pub activity: RepoActivity,
    pub structure: StructureAnalysis,
    pub samples: CodeSamplingResult,
}

pub fn build_evidence(input: EvidenceInput<'_>) -> Evidence {
    let repo = input.repo;
    Evidence {
        repo: RepoSummary::from(repo),
        readme_summary: summarize_readme(&repo.readme),
        activity: input.activity,
        structure: input.structure,
        stack: detect_stack(&repo.tree, &repo.languages),
        dependencies: detect_dependencies(&repo.readme, &repo.tree),
        verified_files: input.samples.sampled_files,
        code_samples: input.samples.code_samples,
    }
}

pub fn summarize_readme(readme: &str) -> String {
    if readme.trim().is_empty() {
        return README_NOT_FOUND.to_string();
    }
    let head = readme
        .split('\n')
        .take(MAX_README_LINES)
        .collect::<Vec<_>>()
        .join(" ");
    whitespace()
        .replace_all(&head, " ")
        .chars()
        .take(MAX_README_CHARS)
        .collect()
}

pub fn detect_stack(files: &[String], languages: &[String]) -> Vec<String> {
    let mut stack = languages.iter().cloned().collect::<IndexSet<_>>();
    let lowered = files.iter().map(|file| file.to_lowercase()).collect::<Vec<_>>();
    for (marker, tag) in STACK_MARKERS {
        if lowered.iter().any(|file| file.contains(marker)) {
            stack.insert(tag.to_string());
        }
    }
    stack.into_iter().take(MAX_STACK_TAGS).collect()
}

pub fn detect_dependencies(readme: &str, files: &[String]) -> Vec<String> {
    let haystack = format!("{readme}\n{}", files.join("\n")).to_lowercase();
    DEPENDENCY_VOCABULARY
        .iter()
        .filter(|keyword| haystack.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}
