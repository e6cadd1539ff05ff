#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Runs the binary inside `dir` with an isolated home and no credentials.
fn repo_judge_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("repo-judge").expect("binary should compile");
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("GITHUB_TOKEN")
        .env_remove("GROQ_API_KEY")
        .env_remove("GROQ_MODEL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn evaluate_rejects_malformed_url_with_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    repo_judge_in(&dir)
        .args(["evaluate", "not a url"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("valid GitHub repo URL"));
}

#[test]
fn evidence_rejects_non_github_host() {
    let dir = TempDir::new().expect("temp dir should be created");
    repo_judge_in(&dir)
        .args(["evidence", "https://gitlab.com/acme/widget"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("valid GitHub repo URL"));
}

#[test]
fn evaluate_rejects_url_with_extra_segments() {
    let dir = TempDir::new().expect("temp dir should be created");
    repo_judge_in(&dir)
        .args(["evaluate", "https://github.com/acme/widget/tree/main", "--save"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("valid GitHub repo URL"));
    assert!(!dir.path().join(".repo-judge/runs").exists());
}

#[test]
fn broken_project_config_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("repo-judge.toml"), "[source\n").expect("config should write");
    repo_judge_in(&dir)
        .args(["evidence", "https://github.com/acme/widget"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config parse error"))
        .stderr(predicate::str::contains("repo-judge.toml"));
}

#[test]
fn invalid_config_values_are_rejected_before_any_request() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::create_dir_all(dir.path().join(".repo-judge")).expect("local dir should create");
    fs::write(
        dir.path().join(".repo-judge/local.toml"),
        "[reasoning]\ntemperature = 5.0\n",
    )
    .expect("local config should write");
    repo_judge_in(&dir)
        .args(["evaluate", "https://github.com/acme/widget"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("reasoning.temperature"));
}
