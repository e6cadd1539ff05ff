use crate::error::{JudgeError, Result};
use crate::types::config::EvaluatorConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "repo-judge.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".repo-judge/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/repo-judge/config.toml";

pub const ENV_SOURCE_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_REASONING_CREDENTIAL: &str = "GROQ_API_KEY";
pub const ENV_REASONING_MODEL: &str = "GROQ_MODEL";

/// Global, project and local layers, then environment overrides.
pub fn load_config(root: &Path) -> Result<EvaluatorConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with(root, global.as_deref(), |key| std::env::var(key).ok())
}

pub(crate) fn load_config_with(
    root: &Path,
    global_path: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<EvaluatorConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let mut cfg: EvaluatorConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| JudgeError::ConfigParse(e.to_string()))?;
    apply_env_overrides(&mut cfg, env);
    cfg.validate()?;
    Ok(cfg)
}

pub(crate) fn apply_env_overrides(cfg: &mut EvaluatorConfig, env: impl Fn(&str) -> Option<String>) {
    let lookup = |key: &str| env(key).filter(|value| !value.trim().is_empty());

    if let Some(token) = lookup(ENV_SOURCE_TOKEN) {
        cfg.source.token = Some(token);
    }
    if let Some(credential) = lookup(ENV_REASONING_CREDENTIAL) {
        cfg.reasoning.credential = Some(credential);
    }
    if let Some(model) = lookup(ENV_REASONING_MODEL) {
        cfg.reasoning.model = model;
    }
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| JudgeError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
