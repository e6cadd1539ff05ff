use crate::error::JudgeError;
use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_RAW_BASE: &str = "https://raw.githubusercontent.com";
pub const DEFAULT_REASONING_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_REASONING_MODEL: &str = "llama-3.3-70b-versatile";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluatorConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub reasoning: ReasoningConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_raw_base")]
    pub raw_base: String,
    pub token: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            raw_base: default_raw_base(),
            token: None,
        }
    }
}

/// Settings handed to the reasoning-service client. A missing credential is
/// a valid state: judges skip the service and score heuristically.
#[derive(Debug, Clone, Deserialize)]
pub struct ReasoningConfig {
    pub credential: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for ReasoningConfig {
    fn default() -> Self {
        Self {
            credential: None,
            model: default_model(),
            endpoint: default_endpoint(),
            temperature: default_temperature(),
        }
    }
}

impl ReasoningConfig {
    pub fn has_credential(&self) -> bool {
        self.credential
            .as_deref()
            .is_some_and(|credential| !credential.trim().is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_raw_base() -> String {
    DEFAULT_RAW_BASE.to_string()
}

fn default_model() -> String {
    DEFAULT_REASONING_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_REASONING_ENDPOINT.to_string()
}

fn default_temperature() -> f32 {
    0.2
}

fn default_timeout_secs() -> u64 {
    30
}

impl EvaluatorConfig {
    pub fn validate(&self) -> Result<(), JudgeError> {
        for (key, value) in [
            ("source.api_base", &self.source.api_base),
            ("source.raw_base", &self.source.raw_base),
            ("reasoning.endpoint", &self.reasoning.endpoint),
        ] {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Err(JudgeError::ConfigParse(format!("{key} cannot be empty")));
            }
            if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
                return Err(JudgeError::ConfigParse(format!(
                    "{key} must be an http(s) URL (found {trimmed})"
                )));
            }
        }

        if self.reasoning.model.trim().is_empty() {
            return Err(JudgeError::ConfigParse(
                "reasoning.model cannot be empty".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.reasoning.temperature) {
            return Err(JudgeError::ConfigParse(
                "reasoning.temperature must be between 0.0 and 2.0".to_string(),
            ));
        }
        if self.http.timeout_secs == 0 {
            return Err(JudgeError::ConfigParse(
                "http.timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: EvaluatorConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.source.api_base, DEFAULT_API_BASE);
        assert_eq!(cfg.source.raw_base, DEFAULT_RAW_BASE);
        assert_eq!(cfg.reasoning.model, DEFAULT_REASONING_MODEL);
        assert_eq!(cfg.http.timeout_secs, 30);
        assert!(!cfg.reasoning.has_credential());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[source]
api_base = "https://ghe.example.com/api/v3"
token = "ghp_example"

[reasoning]
credential = "gsk_example"
model = "mixtral-8x7b"
temperature = 0.0

[http]
timeout_secs = 10
"#;
        let cfg: EvaluatorConfig = toml::from_str(toml_str).expect("full config should parse");
        assert_eq!(cfg.source.api_base, "https://ghe.example.com/api/v3");
        assert_eq!(cfg.source.raw_base, DEFAULT_RAW_BASE);
        assert_eq!(cfg.source.token.as_deref(), Some("ghp_example"));
        assert!(cfg.reasoning.has_credential());
        assert_eq!(cfg.reasoning.model, "mixtral-8x7b");
        assert_eq!(cfg.reasoning.endpoint, DEFAULT_REASONING_ENDPOINT);
        assert_eq!(cfg.http.timeout_secs, 10);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn blank_credential_counts_as_missing() {
        let cfg: EvaluatorConfig = toml::from_str(
            r#"
[reasoning]
credential = "   "
"#,
        )
        .expect("config should parse");
        assert!(!cfg.reasoning.has_credential());
    }

    #[test]
    fn validate_rejects_non_http_endpoint() {
        let cfg: EvaluatorConfig = toml::from_str(
            r#"
[reasoning]
endpoint = "ftp://example.com"
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("reasoning.endpoint must be an http(s) URL"));
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let cfg: EvaluatorConfig = toml::from_str(
            r#"
[http]
timeout_secs = 0
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("http.timeout_secs must be greater than 0"));
    }

    #[test]
    fn validate_rejects_out_of_range_temperature() {
        let cfg: EvaluatorConfig = toml::from_str(
            r#"
[reasoning]
temperature = 3.5
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_err());
    }
}
