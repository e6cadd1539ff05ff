use thiserror::Error;

/// Longest upstream response body carried inside an error.
pub const MAX_ERROR_BODY: usize = 500;

#[derive(Error, Debug)]
pub enum JudgeError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("source API failed ({status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("source API request failed: {0}")]
    Transport(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl JudgeError {
    pub fn upstream(status: u16, body: &str) -> Self {
        JudgeError::Upstream {
            status,
            body: body.chars().take(MAX_ERROR_BODY).collect(),
        }
    }
}

pub type Result<T> = std::result::Result<T, JudgeError>;
