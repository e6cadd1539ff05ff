//! OpenAI-compatible chat-completions client (Groq by default).
//!
//! Uses ureq (sync HTTP); status codes are inspected here rather than
//! surfaced as transport errors.

use super::{ReasoningError, ReasoningService};
use crate::error::MAX_ERROR_BODY;
use crate::types::config::{HttpConfig, ReasoningConfig};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

pub struct ChatCompletionClient {
    config: ReasoningConfig,
    agent: ureq::Agent,
}

impl ChatCompletionClient {
    pub fn new(config: ReasoningConfig, http: &HttpConfig) -> Self {
        let agent = ureq::config::Config::builder()
            .http_status_as_error(false)
            .timeout_global(Some(Duration::from_secs(http.timeout_secs)))
            .build()
            .new_agent();
        Self { config, agent }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn credential(&self) -> Option<&str> {
        self.config
            .credential
            .as_deref()
            .filter(|_| self.config.has_credential())
    }
}

impl ReasoningService for ChatCompletionClient {
    fn is_configured(&self) -> bool {
        self.config.has_credential()
    }

    fn ask_for_json(&self, system: &str, user: &str) -> Result<Value, ReasoningError> {
        let credential = self.credential().ok_or(ReasoningError::MissingCredential)?;
        let body = ChatRequest {
            model: &self.config.model,
            temperature: self.config.temperature,
            response_format: ResponseFormat {
                kind: "json_object",
            },
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response = self
            .agent
            .post(self.config.endpoint.as_str())
            .header("Content-Type", "application/json")
            .header("Authorization", &format!("Bearer {credential}"))
            .send_json(&body)
            .map_err(|e| ReasoningError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let error_text = response.into_body().read_to_string().unwrap_or_default();
            return Err(ReasoningError::Status {
                status,
                body: error_text.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        let payload: ChatResponse = response
            .into_body()
            .read_json()
            .map_err(|e| ReasoningError::InvalidJson(e.to_string()))?;
        tracing::debug!(model = %self.config.model, "reasoning service replied");
        parse_content(payload)
    }
}

fn parse_content(payload: ChatResponse) -> Result<Value, ReasoningError> {
    let content = payload
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or(ReasoningError::EmptyContent)?;

    serde_json::from_str(&content).map_err(|_| {
        ReasoningError::InvalidJson(content.chars().take(MAX_ERROR_BODY).collect())
    })
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    response_format: ResponseFormat,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize, Default)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: Option<ChatReply>,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::anti_cheat::tests::evidence_with;
    use crate::judge::{code, CodeJudge};
    use crate::source::fake::serve_once;

    fn client_for(base: &str) -> ChatCompletionClient {
        let config = ReasoningConfig {
            credential: Some("gsk_test".to_string()),
            endpoint: format!("{base}/openai/v1/chat/completions"),
            ..ReasoningConfig::default()
        };
        ChatCompletionClient::new(config, &HttpConfig::default())
    }

    fn payload(raw: &str) -> ChatResponse {
        serde_json::from_str(raw).expect("payload should parse")
    }

    #[test]
    fn client_without_credential_is_unconfigured() {
        let client = ChatCompletionClient::new(ReasoningConfig::default(), &HttpConfig::default());
        assert!(!client.is_configured());
        assert_eq!(client.model(), "llama-3.3-70b-versatile");
        let err = client
            .ask_for_json("system", "user")
            .expect_err("missing credential should fail before any request");
        assert!(matches!(err, ReasoningError::MissingCredential));
    }

    #[test]
    fn blank_credential_counts_as_missing() {
        let config = ReasoningConfig {
            credential: Some("   ".to_string()),
            model: "mixtral".to_string(),
            ..ReasoningConfig::default()
        };
        assert!(!config.has_credential());
        let client = ChatCompletionClient::new(config, &HttpConfig::default());
        assert!(!client.is_configured());
        assert_eq!(client.model(), "mixtral");
        assert!(matches!(
            client.ask_for_json("system", "user"),
            Err(ReasoningError::MissingCredential)
        ));
    }

    #[test]
    fn parse_content_reads_first_choice() {
        let value = parse_content(payload(
            r#"{"choices":[{"message":{"content":"  {\"impact\": 7}  "}}]}"#,
        ))
        .expect("content should parse");
        assert_eq!(value["impact"], 7);
    }

    #[test]
    fn parse_content_rejects_empty_and_garbage() {
        assert!(matches!(
            parse_content(payload(r#"{"choices":[]}"#)),
            Err(ReasoningError::EmptyContent)
        ));
        assert!(matches!(
            parse_content(payload(r#"{"choices":[{"message":{"content":"   "}}]}"#)),
            Err(ReasoningError::EmptyContent)
        ));
        assert!(matches!(
            parse_content(payload(r#"{"choices":[{"message":{"content":"not json"}}]}"#)),
            Err(ReasoningError::InvalidJson(_))
        ));
    }

    #[test]
    fn successful_reply_is_parsed_from_first_choice() {
        let (base, server) = serve_once(
            "200 OK",
            &[("Content-Type", "application/json")],
            r#"{"choices":[{"message":{"content":"{\"complexity\": 6}"}}]}"#,
        );
        let value = client_for(&base)
            .ask_for_json("system", "user")
            .expect("reply should parse");
        assert_eq!(value["complexity"], 6);

        let request = server.join().expect("server thread should finish");
        assert!(request.starts_with("POST /openai/v1/chat/completions HTTP/1.1"));
        assert!(request.to_ascii_lowercase().contains("authorization: bearer gsk_test"));
        assert!(request.contains(r#""response_format":{"type":"json_object"}"#));
        assert!(request.contains(r#""model":"llama-3.3-70b-versatile""#));
    }

    #[test]
    fn error_status_is_reported_with_body() {
        let (base, server) = serve_once("500 Internal Server Error", &[], "upstream exploded");
        let err = client_for(&base)
            .ask_for_json("system", "user")
            .expect_err("500 should fail");
        assert!(matches!(
            err,
            ReasoningError::Status { status: 500, ref body } if body == "upstream exploded"
        ));
        server.join().expect("server thread should finish");
    }

    #[test]
    fn code_judge_falls_back_when_endpoint_fails() {
        let (base, server) = serve_once("500 Internal Server Error", &[], "upstream exploded");
        let client = client_for(&base);
        let evidence = evidence_with(&["src/a.ts", "test/a.test.ts"], 10, 2, 2);
        let score = CodeJudge::new(&client).judge(&evidence);
        assert_eq!(score, code::fallback(&evidence));
        server.join().expect("server thread should finish");
    }
}
