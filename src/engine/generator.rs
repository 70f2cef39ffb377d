use serde::{Deserialize, Serialize};

use super::EngineError;
use crate::config::GeminiConfig;

/// Answer used when the provider returns no candidate text
pub const NO_RESPONSE: &str = "No response.";

// ---------------------------------------------------------------------------
// Wire types (generateContent)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RequestContent {
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RequestPart {
    pub text: String,
}

impl GenerateContentRequest {
    /// Single-turn request carrying one text part
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if any
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Wrapper around the Gemini `generateContent` endpoint
pub struct LlmClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl LlmClient {
    pub fn new(config: &GeminiConfig) -> Result<Self, EngineError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

/// The request URL carries the API key; keep it out of errors and logs.
fn redact(err: reqwest::Error) -> EngineError {
    EngineError::Http(err.without_url())
}

/// Send one prompt to the provider and return the first candidate's text.
///
/// A non-success status is an error; there is no retry.
pub async fn generate(prompt: &str, client: &LlmClient) -> Result<String, EngineError> {
    let api_key = client.api_key.as_deref().ok_or(EngineError::MissingApiKey)?;

    let response = client
        .http
        .post(client.endpoint())
        .query(&[("key", api_key)])
        .json(&GenerateContentRequest::from_prompt(prompt))
        .send()
        .await
        .map_err(redact)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::error!(status = status.as_u16(), body = %body, "Gemini API error");
        return Err(EngineError::Upstream {
            status: status.as_u16(),
            body,
        });
    }

    let body = response.text().await.map_err(redact)?;
    let parsed: GenerateContentResponse = serde_json::from_str(&body)
        .map_err(|e| EngineError::MalformedResponse(e.to_string()))?;

    Ok(parsed.first_text().unwrap_or(NO_RESPONSE).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    fn config(api_key: Option<&str>) -> GeminiConfig {
        GeminiConfig {
            api_key: api_key.map(String::from),
            model: "gemini-2.0-flash".into(),
            base_url: "https://generativelanguage.googleapis.com/".into(),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_request_wire_shape() {
        let body = serde_json::to_value(GenerateContentRequest::from_prompt("hello")).unwrap();
        assert_eq!(body, json!({"contents": [{"parts": [{"text": "hello"}]}]}));
    }

    #[test]
    fn test_first_text_extraction() {
        let parsed: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}, {"text": "second"}]}},
                {"content": {"parts": [{"text": "other candidate"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(parsed.first_text(), Some("first"));
    }

    #[test]
    fn test_first_text_missing_pieces() {
        for body in [
            json!({}),
            json!({"candidates": []}),
            json!({"candidates": [{}]}),
            json!({"candidates": [{"content": {"parts": []}}]}),
            json!({"candidates": [{"content": {"parts": [{}]}}]}),
        ] {
            let parsed: GenerateContentResponse = serde_json::from_value(body).unwrap();
            assert_eq!(parsed.first_text(), None);
        }
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = LlmClient::new(&config(Some("k"))).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_generate_without_key_fails_fast() {
        let client = LlmClient::new(&config(None)).unwrap();
        let err = generate("hi", &client).await.unwrap_err();
        assert!(matches!(err, EngineError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_transport_error_hides_api_key() {
        let mut cfg = config(Some("very-secret-key"));
        cfg.base_url = "http://127.0.0.1:9".into();
        let client = LlmClient::new(&cfg).unwrap();

        let err = generate("hi", &client).await.unwrap_err();
        assert!(matches!(err, EngineError::Http(_)));
        assert!(!err.to_string().contains("very-secret-key"));
        assert!(!format!("{:?}", err).contains("very-secret-key"));
    }

    // Integration tests require API key, mark as ignored
    #[tokio::test]
    #[ignore = "requires GEMINI_API_KEY"]
    async fn test_generate_basic() {
        let mut cfg = config(None);
        cfg.api_key = std::env::var("GEMINI_API_KEY").ok();
        let client = LlmClient::new(&cfg).unwrap();
        let response = generate("Say 'hello' and nothing else.", &client)
            .await
            .unwrap();

        assert!(response.to_lowercase().contains("hello"));
    }
}
