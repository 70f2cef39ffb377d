use serde::{Deserialize, Serialize};

use crate::models::{ChatMessage, ClientRecord};

/// Uniform response body: `{success, data, message}`
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
}

impl<T> Envelope<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
        }
    }
}

impl Envelope<()> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: message.into(),
        }
    }
}

/// POST /api/chatbot/ai request.
///
/// Both fields are optional at the wire level so a missing question is
/// reported as a validation error rather than a body rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default, alias = "session_id")]
    pub session_id: Option<String>,
}

/// POST /api/chatbot/ai response data
#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerData {
    pub answer: String,
}

/// GET /api/sales/clients response data
#[derive(Debug, Serialize)]
pub struct ClientsData {
    pub clients: Vec<ClientRecord>,
}

/// GET /api/chatbot/history/{session_id} response data
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryData {
    pub session_id: String,
    pub messages: Vec<ChatMessage>,
}

/// GET /health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
