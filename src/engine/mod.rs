pub mod context;
pub mod generator;
pub mod history;

pub use generator::LlmClient;
pub use history::ChatHistory;

use thiserror::Error;

use crate::models::ChatRole;
use crate::store::DataStore;

/// Session used when the caller does not name one
pub const DEFAULT_SESSION: &str = "default";

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,

    #[error("AI API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI API request failed with status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("malformed AI API response: {0}")]
    MalformedResponse(String),

    #[error("failed to serialize sales data: {0}")]
    Prompt(#[from] serde_json::Error),
}

/// Answer a question in the context of the sales data and the session's
/// conversation so far.
///
/// The session's turn stays open for the whole exchange, so concurrent
/// questions in one session are recorded as complete user/assistant pairs.
/// The question is recorded before the provider is called and stays
/// recorded if the call fails.
pub async fn answer(
    question: &str,
    session_id: &str,
    store: &DataStore,
    history: &ChatHistory,
    llm: &LlmClient,
) -> Result<String, EngineError> {
    let dataset = store.load().await;

    let mut turn = history.begin_turn(session_id).await;
    turn.append(ChatRole::User, question);

    let prompt = context::build_prompt(&dataset, &turn.messages())?;
    tracing::debug!(session = session_id, prompt_len = prompt.len(), "prompt built");

    let reply = generator::generate(&prompt, llm).await?;
    turn.append(ChatRole::Assistant, reply.clone());
    tracing::info!(session = session_id, "answer generated");

    Ok(reply)
}
