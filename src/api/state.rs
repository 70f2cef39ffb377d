use std::sync::Arc;

use crate::config::AppConfig;
use crate::engine::{ChatHistory, EngineError, LlmClient};
use crate::store::DataStore;

/// Shared state for all handlers
pub struct AppState {
    // Loaded once, read-only afterwards
    pub store: DataStore,

    // Per-session locking lives inside
    pub history: ChatHistory,

    pub llm: LlmClient,
}

impl AppState {
    pub fn new(store: DataStore, llm: LlmClient) -> Arc<Self> {
        Arc::new(Self {
            store,
            history: ChatHistory::new(),
            llm,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Arc<Self>, EngineError> {
        let store = DataStore::new(&config.data_path);
        let llm = LlmClient::new(&config.gemini)?;
        Ok(Self::new(store, llm))
    }
}
