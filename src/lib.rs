//! Sales data API with a conversational assistant.
//!
//! Serves a static JSON document of sales representatives and their clients,
//! and answers free-form questions about it by forwarding the data and the
//! conversation to Gemini's `generateContent` endpoint.
//!
//! # Modules
//!
//! - [`models`]: Dataset, representatives, clients, chat messages
//! - [`store`]: Load-once data store and read-only sales queries
//! - [`engine`]: Chat history, prompt building, Gemini client, answering
//! - [`api`]: Axum router, handlers, response envelope, error mapping
//! - [`config`]: Environment-driven configuration
//!
//! # Routes
//!
//! - `GET /api/sales/data` - Full dataset
//! - `GET /api/sales/user/{id}` - One representative
//! - `GET /api/sales/clients` - Every client, annotated with its owner
//! - `POST /api/chatbot/ai` - Ask a question (`{question, sessionId?}`)
//! - `GET /api/chatbot/history/{session_id}` - Session transcript
//! - `GET /health` - Liveness
//!
//! Every `/api` response uses the envelope `{success, data, message}`.

pub mod api;
pub mod config;
pub mod engine;
pub mod models;
pub mod store;

pub use api::{AppState, router};
pub use config::AppConfig;
