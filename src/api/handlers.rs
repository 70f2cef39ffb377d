use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use std::sync::Arc;

use super::dto::*;
use super::error::{ApiError, AppResult};
use super::state::AppState;
use crate::engine::{self, DEFAULT_SESSION};
use crate::models::{Dataset, SalesRep};
use crate::store::sales;

/// GET /api/sales/data - Full sales document
pub async fn get_data(State(state): State<Arc<AppState>>) -> AppResult<Json<Envelope<Dataset>>> {
    let dataset = state.store.load().await;

    Ok(Json(Envelope::ok(
        Dataset::clone(&dataset),
        "Sales data retrieved successfully.",
    )))
}

/// GET /api/sales/user/{id} - One sales representative
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Envelope<SalesRep>>> {
    let Path(id) = id.map_err(|e| ApiError::BadRequest(format!("Invalid user ID: {}", e)))?;
    let dataset = state.store.load().await;

    let rep = sales::rep_by_id(&dataset, id)
        .ok_or_else(|| ApiError::NotFound(format!("User with ID {} not found.", id)))?;

    Ok(Json(Envelope::ok(rep.clone(), "User retrieved successfully.")))
}

/// GET /api/sales/clients - All clients, annotated with their owner
pub async fn get_clients(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Envelope<ClientsData>>> {
    let dataset = state.store.load().await;
    let clients = sales::all_clients(&dataset);
    tracing::debug!(count = clients.len(), "clients listed");

    Ok(Json(Envelope::ok(
        ClientsData { clients },
        "Clients list retrieved successfully.",
    )))
}

/// POST /api/chatbot/ai - Ask a question about the sales data
pub async fn ask_ai(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AskRequest>, JsonRejection>,
) -> AppResult<Json<Envelope<AnswerData>>> {
    let Json(req) = body.map_err(|e| {
        tracing::warn!("rejected chat body: {}", e);
        ApiError::BadRequest("Invalid JSON input.".into())
    })?;

    let question = req.question.as_deref().map(str::trim).unwrap_or_default();
    if question.is_empty() {
        return Err(ApiError::BadRequest("Question is required.".into()));
    }

    let session_id = req
        .session_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SESSION);

    // LLM call runs with only this session locked (slow: seconds)
    let answer = engine::answer(question, session_id, &state.store, &state.history, &state.llm)
        .await?;

    Ok(Json(Envelope::ok(
        AnswerData { answer },
        "Answer generated successfully.",
    )))
}

/// GET /api/chatbot/history/{session_id} - Messages exchanged in a session
pub async fn get_history(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> AppResult<Json<Envelope<HistoryData>>> {
    let messages = state.history.get(&session_id);

    Ok(Json(Envelope::ok(
        HistoryData {
            session_id,
            messages,
        },
        "Chat history retrieved successfully.",
    )))
}

/// GET /health - Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
