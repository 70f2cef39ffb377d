mod dto;
mod error;
mod handlers;
mod state;

pub use dto::{AnswerData, AskRequest, Envelope};
pub use error::{ApiError, AppResult};
pub use state::AppState;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api/sales", sales_routes())
        .nest("/api/chatbot", chatbot_routes())
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Router with CORS restricted to the frontend origin
pub fn router_with_cors(state: Arc<AppState>, origin: &str) -> Router {
    router(state).layer(cors_layer(origin))
}

fn sales_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/data", get(handlers::get_data))
        // Older frontend builds request this path
        .route("/api/data", get(handlers::get_data))
        .route("/user/{id}", get(handlers::get_user))
        .route("/clients", get(handlers::get_clients))
}

fn chatbot_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ai", post(handlers::ask_ai))
        .route("/history/{session_id}", get(handlers::get_history))
}

fn cors_layer(origin: &str) -> CorsLayer {
    let allow_origin = match origin.parse::<HeaderValue>() {
        Ok(value) => AllowOrigin::exact(value),
        Err(e) => {
            tracing::warn!(origin, "invalid CORS origin ({}); allowing any", e);
            AllowOrigin::any()
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
