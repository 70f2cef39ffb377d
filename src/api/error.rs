use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::dto::Envelope;
use crate::engine::EngineError;

/// API-layer error type. Every variant renders as a failure envelope.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 400 - Missing or invalid input
    #[error("{0}")]
    BadRequest(String),

    /// 404 - Lookup miss
    #[error("{0}")]
    NotFound(String),

    /// 500 - Upstream or unexpected failure
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        (status, Json(Envelope::failure(self.to_string()))).into_response()
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, ApiError>;
