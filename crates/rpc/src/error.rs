use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use plexdi_lifecycle::LifecycleError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RPC errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RpcError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Too many requests, please slow down.")]
    RateLimited,

    #[error("Server error: {0}")]
    ServerError(String),
}

impl RpcError {
    /// Metric label for this error
    pub fn kind(&self) -> &'static str {
        match self {
            RpcError::InvalidRequest(_) => "invalid_request",
            RpcError::NotFound(_) => "not_found",
            RpcError::Persistence(_) => "persistence",
            RpcError::RateLimited => "rate_limited",
            RpcError::ServerError(_) => "server",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RpcError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RpcError::NotFound(_) => StatusCode::NOT_FOUND,
            RpcError::Persistence(_) | RpcError::ServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            RpcError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        }
    }
}

impl From<LifecycleError> for RpcError {
    fn from(err: LifecycleError) -> Self {
        match err {
            LifecycleError::Validation(e) => RpcError::InvalidRequest(e.to_string()),
            LifecycleError::NotFound(id) => RpcError::NotFound(format!("Commission {id} not found")),
            LifecycleError::Persistence(msg) => RpcError::Persistence(msg),
        }
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Database details stay in the log
        let error = if status.is_server_error() {
            tracing::error!("❌ {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}
