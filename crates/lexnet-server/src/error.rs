//! Error types for the Lexnet Server
//!
//! Every failure a handler can return converts into `ServerError`, which
//! renders as a JSON body `{"error": <code>, "detail": <message>}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lexnet_kb::{ExplorerError, StoreError};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    /// Unknown synset id
    #[error("{0}")]
    NotFound(String),

    /// Parameter outside its documented bound
    #[error("{0}")]
    InvalidArgument(String),

    /// Both synsets exist but no connecting path does
    #[error("{0}")]
    NoPath(String),

    /// Operation exceeded its deadline
    #[error("{0}")]
    Timeout(String),

    /// Lexical store failure
    #[error("Lexical store error: {0}")]
    StoreError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    /// HTTP status and machine-readable code for this error
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ServerError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ServerError::InvalidArgument(_) => (StatusCode::BAD_REQUEST, "invalid_argument"),
            ServerError::NoPath(_) => (StatusCode::NOT_FOUND, "no_path"),
            ServerError::Timeout(_) => (StatusCode::GATEWAY_TIMEOUT, "timeout"),
            ServerError::StoreError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "store_error"),
            ServerError::ConfigError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            ServerError::InternalError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            error!(error = %self, code, "Request failed");
        }
        let body = json!({
            "error": code,
            "detail": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

// Implement conversions from other error types
impl From<ExplorerError> for ServerError {
    fn from(err: ExplorerError) -> Self {
        let detail = err.to_string();
        match err {
            ExplorerError::NotFound { .. } => ServerError::NotFound(detail),
            ExplorerError::InvalidArgument { .. } => ServerError::InvalidArgument(detail),
            ExplorerError::NoPathFound { .. } => ServerError::NoPath(detail),
            ExplorerError::Timeout { .. } => ServerError::Timeout(detail),
            ExplorerError::Store(inner) => ServerError::from(inner),
        }
    }
}

impl From<StoreError> for ServerError {
    fn from(err: StoreError) -> Self {
        ServerError::StoreError(err.to_string())
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::InternalError(format!("IO error: {}", err))
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::InternalError(format!("Error: {}", err))
    }
}
