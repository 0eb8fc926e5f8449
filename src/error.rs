//! Error types for the gateway

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// Message returned to callers when every backend has been exhausted
pub const GENERATION_FAILED_DETAIL: &str = "Failed to generate content from available LLMs";

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Backend '{backend}' unavailable: {source}")]
    BackendUnavailable {
        backend: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Backend '{backend}' returned {status}: {body}")]
    BackendError {
        backend: String,
        status: u16,
        body: String,
    },

    #[error("Backend '{0}' returned no usable text")]
    EmptyResult(String),

    #[error("Backend '{backend}' returned an unreadable response: {message}")]
    InvalidResponse { backend: String, message: String },

    #[error("{}", GENERATION_FAILED_DETAIL)]
    GenerationFailed,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error body, shaped `{"detail": "..."}`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BackendUnavailable { .. }
            | AppError::BackendError { .. }
            | AppError::EmptyResult(_)
            | AppError::InvalidResponse { .. } => StatusCode::BAD_GATEWAY,
            AppError::GenerationFailed
            | AppError::Config(_)
            | AppError::Template(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, status = status.as_u16(), "Request failed");
        }

        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
