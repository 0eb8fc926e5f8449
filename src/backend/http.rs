//! HTTP plumbing shared by the backend adapters

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{AppError, Result};

/// Build a client whose requests are bounded by `timeout_ms`
pub fn build_client(timeout_ms: u64) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .build()
        .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))
}

/// Join a base URL and a path without doubling the slash
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub fn unavailable(backend: &str, error: reqwest::Error) -> AppError {
    AppError::BackendUnavailable {
        backend: backend.to_string(),
        source: error,
    }
}

/// Check the status and decode the body of a backend response.
///
/// Non-success statuses keep the response body for diagnostics.
pub async fn read_json<T: DeserializeOwned>(backend: &str, response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::BackendError {
            backend: backend.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    response.json::<T>().await.map_err(|e| {
        if e.is_decode() {
            AppError::InvalidResponse {
                backend: backend.to_string(),
                message: e.to_string(),
            }
        } else {
            unavailable(backend, e)
        }
    })
}
