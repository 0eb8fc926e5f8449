//! HTTP request handlers

use crate::api::models::{
    BackendSummary, GenerateForm, GenerateResponse, HealthResponse, ModelListResponse,
};
use crate::error::{AppError, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{rejection::FormRejection, State},
    Form, Json,
};
use std::sync::Arc;
use tracing::info;

/// Generate blog ideas for the posted form
#[utoipa::path(
    post,
    path = "/generate",
    tag = "Generation",
    request_body(content = GenerateForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Ideas generated", body = GenerateResponse),
        (status = 422, description = "Invalid form input", body = ErrorResponse),
        (status = 500, description = "No backend produced usable text", body = ErrorResponse),
    )
)]
pub async fn generate_ideas(
    State(state): State<Arc<AppState>>,
    form: Result<Form<GenerateForm>, FormRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Form(form) = form.map_err(|e| AppError::InvalidRequest(e.body_text()))?;

    info!(
        niche = %form.niche,
        num_ideas = form.num_ideas,
        include_outline = form.include_outline,
        tone = ?form.tone,
        model = ?form.model,
        "Received generation request"
    );

    let request = form.into_request(&state.settings.generation)?;
    let generated_ideas = state
        .dispatcher
        .dispatch(&request.prompt(), request.model())
        .await?;

    info!(
        model = %request.model(),
        chars = generated_ideas.len(),
        "Generation completed"
    );

    Ok(Json(GenerateResponse { generated_ideas }))
}

/// List models available on the backends
#[utoipa::path(
    get,
    path = "/models",
    tag = "Models",
    responses((status = 200, description = "Available models", body = ModelListResponse))
)]
pub async fn list_models(State(state): State<Arc<AppState>>) -> Json<ModelListResponse> {
    let models = state.dispatcher.list_models().await;
    info!(count = models.len(), "Listed models");
    Json(ModelListResponse { models })
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let backends = state
        .dispatcher
        .backends()
        .iter()
        .map(|b| BackendSummary {
            name: b.name().to_string(),
            protocol: b.protocol().to_string(),
            enabled: b.is_enabled(),
        })
        .collect();

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backends,
    })
}
