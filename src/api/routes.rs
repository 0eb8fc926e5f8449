//! HTTP route definitions

use crate::api::models::*;
use crate::api::{handlers, pages};
use crate::error::ErrorResponse;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog Idea Gateway API",
        description = "Generates blog post ideas through a chain of LLM backends.",
        license(name = "MIT"),
    ),
    paths(
        handlers::generate_ideas,
        handlers::list_models,
        handlers::health_check,
    ),
    components(schemas(
        GenerateForm,
        GenerateResponse,
        ModelListResponse,
        HealthResponse,
        BackendSummary,
        ErrorResponse,
    )),
    tags(
        (name = "Generation", description = "Blog idea generation"),
        (name = "Models", description = "Model discovery"),
        (name = "Health", description = "Health and monitoring endpoints"),
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router(state: Arc<crate::AppState>) -> Router {
    let static_dir = state.settings.server.static_dir.clone();

    Router::new()
        // Form page
        .route("/", get(pages::index))
        .route("/generate", post(handlers::generate_ideas))
        .route("/models", get(handlers::list_models))
        // Health check endpoint
        .route("/health", get(handlers::health_check))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Static assets for the form page
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
