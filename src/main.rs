//! Main entry point for the Blog Idea Gateway

use idea_gen_gateway::{api, config::Settings, AppState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = Settings::load()?;
    settings.validate()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));
    let (json_layer, text_layer) = if settings.logging.format == "json" {
        (Some(fmt::layer().json()), None)
    } else {
        (None, Some(fmt::layer()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    info!("Starting Blog Idea Gateway");
    info!(
        "Loaded configuration: server={}:{}",
        settings.server.host, settings.server.port
    );

    let addr = format!("{}:{}", settings.server.host, settings.server.port);

    let app_state = Arc::new(AppState::from_settings(settings)?);
    for backend in app_state.dispatcher.backends() {
        info!(
            backend = %backend.name(),
            protocol = %backend.protocol(),
            enabled = backend.is_enabled(),
            "Registered text backend"
        );
    }

    // Build the router
    let app = api::routes::create_router(app_state);

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
