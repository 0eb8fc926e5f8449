//! Fallback-chain dispatch over the configured text backends

use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::backend::text_backend::{create_text_backends, TextBackend};
use crate::config::Settings;
use crate::error::{AppError, Result};

/// Tries backends in order until one produces usable text
pub struct Dispatcher {
    backends: Vec<Arc<dyn TextBackend>>,
    default_model: String,
}

impl Dispatcher {
    /// Create a dispatcher over `backends`, tried in the given order
    pub fn new(backends: Vec<Arc<dyn TextBackend>>, default_model: impl Into<String>) -> Self {
        Self {
            backends,
            default_model: default_model.into(),
        }
    }

    /// Build the backend chain described by the settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let backends = create_text_backends(&settings.backends)?;
        Ok(Self::new(backends, settings.generation.default_model.clone()))
    }

    pub fn backends(&self) -> &[Arc<dyn TextBackend>] {
        &self.backends
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// Generate text for `prompt`, falling back through the backend chain.
    ///
    /// Per-backend failures are logged and swallowed; only
    /// [`AppError::GenerationFailed`] is returned when the chain is exhausted.
    pub async fn dispatch(&self, prompt: &str, model: &str) -> Result<String> {
        for backend in self.enabled_backends() {
            match backend.generate(prompt, model).await {
                Ok(text) if !text.is_empty() => {
                    info!(
                        backend = %backend.name(),
                        model = %model,
                        chars = text.len(),
                        "Generation succeeded"
                    );
                    return Ok(text);
                }
                Ok(_) => {
                    warn!(backend = %backend.name(), model = %model, "Backend returned empty text");
                }
                Err(e) => {
                    warn!(backend = %backend.name(), model = %model, error = %e, "Backend generation failed");
                }
            }
        }

        error!(model = %model, "No backend produced usable text");
        Err(AppError::GenerationFailed)
    }

    /// List models from the first backend that reports any, else the default model
    pub async fn list_models(&self) -> Vec<String> {
        for backend in self.enabled_backends() {
            match backend.list_models().await {
                Ok(models) if !models.is_empty() => {
                    debug!(backend = %backend.name(), count = models.len(), "Listed models");
                    return models;
                }
                Ok(_) => {
                    warn!(backend = %backend.name(), "Backend reported no models");
                }
                Err(e) => {
                    warn!(backend = %backend.name(), error = %e, "Failed to list models");
                }
            }
        }

        vec![self.default_model.clone()]
    }

    fn enabled_backends(&self) -> impl Iterator<Item = &Arc<dyn TextBackend>> {
        self.backends.iter().filter(|backend| {
            let enabled = backend.is_enabled();
            if !enabled {
                debug!(backend = %backend.name(), "Skipping disabled backend");
            }
            enabled
        })
    }
}
