//! Blog Idea Gateway
//!
//! Serves a form that turns a topic into blog post ideas, forwarding the
//! generated prompt to a chain of LLM backends (an OpenAI-compatible API
//! first, a local Ollama second) and returning the first usable answer.

pub mod api;
pub mod backend;
pub mod config;
pub mod error;
pub mod prompt;

pub use error::{AppError, Result};

use std::sync::Arc;

use backend::Dispatcher;
use minijinja::Environment;

/// Application state shared across all handlers
pub struct AppState {
    pub settings: Arc<config::Settings>,
    pub dispatcher: Arc<Dispatcher>,
    pub templates: Arc<Environment<'static>>,
}

impl AppState {
    /// Build the state for `settings`, creating the backend chain from it
    pub fn from_settings(settings: config::Settings) -> Result<Self> {
        let dispatcher = Dispatcher::from_settings(&settings)?;
        Self::with_dispatcher(settings, dispatcher)
    }

    /// Build the state around an already constructed dispatcher
    pub fn with_dispatcher(settings: config::Settings, dispatcher: Dispatcher) -> Result<Self> {
        Ok(Self {
            settings: Arc::new(settings),
            dispatcher: Arc::new(dispatcher),
            templates: Arc::new(api::pages::template_env()?),
        })
    }
}
