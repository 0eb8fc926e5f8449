//! HTML form page

use crate::error::Result;
use crate::prompt::{MAX_IDEAS, MAX_NICHE_CHARS, MIN_IDEAS, MIN_NICHE_CHARS};
use crate::AppState;
use axum::{extract::State, response::Html};
use minijinja::{context, Environment};
use std::sync::Arc;

const INDEX_TEMPLATE_NAME: &str = "index.html";
const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Compile the page templates
pub fn template_env() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.add_template(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)?;
    Ok(env)
}

/// Render the generation form
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    let generation = &state.settings.generation;
    let html = state.templates.get_template(INDEX_TEMPLATE_NAME)?.render(context! {
        default_model => generation.default_model,
        default_tone => generation.default_tone,
        min_niche => MIN_NICHE_CHARS,
        max_niche => MAX_NICHE_CHARS,
        min_ideas => MIN_IDEAS,
        max_ideas => MAX_IDEAS,
    })?;
    Ok(Html(html))
}
