//! API request and response models

use serde::{de, Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::config::GenerationConfig;
use crate::error::Result;
use crate::prompt::GenerationRequest;

/// Generation form as posted by the index page
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct GenerateForm {
    /// Topic to generate ideas for (3-100 characters)
    pub niche: String,

    /// Number of ideas to generate (1-10)
    #[serde(default = "default_num_ideas")]
    pub num_ideas: u32,

    /// Whether each idea should carry an outline
    #[serde(default = "default_true", deserialize_with = "deserialize_form_bool")]
    pub include_outline: bool,

    /// Writing tone, the configured default when omitted
    #[serde(default)]
    pub tone: Option<String>,

    /// Model identifier, the configured default when omitted
    #[serde(default)]
    pub model: Option<String>,
}

fn default_num_ideas() -> u32 {
    3
}

fn default_true() -> bool {
    true
}

/// Accepts the spellings browsers and scripts use for checkbox values
fn deserialize_form_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" | "yes" => Ok(true),
        "false" | "off" | "0" | "no" => Ok(false),
        other => Err(de::Error::invalid_value(
            de::Unexpected::Str(other),
            &"a boolean such as true/false, on/off, 1/0 or yes/no",
        )),
    }
}

impl GenerateForm {
    /// Apply defaults and validate into a [`GenerationRequest`]
    pub fn into_request(self, defaults: &GenerationConfig) -> Result<GenerationRequest> {
        let tone = non_blank(self.tone).unwrap_or_else(|| defaults.default_tone.clone());
        let model = non_blank(self.model).unwrap_or_else(|| defaults.default_model.clone());

        GenerationRequest::new(self.niche, self.num_ideas, self.include_outline, tone, model)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Successful generation response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct GenerateResponse {
    pub generated_ideas: String,
}

/// Model listing response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ModelListResponse {
    pub models: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub backends: Vec<BackendSummary>,
}

/// Configured backend, in fallback order
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct BackendSummary {
    pub name: String,
    pub protocol: String,
    pub enabled: bool,
}
