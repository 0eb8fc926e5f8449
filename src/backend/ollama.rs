//! Ollama native API backend (`/generate`, `/tags`)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::backend::extract::extract_response_field;
use crate::backend::http::{build_client, join_url, read_json, unavailable};
use crate::backend::TextBackend;
use crate::config::{BackendConfig, ProtocolType};
use crate::error::{AppError, Result};

/// Ollama generate request; streaming is always off
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<LocalModel>,
}

#[derive(Debug, Clone, Deserialize)]
struct LocalModel {
    #[serde(default)]
    name: Option<String>,
}

pub struct OllamaBackend {
    name: String,
    client: Client,
    endpoint: String,
    enabled: bool,
}

impl OllamaBackend {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        Ok(Self {
            name: config.name.clone(),
            client: build_client(config.timeout_ms)?,
            endpoint: config.resolved_endpoint(),
            enabled: config.enabled,
        })
    }
}

#[async_trait]
impl TextBackend for OllamaBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn protocol(&self) -> ProtocolType {
        ProtocolType::Ollama
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn generate(&self, prompt: &str, model: &str) -> Result<String> {
        let url = join_url(&self.endpoint, "generate");
        debug!(backend = %self.name, url = %url, model = %model, "Sending generate request");

        let request = GenerateRequest {
            model: model.to_string(),
            prompt: prompt.to_string(),
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| unavailable(&self.name, e))?;

        let body: Value = read_json(&self.name, response).await?;
        extract_response_field(&body).ok_or_else(|| AppError::EmptyResult(self.name.clone()))
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        let url = join_url(&self.endpoint, "tags");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| unavailable(&self.name, e))?;

        let tags: TagsResponse = read_json(&self.name, response).await?;
        Ok(tags.models.into_iter().filter_map(|m| m.name).collect())
    }
}
