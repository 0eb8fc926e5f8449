//! Text generation backend trait and the OpenAI-compatible adapter
//! (OpenAI, open-webui, vLLM and anything else serving `/chat/completions`)

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::backend::extract::extract_generated_text;
use crate::backend::http::{build_client, join_url, read_json, unavailable};
use crate::backend::ollama::OllamaBackend;
use crate::config::{BackendConfig, ProtocolType};
use crate::error::{AppError, Result};

/// Chat message for completion requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat completion request (OpenAI compatible)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Model information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    #[serde(default)]
    pub id: Option<String>,
}

/// Models list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsResponse {
    #[serde(default)]
    pub data: Vec<ModelInfo>,
}

/// Trait for text generation backends
#[async_trait]
pub trait TextBackend: Send + Sync {
    /// Get the backend name
    fn name(&self) -> &str;

    /// Get the backend protocol
    fn protocol(&self) -> ProtocolType;

    /// Check if enabled
    fn is_enabled(&self) -> bool;

    /// Generate text for a prompt; errors when the backend yields nothing usable
    async fn generate(&self, prompt: &str, model: &str) -> Result<String>;

    /// List the model identifiers the backend serves
    async fn list_models(&self) -> Result<Vec<String>>;
}

/// OpenAI API compatible text backend
pub struct OpenAICompatibleBackend {
    name: String,
    client: Client,
    endpoint: String,
    enabled: bool,
    auth_token: Option<String>,
}

impl OpenAICompatibleBackend {
    /// Create a new OpenAI compatible backend
    pub fn new(config: &BackendConfig) -> Result<Self> {
        Ok(Self {
            name: config.name.clone(),
            client: build_client(config.timeout_ms)?,
            endpoint: config.resolved_endpoint(),
            enabled: config.enabled,
            auth_token: config.resolved_token(),
        })
    }

    /// Get headers with authentication
    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = &self.auth_token {
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                headers.insert(AUTHORIZATION, value);
            }
        }

        headers
    }
}

#[async_trait]
impl TextBackend for OpenAICompatibleBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn protocol(&self) -> ProtocolType {
        ProtocolType::OpenAI
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn generate(&self, prompt: &str, model: &str) -> Result<String> {
        let url = join_url(&self.endpoint, "chat/completions");
        debug!(backend = %self.name, url = %url, model = %model, "Sending chat completion request");

        let request = ChatCompletionRequest {
            model: model.to_string(),
            messages: vec![ChatMessage::user(prompt)],
        };

        let response = self
            .client
            .post(&url)
            .headers(self.get_headers())
            .json(&request)
            .send()
            .await
            .map_err(|e| unavailable(&self.name, e))?;

        let body: Value = read_json(&self.name, response).await?;
        extract_generated_text(&body).ok_or_else(|| AppError::EmptyResult(self.name.clone()))
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        let url = join_url(&self.endpoint, "models");

        let response = self
            .client
            .get(&url)
            .headers(self.get_headers())
            .send()
            .await
            .map_err(|e| unavailable(&self.name, e))?;

        let models: ModelsResponse = read_json(&self.name, response).await?;
        Ok(models.data.into_iter().filter_map(|m| m.id).collect())
    }
}

/// Create appropriate text backend based on configuration
pub fn create_text_backend(config: &BackendConfig) -> Result<Arc<dyn TextBackend>> {
    match config.protocol {
        ProtocolType::OpenAI => Ok(Arc::new(OpenAICompatibleBackend::new(config)?)),
        ProtocolType::Ollama => Ok(Arc::new(OllamaBackend::new(config)?)),
    }
}

/// Create every configured backend, preserving configuration order
pub fn create_text_backends(configs: &[BackendConfig]) -> Result<Vec<Arc<dyn TextBackend>>> {
    configs.iter().map(create_text_backend).collect()
}
