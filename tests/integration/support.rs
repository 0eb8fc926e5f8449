//! Shared helpers for integration tests

use idea_gen_gateway::backend::{create_text_backend, Dispatcher, TextBackend};
use idea_gen_gateway::config::{BackendConfig, ProtocolType};
use std::sync::Arc;
use wiremock::MockServer;

pub const DEFAULT_MODEL: &str = "gemma2:2b";

pub fn backend_config(name: &str, protocol: ProtocolType, server: &MockServer) -> BackendConfig {
    BackendConfig {
        name: name.to_string(),
        protocol,
        endpoint: format!("{}/api", server.uri()),
        ..Default::default()
    }
}

pub fn backend(config: &BackendConfig) -> Arc<dyn TextBackend> {
    create_text_backend(config).unwrap()
}

/// open-webui style primary plus Ollama secondary, both on mock servers
pub fn dispatcher(primary: BackendConfig, secondary: BackendConfig) -> Dispatcher {
    Dispatcher::new(vec![backend(&primary), backend(&secondary)], DEFAULT_MODEL)
}
