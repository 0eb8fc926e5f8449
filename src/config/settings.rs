//! Application settings and configuration management

use crate::error::{AppError, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable that overrides the gateway config file location
pub const CONFIG_PATH_ENV: &str = "IDEA_GATEWAY_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "config/gateway.yaml";
const DEFAULT_BACKENDS_PATH: &str = "config/backends.yaml";
const ENV_PREFIX: &str = "IDEA_GATEWAY";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub generation: GenerationConfig,
    #[serde(default = "default_backends")]
    pub backends: Vec<BackendConfig>,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_static_dir() -> String {
    "static".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

/// Defaults applied to generation requests
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationConfig {
    #[serde(default = "default_model")]
    pub default_model: String,
    #[serde(default = "default_tone")]
    pub default_tone: String,
}

fn default_model() -> String {
    "gemma2:2b".to_string()
}

fn default_tone() -> String {
    "professional".to_string()
}

/// Wire protocol spoken by a backend
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolType {
    /// `/chat/completions` + `/models` with bearer auth (OpenAI, open-webui, vLLM)
    OpenAI,
    /// `/generate` + `/tags` (Ollama native API)
    Ollama,
}

impl Default for ProtocolType {
    fn default() -> Self {
        ProtocolType::OpenAI
    }
}

impl std::fmt::Display for ProtocolType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProtocolType::OpenAI => write!(f, "openai"),
            ProtocolType::Ollama => write!(f, "ollama"),
        }
    }
}

/// Authentication for backend
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct BackendAuth {
    /// Environment variable holding the bearer token
    #[serde(default)]
    pub token_env: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Backend configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    pub name: String,

    #[serde(default)]
    pub protocol: ProtocolType,

    /// Base URL; path segments such as `/chat/completions` are appended to it
    pub endpoint: String,

    /// Environment variable that, when set, replaces `endpoint`
    #[serde(default)]
    pub endpoint_env: Option<String>,

    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default)]
    pub auth: BackendAuth,

    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,
}

fn default_true() -> bool {
    true
}

fn default_timeout() -> u64 {
    60000
}

impl BackendConfig {
    /// Base URL after applying the `endpoint_env` override
    pub fn resolved_endpoint(&self) -> String {
        self.endpoint_env
            .as_deref()
            .and_then(|var| std::env::var(var).ok())
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.endpoint.clone())
    }

    /// Bearer token, read from `token_env` first and then from `api_key`
    pub fn resolved_token(&self) -> Option<String> {
        self.auth
            .token_env
            .as_deref()
            .and_then(|var| std::env::var(var).ok())
            .or_else(|| self.auth.api_key.clone())
            .filter(|token| !token.is_empty())
    }
}

/// Primary then secondary, in the order the dispatcher tries them
pub fn default_backends() -> Vec<BackendConfig> {
    vec![
        BackendConfig {
            name: "open-webui".to_string(),
            protocol: ProtocolType::OpenAI,
            endpoint: "https://chat.ivislabs.in/api".to_string(),
            endpoint_env: Some("WEBUI_BASE_URL".to_string()),
            enabled: true,
            auth: BackendAuth {
                token_env: Some("WEBUI_API_KEY".to_string()),
                api_key: None,
            },
            timeout_ms: default_timeout(),
        },
        BackendConfig {
            name: "ollama".to_string(),
            protocol: ProtocolType::Ollama,
            endpoint: "http://localhost:11434/api".to_string(),
            endpoint_env: Some("OLLAMA_API_URL".to_string()),
            enabled: true,
            auth: BackendAuth::default(),
            timeout_ms: default_timeout(),
        },
    ]
}

/// YAML backends file structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct BackendsConfig {
    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub backends: Vec<BackendConfig>,
}

impl Settings {
    /// Load settings from configuration files and environment variables
    pub fn load() -> Result<Self> {
        let gateway_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from_paths(gateway_path, Some(DEFAULT_BACKENDS_PATH.to_string()))
    }

    /// Load settings from YAML (or TOML) configuration files
    pub fn load_from_paths<P: AsRef<Path>>(
        gateway_config: P,
        backends_config: Option<P>,
    ) -> Result<Self> {
        let gateway_path = gateway_config.as_ref();

        let format = if gateway_path
            .extension()
            .map_or(false, |ext| ext == "yaml" || ext == "yml")
        {
            FileFormat::Yaml
        } else {
            FileFormat::Toml
        };

        let mut config_builder = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", 8000)?
            .set_default("server.static_dir", default_static_dir())?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?
            .set_default("generation.default_model", default_model())?
            .set_default("generation.default_tone", default_tone())?;

        if gateway_path.exists() {
            config_builder = config_builder.add_source(File::from(gateway_path).format(format));
        }

        config_builder = config_builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config = config_builder.build()?;
        let mut settings: Settings = config.try_deserialize()?;

        if let Some(backends_path) = backends_config {
            let backends_path = backends_path.as_ref();
            if backends_path.exists() {
                let backends_config = Self::load_backends_config(backends_path)?;
                settings.backends = backends_config.backends;
            }
        }

        Ok(settings)
    }

    /// Load backends configuration from YAML file
    pub fn load_backends_config<P: AsRef<Path>>(path: P) -> Result<BackendsConfig> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            AppError::Config(config::ConfigError::Message(format!(
                "Failed to read backends config: {}",
                e
            )))
        })?;

        Self::parse_backends_config(&content)
    }

    /// Parse a backends YAML document
    pub fn parse_backends_config(content: &str) -> Result<BackendsConfig> {
        serde_yaml::from_str(content).map_err(|e| {
            AppError::Config(config::ConfigError::Message(format!(
                "Failed to parse backends config: {}",
                e
            )))
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(invalid("Server port cannot be 0".to_string()));
        }

        if self.generation.default_model.trim().is_empty() {
            return Err(invalid("Default model cannot be empty".to_string()));
        }

        for backend in &self.backends {
            if backend.name.is_empty() {
                return Err(invalid("Backend name cannot be empty".to_string()));
            }
            if backend.endpoint.trim().is_empty() {
                return Err(invalid(format!(
                    "Backend '{}' must have an endpoint",
                    backend.name
                )));
            }
            if backend.timeout_ms == 0 {
                return Err(invalid(format!(
                    "Backend '{}' timeout cannot be 0",
                    backend.name
                )));
            }
        }

        Ok(())
    }

    /// Get enabled backends, in fallback order
    pub fn get_enabled_backends(&self) -> Vec<&BackendConfig> {
        self.backends.iter().filter(|b| b.enabled).collect()
    }
}

fn invalid(message: String) -> AppError {
    AppError::Config(config::ConfigError::Message(message))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
                static_dir: default_static_dir(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
            generation: GenerationConfig {
                default_model: default_model(),
                default_tone: default_tone(),
            },
            backends: default_backends(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            protocol: ProtocolType::default(),
            endpoint: String::new(),
            endpoint_env: None,
            enabled: true,
            auth: BackendAuth::default(),
            timeout_ms: default_timeout(),
        }
    }
}
