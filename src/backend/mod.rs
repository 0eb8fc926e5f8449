//! Backend module - text backend trait, HTTP adapters and the fallback dispatcher

pub mod dispatcher;
pub mod extract;
pub mod http;
pub mod ollama;
pub mod text_backend;

pub use dispatcher::Dispatcher;
pub use extract::{extract_generated_text, extract_response_field};
pub use ollama::OllamaBackend;
pub use text_backend::{
    create_text_backend, create_text_backends, ChatCompletionRequest, ChatMessage,
    OpenAICompatibleBackend, TextBackend,
};
