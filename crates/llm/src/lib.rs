//! Meeting Tasks LLM
//!
//! The model provider boundary: a provider trait with a single
//! request/response call, an OpenAI (and OpenAI-compatible) implementation,
//! and the HTTP client factory.

pub mod http_client;
pub mod openai;
pub mod provider;
pub mod types;

// Re-export main types
pub use http_client::build_http_client;
pub use openai::OpenAIProvider;
pub use provider::LlmProvider;
pub use types::*;
