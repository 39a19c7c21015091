//! LLM Provider Trait
//!
//! Defines the model provider boundary: a single request/response round trip.

use async_trait::async_trait;

use super::types::{LlmError, LlmResponse, LlmResult, Message};

/// Trait that all LLM providers must implement.
///
/// One call is one round trip. Providers do not retry; any failure is
/// returned to the caller as-is.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Returns the provider name for identification.
    fn name(&self) -> &'static str;

    /// Returns the current model being used.
    fn model(&self) -> &str;

    /// Send a message and get a complete response.
    ///
    /// # Arguments
    /// * `messages` - Conversation messages
    /// * `system` - Optional system prompt
    ///
    /// # Returns
    /// Complete response from the model
    async fn send_message(
        &self,
        messages: Vec<Message>,
        system: Option<String>,
    ) -> LlmResult<LlmResponse>;
}

/// Helper function to create an error for missing API key
///
/// `key_env` names the environment variable the key is expected in.
pub fn missing_api_key_error(provider: &str, key_env: Option<&str>) -> LlmError {
    let message = match key_env {
        Some(var) => format!(
            "API key not configured for {}; set the {} environment variable",
            provider, var
        ),
        None => format!("API key not configured for {}", provider),
    };
    LlmError::AuthenticationFailed { message }
}

/// Helper function to parse HTTP error status codes
pub fn parse_http_error(status: u16, body: &str, provider: &str) -> LlmError {
    match status {
        401 => LlmError::AuthenticationFailed {
            message: format!("{}: Invalid API key", provider),
        },
        403 => LlmError::AuthenticationFailed {
            message: format!("{}: Access denied", provider),
        },
        404 => LlmError::ModelNotFound {
            model: body.to_string(),
        },
        429 => LlmError::RateLimited {
            message: body.to_string(),
            retry_after: None,
        },
        400 => LlmError::InvalidRequest {
            message: body.to_string(),
        },
        500..=599 => LlmError::ServerError {
            message: body.to_string(),
            status: Some(status),
        },
        _ => LlmError::Other {
            message: format!("HTTP {}: {}", status, body),
        },
    }
}
