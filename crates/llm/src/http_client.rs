//! HTTP Client Factory
//!
//! Builds the reqwest client used by providers, applying the request timeout
//! and the optional proxy from [`ProviderConfig`].

use std::time::Duration;

use crate::types::{LlmError, LlmResult, ProviderConfig};

const SUPPORTED_PROXY_SCHEMES: &[&str] = &["http", "https", "socks5", "socks5h"];

/// Build a `reqwest::Client` for the given provider configuration.
///
/// - `proxy_url: Some(url)` -> route every request through that proxy
/// - `proxy_url: None` -> reqwest's default (honours `HTTPS_PROXY` and friends)
pub fn build_http_client(config: &ProviderConfig) -> LlmResult<reqwest::Client> {
    let mut builder =
        reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_secs.max(1)));

    if let Some(raw) = config.proxy_url.as_deref() {
        let proxy_url = validate_proxy_url(raw)?;
        let proxy = reqwest::Proxy::all(proxy_url.as_str()).map_err(|e| LlmError::InvalidRequest {
            message: format!("Invalid proxy URL '{}': {}", raw, e),
        })?;
        builder = builder.proxy(proxy);
    }

    builder.build().map_err(|e| LlmError::Other {
        message: format!("Failed to build HTTP client: {}", e),
    })
}

/// Check that a proxy URL parses and uses a supported scheme.
pub fn validate_proxy_url(raw: &str) -> LlmResult<url::Url> {
    let parsed = url::Url::parse(raw).map_err(|e| LlmError::InvalidRequest {
        message: format!("Invalid proxy URL '{}': {}", raw, e),
    })?;
    if !SUPPORTED_PROXY_SCHEMES.contains(&parsed.scheme()) {
        return Err(LlmError::InvalidRequest {
            message: format!(
                "Unsupported proxy scheme '{}' (expected one of {})",
                parsed.scheme(),
                SUPPORTED_PROXY_SCHEMES.join(", ")
            ),
        });
    }
    Ok(parsed)
}
