//! Settings Models
//!
//! Application configuration: the values threaded into the extraction
//! service, the persistence collaborator and the diagram renderer.

use std::path::PathBuf;

use meeting_tasks_llm::ProviderConfig;
use serde::{Deserialize, Serialize};

/// Application configuration stored in config.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Model identifier sent to the provider
    pub model: String,
    /// Names and nicknames the user is addressed by in transcripts
    pub user_aliases: Vec<String>,
    /// Directory under which numbered run folders are created
    pub output_root: PathBuf,
    /// Chat completions endpoint override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Whole-request timeout for the model call, in seconds
    pub request_timeout_secs: u64,
    /// Optional proxy for the model call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
    /// Sampling temperature; provider default when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Cap on generated tokens; provider default when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// External diagram renderer
    pub renderer: RendererConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4.1-mini".to_string(),
            user_aliases: vec!["Nagai".to_string(), "Nagai-kun".to_string()],
            output_root: PathBuf::from("output"),
            base_url: None,
            api_key_env: "OPENAI_API_KEY".to_string(),
            request_timeout_secs: 120,
            proxy_url: None,
            temperature: None,
            max_tokens: None,
            renderer: RendererConfig::default(),
        }
    }
}

/// How to invoke the external diagram renderer.
///
/// The renderer runs `<program> <args...> <diagram path>` inside `working_dir`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    pub enabled: bool,
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: "npm".to_string(),
            args: vec!["run".to_string(), "render".to_string()],
            working_dir: PathBuf::from("mkddm"),
        }
    }
}

/// Command-line overrides (partial update)
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub model: Option<String>,
    /// Replaces the configured aliases when non-empty
    pub aliases: Vec<String>,
    pub output_root: Option<PathBuf>,
    pub no_render: bool,
}

impl AppConfig {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(model) = overrides.model {
            self.model = model;
        }
        if !overrides.aliases.is_empty() {
            self.user_aliases = overrides.aliases;
        }
        if let Some(root) = overrides.output_root {
            self.output_root = root;
        }
        if overrides.no_render {
            self.renderer.enabled = false;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }

        if self.output_root.as_os_str().is_empty() {
            return Err("output_root must not be empty".to_string());
        }

        if self.api_key_env.trim().is_empty() {
            return Err("api_key_env must name an environment variable".to_string());
        }

        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be at least 1".to_string());
        }

        if let Some(base_url) = &self.base_url {
            let parsed =
                url::Url::parse(base_url).map_err(|e| format!("Invalid base_url '{}': {}", base_url, e))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(format!("base_url must be http(s): {}", base_url));
            }
        }

        if let Some(proxy) = &self.proxy_url {
            meeting_tasks_llm::http_client::validate_proxy_url(proxy).map_err(|e| e.to_string())?;
        }

        if let Some(t) = self.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(format!("temperature must be between 0 and 2, got {}", t));
            }
        }

        if self.max_tokens == Some(0) {
            return Err("max_tokens must be at least 1".to_string());
        }

        if self.renderer.enabled && self.renderer.program.trim().is_empty() {
            return Err("renderer.program must not be empty when the renderer is enabled".to_string());
        }

        Ok(())
    }

    /// Provider configuration for the model call, with the API key read from
    /// `api_key_env` (absent or blank → `None`).
    pub fn provider_config(&self) -> ProviderConfig {
        let api_key = std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());
        ProviderConfig {
            api_key,
            api_key_env: Some(self.api_key_env.clone()),
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            timeout_secs: self.request_timeout_secs,
            proxy_url: self.proxy_url.clone(),
        }
    }
}
