//! JSON Configuration Management
//!
//! Resolves the application configuration: defaults, then the config file,
//! then command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::models::settings::{AppConfig, ConfigOverrides};
use crate::utils::error::{AppError, AppResult};
use crate::utils::paths::config_path;

/// Configuration service for loading app settings
#[derive(Debug)]
pub struct ConfigService {
    config: AppConfig,
}

impl ConfigService {
    /// Resolve the configuration.
    ///
    /// An explicit `path` must exist. Without one, `~/.meeting-tasks/config.json`
    /// is used when present and the built-in defaults otherwise, including
    /// when the home directory cannot be determined.
    pub fn resolve(path: Option<&Path>, overrides: ConfigOverrides) -> AppResult<Self> {
        let (source, mut config) = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::not_found(format!(
                        "config file '{}'",
                        path.display()
                    )));
                }
                (Some(path.to_path_buf()), Self::load_from_file(path)?)
            }
            None => match default_config_file(config_path()) {
                Some(default_path) => {
                    let config = Self::load_from_file(&default_path)?;
                    (Some(default_path), config)
                }
                None => (None, AppConfig::default()),
            },
        };

        config.apply_overrides(overrides);
        config.validate().map_err(AppError::config)?;

        debug!(
            source = ?source,
            model = %config.model,
            aliases = ?config.user_aliases,
            "configuration resolved"
        );

        Ok(Self { config })
    }

    /// Load configuration from a file
    fn load_from_file(path: &Path) -> AppResult<AppConfig> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Consume the service, returning the configuration
    pub fn into_config(self) -> AppConfig {
        self.config
    }
}

/// The default config file, if its location resolves and the file exists.
fn default_config_file(location: AppResult<PathBuf>) -> Option<PathBuf> {
    match location {
        Ok(path) if path.exists() => Some(path),
        Ok(_) => None,
        Err(e) => {
            debug!(error = %e, "no default config location, using built-in defaults");
            None
        }
    }
}
