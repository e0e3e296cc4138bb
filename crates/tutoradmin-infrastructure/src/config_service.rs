//! Client configuration loading.
//!
//! Resolution order, later wins: built-in defaults, `config.toml`, environment.

use crate::paths::AdminPaths;
use std::fs;
use std::path::PathBuf;
use tutoradmin_core::config::ClientConfig;
use tutoradmin_core::error::{AdminError, Result};

pub const ENV_API_URL: &str = "TUTORADMIN_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "TUTORADMIN_TIMEOUT_SECS";

/// Loads [`ClientConfig`] from the config file and environment.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(paths: &AdminPaths) -> Result<Self> {
        let path = paths
            .config_file()
            .map_err(|e| AdminError::config(e.to_string()))?;
        Ok(Self { path })
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the configuration using the process environment.
    pub fn load(&self) -> Result<ClientConfig> {
        self.load_with_env(|key| std::env::var(key).ok())
    }

    /// Loads the configuration with a custom environment lookup.
    pub fn load_with_env<F>(&self, env: F) -> Result<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = self.load_file()?;

        if let Some(url) = env(ENV_API_URL).filter(|url| !url.trim().is_empty()) {
            config.api_base_url = url;
        }
        if let Some(raw) = env(ENV_TIMEOUT_SECS) {
            config.timeout_secs = raw.trim().parse().map_err(|_| {
                AdminError::config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    ENV_TIMEOUT_SECS, raw
                ))
            })?;
        }

        validate(&config)?;
        Ok(config)
    }

    fn load_file(&self) -> Result<ClientConfig> {
        if !self.path.exists() {
            tracing::debug!("[Config] No config file at {:?}, using defaults", self.path);
            return Ok(ClientConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(ClientConfig::default());
        }

        let config = toml::from_str(&content)?;
        tracing::debug!("[Config] Loaded {:?}", self.path);
        Ok(config)
    }
}

fn validate(config: &ClientConfig) -> Result<()> {
    let url = config.api_base_url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(AdminError::config(format!(
            "api_base_url must start with http:// or https://, got '{}'",
            config.api_base_url
        )));
    }
    if config.timeout_secs == 0 {
        return Err(AdminError::config("timeout_secs must be greater than zero"));
    }
    Ok(())
}
