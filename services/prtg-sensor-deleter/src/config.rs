//! Configuration types for the PRTG sensor deleter

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that replaces the configured password
pub const PASSWORD_ENV: &str = "PRTG_PASSWORD";

/// Environment variable that replaces the configured passhash
pub const PASSHASH_ENV: &str = "PRTG_PASSHASH";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the PRTG web server, e.g. `https://prtg.example.com`
    pub server_url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Takes precedence over `password` when non-empty
    #[serde(default)]
    pub passhash: String,
    /// Sensors whose name equals this exactly are deleted
    pub target_sensor_name: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
}

impl Config {
    /// Check the values the job cannot run without
    pub fn validate(&self) -> crate::Result<()> {
        if self.server_url.trim().is_empty() {
            return Err(crate::DeleterError::Config(
                "server_url must not be empty".to_string(),
            ));
        }
        if self.target_sensor_name.is_empty() {
            return Err(crate::DeleterError::Config(
                "target_sensor_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Replace password and passhash with values from the environment, if set
    pub fn resolve_secrets(&mut self) {
        self.resolve_secrets_with(|key| std::env::var(key).ok());
    }

    /// Same as [`Config::resolve_secrets`] with an injectable lookup
    pub fn resolve_secrets_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(password) = lookup(PASSWORD_ENV) {
            tracing::debug!("Using password from {}", PASSWORD_ENV);
            self.password = password;
        }
        if let Some(passhash) = lookup(PASSHASH_ENV) {
            tracing::debug!("Using passhash from {}", PASSHASH_ENV);
            self.passhash = passhash;
        }
    }

    /// The server URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.server_url.trim_end_matches('/')
    }
}

fn default_log_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::DeleterError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
