//! Startup configuration for the CLI.
//!
//! The API credential comes only from the environment (a `.env` file in the
//! working directory is loaded first). Everything else may be set in a TOML
//! file:
//!
//! ```toml
//! [provider]
//! endpoint = "https://api.mistral.ai"
//! timeout_secs = 120
//!
//! [extractor]
//! max_attempts = 3
//! rate_limit_delay_secs = 5
//! ```

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use weft_extractor::ExtractorConfig;
use weft_llm::mistral::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};

/// Environment variable holding the API credential.
pub const API_KEY_VAR: &str = "MISTRAL_API_KEY";

/// Environment variable overriding the API endpoint.
pub const ENDPOINT_VAR: &str = "MISTRAL_ENDPOINT";

/// Process-wide configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Completion service credential
    pub api_key: String,

    /// Completion service base URL
    pub endpoint: String,

    /// HTTP request timeout (seconds)
    pub timeout_secs: u64,

    /// Extraction loop settings
    pub extractor: ExtractorConfig,
}

/// Contents of the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    /// Provider settings
    #[serde(default)]
    pub provider: ProviderSettings,

    /// Extraction loop settings
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

/// Completion provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// API base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// HTTP request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl AppConfig {
    /// Build the configuration from the process environment.
    ///
    /// Loads `.env` if present, then reads the credential and endpoint
    /// override from the environment and the rest from `config_path` (or the
    /// default file when it exists).
    pub fn from_env(config_path: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok(), config_path)
    }

    /// Build the configuration using `lookup` to read environment variables.
    pub fn from_lookup<F>(lookup: F, config_path: Option<&Path>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| CliError::MissingEnv(API_KEY_VAR.to_string()))?;

        let file = match config_path {
            Some(path) => FileConfig::load(path)?,
            None => match Self::default_path() {
                Ok(path) if path.exists() => FileConfig::load(&path)?,
                _ => FileConfig::default(),
            },
        };

        file.extractor.validate().map_err(CliError::Config)?;
        if file.provider.timeout_secs == 0 {
            return Err(CliError::Config(
                "provider.timeout_secs must be greater than 0".to_string(),
            ));
        }

        let endpoint = lookup(ENDPOINT_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(file.provider.endpoint);

        Ok(Self {
            api_key,
            endpoint,
            timeout_secs: file.provider.timeout_secs,
            extractor: file.extractor,
        })
    }

    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".weft").join("config.toml"))
    }

    /// Get the request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl FileConfig {
    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: FileConfig = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
