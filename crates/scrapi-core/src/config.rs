//! Configuration management for Scrapi
//!
//! Loads configuration with priority:
//! 1. scrapi.toml (or specified config file)
//! 2. Environment variables (fallback)
//! 3. Defaults

use crate::Error;
use crate::auth::ApiKey;
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Endpoint for fetching a single page
pub const SCRAPERAPI_BASE_URL: &str = "https://api.scraperapi.com/";

/// Prefix for the structured (JSON/CSV) search endpoints
pub const SCRAPERAPI_STRUCTURED_BASE_URL: &str = "https://api.scraperapi.com/structured/";

const CONFIG_FILE_NAME: &str = "scrapi.toml";

/// Scrapi configuration
///
/// ```toml
/// api_key = "${SCRAPERAPI_API_KEY}"
/// timeout_secs = 70
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapiConfig {
    /// ScraperAPI key (can reference env var with ${VAR_NAME})
    pub api_key: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_structured_base_url")]
    pub structured_base_url: String,

    /// Per-request timeout in seconds; 0 disables it
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    pub user_agent: Option<String>,
}

impl Default for ScrapiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            structured_base_url: default_structured_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

impl ScrapiConfig {
    /// Load configuration with the following priority:
    /// 1. scrapi.toml in current directory or a parent
    /// 2. Environment variables (fallback)
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::find_config_file()?
        };

        tracing::debug!("Loading configuration from: {:?}", config_path);

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))
    }

    /// Parse configuration from TOML text and resolve `${VAR}` references
    pub fn from_toml(contents: &str) -> Result<Self> {
        let mut config: ScrapiConfig = toml::from_str(contents)?;
        config.resolve_env_vars();
        config.validate()?;
        Ok(config)
    }

    /// Find scrapi.toml by searching current directory and parents
    fn find_config_file() -> Result<PathBuf> {
        let mut current = env::current_dir()?;

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }

            if !current.pop() {
                break;
            }
        }

        Err(anyhow!(
            "{} not found. Create one containing: api_key = \"${{SCRAPERAPI_API_KEY}}\"",
            CONFIG_FILE_NAME
        ))
    }

    fn resolve_env_vars(&mut self) {
        // An unresolved reference leaves the key unset so the env fallback applies
        if let Some(ref key) = self.api_key {
            self.api_key = Self::resolve_env_var(key);
        }

        if let Some(resolved) = Self::resolve_env_var(&self.base_url) {
            self.base_url = resolved;
        }

        if let Some(resolved) = Self::resolve_env_var(&self.structured_base_url) {
            self.structured_base_url = resolved;
        }
    }

    /// Resolve a single ${VAR_NAME} reference
    fn resolve_env_var(value: &str) -> Option<String> {
        if value.starts_with("${") && value.ends_with('}') {
            let var_name = &value[2..value.len() - 1];
            env::var(var_name).ok()
        } else {
            Some(value.to_string())
        }
    }

    /// Check that both endpoints are http(s) URLs
    pub fn validate(&self) -> crate::Result<()> {
        for (name, value) in [
            ("base_url", &self.base_url),
            ("structured_base_url", &self.structured_base_url),
        ] {
            let is_http = url::Url::parse(value)
                .map(|u| matches!(u.scheme(), "http" | "https"))
                .unwrap_or(false);
            if !is_http {
                return Err(Error::config_error(format!(
                    "{} must be an http(s) URL, got '{}'",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Resolve the API key: configured value first, then `SCRAPERAPI_API_KEY`
    pub fn api_key(&self) -> crate::Result<ApiKey> {
        ApiKey::resolve(self.api_key.clone())
    }

    /// Request timeout, or `None` when disabled
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// Create test-friendly defaults (a fixed fake key)
    pub fn test_defaults() -> Self {
        Self {
            api_key: Some("test_api_key".to_string()),
            ..Self::default()
        }
    }
}

fn default_base_url() -> String {
    SCRAPERAPI_BASE_URL.to_string()
}

fn default_structured_base_url() -> String {
    SCRAPERAPI_STRUCTURED_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    70
}
