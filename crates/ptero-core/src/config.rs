//! Client configuration: where the panel lives and which key to present.

use std::fmt;
use std::time::Duration;

use crate::error::{PanelError, Result};

pub const ENV_URL: &str = "PTERO_URL";
pub const ENV_API_KEY: &str = "PTERO_API_KEY";
pub const ENV_TIMEOUT_SECS: &str = "PTERO_TIMEOUT_SECS";

const API_PREFIX: &str = "/api/application";

#[derive(Clone)]
pub struct ClientConfig {
    /// Panel root URL, e.g. `https://panel.example.com`
    pub base_url: String,
    /// Application API key (`ptla_...`)
    pub api_key: String,
    /// Per-request timeout
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost".to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(30),
            user_agent: format!("ptero/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

// The key must not end up in logs via `{:?}`.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a config from `PTERO_URL`, `PTERO_API_KEY` and the optional
    /// `PTERO_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(ENV_URL)
            .map_err(|_| PanelError::Config(format!("{} is not set", ENV_URL)))?;
        let api_key = std::env::var(ENV_API_KEY)
            .map_err(|_| PanelError::Config(format!("{} is not set", ENV_API_KEY)))?;

        let mut config = Self::new(base_url, api_key);
        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                PanelError::Config(format!("{} must be a number of seconds, got '{}'", ENV_TIMEOUT_SECS, raw))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// Check the config and return the Application API root
    /// (`<panel>/api/application`, no trailing slash).
    pub fn api_root(&self) -> Result<String> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(PanelError::Config(format!(
                "panel URL must start with http:// or https://, got '{}'",
                url
            )));
        }
        if self.api_key.trim().is_empty() {
            return Err(PanelError::Config("API key is empty".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(PanelError::Config("timeout must be greater than zero".to_string()));
        }

        let url = url.trim_end_matches('/');
        let root = url.strip_suffix(API_PREFIX).unwrap_or(url);
        let host = root.split_once("://").map(|(_, rest)| rest).unwrap_or("");
        if host.is_empty() || host.starts_with('/') {
            return Err(PanelError::Config(format!("panel URL '{}' has no host", url)));
        }
        Ok(format!("{}{}", root, API_PREFIX))
    }
}
