//! Client configuration.
//!
//! Base URL of the identity API and the request timeout shared by every
//! registry and identity call. Registry RPC endpoints are per-descriptor and
//! live in the descriptor table, not here.

use url::Url;

/// Configuration for the outbound clients.
#[derive(Debug, Clone)]
pub struct RegistryApiConfig {
    /// Base URL of the identity API.
    /// Default: <https://api.zupass.org>
    pub identity_api_url: Url,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl RegistryApiConfig {
    /// Load configuration from environment variables.
    ///
    /// - `ZUPASS_API_URL` (default: `https://api.zupass.org`)
    /// - `REGISTRY_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            identity_api_url: env_url("ZUPASS_API_URL", "https://api.zupass.org")?,
            timeout_secs: env_u64("REGISTRY_TIMEOUT_SECS", 30)?,
        })
    }

    /// Configuration pointing at a local mock identity server.
    pub fn local_mock(identity_api_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            identity_api_url: Url::parse(identity_api_url)
                .map_err(|e| ConfigError::InvalidUrl(identity_api_url.to_string(), e.to_string()))?,
            timeout_secs: 5,
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

fn env_u64(var: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber(var.to_string(), raw)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("{0} must be a non-negative integer, got {1:?}")]
    InvalidNumber(String, String),
    #[error("invalid contract address: {0:?}")]
    InvalidContract(String),
}
