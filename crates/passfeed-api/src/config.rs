//! # Service Configuration
//!
//! Read once at startup from the environment. Secrets are held in
//! [`Zeroizing`] buffers and never logged.
//!
//! | Variable | Default |
//! |---|---|
//! | `PORT` | 3100 |
//! | `SERVER_PRIVATE_KEY` | unset: issuance disabled |
//! | `ZUPASS_PUBLIC_KEY` | unset: every poll answers `[]` |
//! | `FEED_PROVIDER_URL` | `http://localhost:3100/feeds` |
//! | `FEED_PROVIDER_NAME` | `Test Feed Server` |
//! | `PASSFEED_REGISTRIES` | unset: built-in descriptor table |
//! | `LOG_FORMAT` | text (`json` for JSON lines) |
//!
//! `ZUPASS_API_URL` and `REGISTRY_TIMEOUT_SECS` are read by
//! [`RegistryApiConfig::from_env`].

use std::path::PathBuf;

use passfeed_crypto::{CryptoError, Ed25519KeyPair, Ed25519PublicKey};
use passfeed_feed::ProviderInfo;
use passfeed_registry::{ConfigError, RegistryApiConfig};
use thiserror::Error;
use zeroize::Zeroizing;

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },

    /// Key material present but unusable. Absent keys are not errors.
    #[error("{var}: {source}")]
    InvalidKey {
        var: &'static str,
        #[source]
        source: CryptoError,
    },

    #[error(transparent)]
    Registry(#[from] ConfigError),
}

pub struct AppConfig {
    pub port: u16,
    /// Hex seed of the issuing key.
    pub server_private_key: Option<Zeroizing<String>>,
    /// Identity provider key that request credentials must be signed by.
    pub trusted_key: Option<Ed25519PublicKey>,
    pub provider: ProviderInfo,
    /// YAML descriptor table replacing the built-in one.
    pub registries_path: Option<PathBuf>,
    pub registry: RegistryApiConfig,
    pub log_json: bool,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("server_private_key", &self.server_private_key.as_ref().map(|_| "<redacted>"))
            .field("trusted_key", &self.trusted_key)
            .field("provider", &self.provider)
            .field("registries_path", &self.registries_path)
            .field("registry", &self.registry)
            .field("log_json", &self.log_json)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppConfigError> {
        let port = match non_empty_var("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| AppConfigError::InvalidPort {
                var: "PORT",
                value: raw,
            })?,
            None => 3100,
        };

        let trusted_key = non_empty_var("ZUPASS_PUBLIC_KEY")
            .map(|raw| Ed25519PublicKey::from_hex(&raw))
            .transpose()
            .map_err(|source| AppConfigError::InvalidKey {
                var: "ZUPASS_PUBLIC_KEY",
                source,
            })?;

        let defaults = ProviderInfo::default();
        let config = Self {
            port,
            server_private_key: non_empty_var("SERVER_PRIVATE_KEY").map(Zeroizing::new),
            trusted_key,
            provider: ProviderInfo {
                url: non_empty_var("FEED_PROVIDER_URL").unwrap_or(defaults.url),
                name: non_empty_var("FEED_PROVIDER_NAME").unwrap_or(defaults.name),
            },
            registries_path: non_empty_var("PASSFEED_REGISTRIES").map(PathBuf::from),
            registry: RegistryApiConfig::from_env()?,
            log_json: non_empty_var("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json")),
        };
        // Parse once here so a malformed key fails startup.
        config.signing_key()?;
        Ok(config)
    }

    /// The issuing key, if one is configured.
    pub fn signing_key(&self) -> Result<Option<Ed25519KeyPair>, AppConfigError> {
        self.server_private_key
            .as_ref()
            .map(|seed| Ed25519KeyPair::from_hex_seed(seed))
            .transpose()
            .map_err(|source| AppConfigError::InvalidKey {
                var: "SERVER_PRIVATE_KEY",
                source,
            })
    }

    /// Defaults with no keys, no descriptor file and the given identity API.
    pub fn local(registry: RegistryApiConfig) -> Self {
        Self {
            port: 3100,
            server_private_key: None,
            trusted_key: None,
            provider: ProviderInfo::default(),
            registries_path: None,
            registry,
            log_json: false,
        }
    }
}

fn non_empty_var(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local() -> AppConfig {
        AppConfig::local(RegistryApiConfig::local_mock("http://127.0.0.1:9100").unwrap())
    }

    #[test]
    fn local_config_has_no_keys() {
        let config = local();
        assert_eq!(config.port, 3100);
        assert!(config.signing_key().unwrap().is_none());
        assert!(config.trusted_key.is_none());
        assert_eq!(config.provider.name, "Test Feed Server");
    }

    #[test]
    fn signing_key_parses_hex_seed() {
        let mut config = local();
        let key = Ed25519KeyPair::from_seed(&[2u8; 32]);
        config.server_private_key = Some(key.seed_hex());
        let parsed = config.signing_key().unwrap().unwrap();
        assert_eq!(parsed.public_key(), key.public_key());
    }

    #[test]
    fn malformed_signing_key_is_an_error() {
        let mut config = local();
        config.server_private_key = Some(Zeroizing::new("abcd".into()));
        assert!(matches!(
            config.signing_key(),
            Err(AppConfigError::InvalidKey { var: "SERVER_PRIVATE_KEY", .. })
        ));
    }

    #[test]
    fn debug_redacts_private_key() {
        let mut config = local();
        config.server_private_key = Some(Ed25519KeyPair::from_seed(&[2u8; 32]).seed_hex());
        let seed = config.server_private_key.as_ref().unwrap().to_string();
        let debug = format!("{config:?}");
        assert!(!debug.contains(&seed));
        assert!(debug.contains("<redacted>"));
    }
}
