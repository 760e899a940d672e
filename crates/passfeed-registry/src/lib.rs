//! # passfeed-registry
//!
//! Leaf clients for the two external systems the catalog is built from:
//!
//! - [`RegistryClient`]: one on-chain registry, returning the opaque
//!   identifiers it lists. [`EvmRegistryClient`] calls `getUuids()` over
//!   JSON-RPC `eth_call` and decodes the ABI `string[]` result.
//! - [`IdentityResolver`]: maps one identifier to the account record held by
//!   the central identity API. [`ZupassIdentityClient`] implements it over
//!   `GET /account/user/{id}`.
//!
//! Every method makes exactly one outbound request. There is no retry layer:
//! a failure is reported to the caller, which decides what to do with it.

pub mod abi;
pub mod config;
pub mod error;
pub mod evm;
pub mod identity;

use async_trait::async_trait;

pub use config::{ConfigError, RegistryApiConfig};
pub use error::RegistryError;
pub use evm::EvmRegistryClient;
pub use identity::{RawRegistryIdentity, ZupassIdentityClient};

/// A source of opaque identifiers, bound to a single registry.
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Fetch the full identifier list.
    async fn fetch_identifiers(&self) -> Result<Vec<String>, RegistryError>;
}

/// Resolves an identifier to the raw identity record behind it.
///
/// The record is returned undecoded; callers validate it against a schema
/// before mapping it to [`RawRegistryIdentity`].
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve(&self, identifier: &str) -> Result<serde_json::Value, RegistryError>;
}

/// Build the shared HTTP client used by both implementations.
pub fn http_client(config: &RegistryApiConfig) -> Result<reqwest::Client, RegistryError> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| RegistryError::Unavailable {
            endpoint: "client_init".into(),
            reason: e.to_string(),
        })
}
