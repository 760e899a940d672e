//! # Bootstrap
//!
//! Wires configuration into a [`FeedService`]: descriptor table, shared HTTP
//! client, identity resolver, issuer and request-credential verifier.

use std::sync::Arc;

use passfeed_catalog::{CatalogBuilder, CatalogError, DescriptorTable};
use passfeed_feed::{EmailClaimVerifier, FeedService};
use passfeed_registry::{RegistryError, ZupassIdentityClient};
use passfeed_vc::Issuer;
use thiserror::Error;

use crate::config::{AppConfig, AppConfigError};

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] AppConfigError),

    #[error("descriptor table: {0}")]
    Descriptors(#[from] CatalogError),

    #[error("http client: {0}")]
    Http(#[from] RegistryError),
}

/// Load the descriptor table named by the config, or the built-in one.
pub fn descriptor_table(config: &AppConfig) -> Result<DescriptorTable, CatalogError> {
    match &config.registries_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading registry descriptors");
            DescriptorTable::from_yaml_file(path)
        }
        None => DescriptorTable::builtin(),
    }
}

pub fn bootstrap(config: &AppConfig) -> Result<FeedService, BootstrapError> {
    let table = descriptor_table(config)?;
    let http = passfeed_registry::http_client(&config.registry)?;
    let resolver = ZupassIdentityClient::new(http.clone(), config.registry.identity_api_url.clone());
    let builder = CatalogBuilder::from_table(&table, http, Arc::new(resolver))?;

    let issuer = match config.signing_key()? {
        Some(key) => {
            tracing::info!(public_key = %key.public_key(), "issuing key loaded");
            Issuer::new(key)
        }
        None => {
            tracing::warn!("SERVER_PRIVATE_KEY not set; credential issuance is disabled");
            Issuer::unconfigured()
        }
    };

    let verifier = match config.trusted_key {
        Some(key) => EmailClaimVerifier::new(key),
        None => {
            tracing::warn!("ZUPASS_PUBLIC_KEY not set; every poll will be answered with no actions");
            EmailClaimVerifier::untrusting()
        }
    };

    tracing::info!(
        registries = table.len(),
        provider = %config.provider.name,
        "feed service configured"
    );
    Ok(FeedService::new(builder, issuer, Arc::new(verifier), config.provider.clone()))
}
