//! # Identity Lookup Client
//!
//! Resolves a registry identifier to the account held by the central
//! identity API: `GET {base}/account/user/{id}`.
//!
//! A 404, an empty or `null` body, or a record without a non-empty `email`
//! is [`RegistryError::IdentityNotFound`]. Every registered identifier is
//! expected to resolve, so the caller treats this as a data-integrity fault.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::RegistryError;
use crate::IdentityResolver;

/// The account record returned by the identity API.
///
/// Decoded only after the raw JSON has passed schema validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRegistryIdentity {
    pub email: String,
    pub uuid: String,
    pub commitment: String,
    pub role: String,
    pub terms_agreed: serde_json::Number,
}

/// Client for the identity API.
#[derive(Debug, Clone)]
pub struct ZupassIdentityClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ZupassIdentityClient {
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    fn user_url(&self, identifier: &str) -> Result<Url, RegistryError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| RegistryError::Protocol {
                endpoint: self.base_url.to_string(),
                reason: "identity base URL cannot carry a path".into(),
            })?
            .pop_if_empty()
            .extend(["account", "user", identifier]);
        Ok(url)
    }
}

#[async_trait]
impl IdentityResolver for ZupassIdentityClient {
    async fn resolve(&self, identifier: &str) -> Result<serde_json::Value, RegistryError> {
        let endpoint = format!("GET /account/user/{identifier}");
        let url = self.user_url(identifier)?;

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| RegistryError::Unavailable {
                endpoint: endpoint.clone(),
                reason: e.to_string(),
            })?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::IdentityNotFound {
                identifier: identifier.to_string(),
            });
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RegistryError::Unavailable {
                endpoint,
                reason: format!("status {}: {body}", status.as_u16()),
            });
        }

        let body = resp.text().await.map_err(|e| RegistryError::Unavailable {
            endpoint: endpoint.clone(),
            reason: e.to_string(),
        })?;
        if body.trim().is_empty() {
            return Err(RegistryError::IdentityNotFound {
                identifier: identifier.to_string(),
            });
        }
        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| RegistryError::Protocol {
                endpoint,
                reason: e.to_string(),
            })?;

        let has_email = value
            .get("email")
            .and_then(serde_json::Value::as_str)
            .is_some_and(|e| !e.is_empty());
        if !has_email {
            return Err(RegistryError::IdentityNotFound {
                identifier: identifier.to_string(),
            });
        }
        Ok(value)
    }
}
