//! # EVM Registry Client
//!
//! Each dynamic registry is a contract exposing `getUuids() returns
//! (string[])`. The client issues one JSON-RPC `eth_call` against the
//! registry's RPC node at block `latest` and decodes the result.
//!
//! | Failure | Error |
//! |---------|-------|
//! | transport, timeout, non-2xx | `Unavailable` |
//! | body not JSON-RPC, `error` member, missing `result`, bad ABI | `Protocol` |

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::abi::{self, GET_UUIDS_SELECTOR};
use crate::config::ConfigError;
use crate::error::RegistryError;
use crate::RegistryClient;

/// Client for one on-chain registry.
#[derive(Debug, Clone)]
pub struct EvmRegistryClient {
    http: reqwest::Client,
    rpc_url: Url,
    contract: String,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<String>,
    #[serde(default)]
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

impl EvmRegistryClient {
    /// Bind a client to `contract` on the node at `rpc_url`.
    ///
    /// The contract must be a 0x-prefixed 20-byte hex address; checksum
    /// casing is accepted but not verified.
    pub fn new(
        http: reqwest::Client,
        rpc_url: Url,
        contract: impl Into<String>,
    ) -> Result<Self, RegistryError> {
        let contract = contract.into();
        let valid = contract
            .strip_prefix("0x")
            .is_some_and(|h| h.len() == 40 && h.bytes().all(|b| b.is_ascii_hexdigit()));
        if !valid {
            return Err(ConfigError::InvalidContract(contract).into());
        }
        Ok(Self {
            http,
            rpc_url,
            contract,
        })
    }

    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    pub fn contract(&self) -> &str {
        &self.contract
    }

    fn endpoint(&self) -> String {
        format!("eth_call {} @ {}", self.contract, self.rpc_url)
    }
}

#[async_trait]
impl RegistryClient for EvmRegistryClient {
    async fn fetch_identifiers(&self) -> Result<Vec<String>, RegistryError> {
        let endpoint = self.endpoint();
        let request = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "eth_call",
            "params": [
                { "to": self.contract, "data": abi::encode_call(GET_UUIDS_SELECTOR) },
                "latest"
            ],
        });

        tracing::debug!(rpc = %self.rpc_url, contract = %self.contract, "querying registry");

        let resp = self
            .http
            .post(self.rpc_url.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| RegistryError::Unavailable {
                endpoint: endpoint.clone(),
                reason: e.to_string(),
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(RegistryError::Unavailable {
                endpoint,
                reason: format!("status {status}: {body}"),
            });
        }

        let rpc: JsonRpcResponse = resp.json().await.map_err(|e| RegistryError::Protocol {
            endpoint: endpoint.clone(),
            reason: format!("not a JSON-RPC response: {e}"),
        })?;

        if let Some(err) = rpc.error {
            return Err(RegistryError::Protocol {
                endpoint,
                reason: format!("rpc error {}: {}", err.code, err.message),
            });
        }
        let result = rpc.result.ok_or_else(|| RegistryError::Protocol {
            endpoint: endpoint.clone(),
            reason: "missing result".into(),
        })?;

        let ids = abi::decode_string_array(&result).map_err(|e| RegistryError::Protocol {
            endpoint,
            reason: e.to_string(),
        })?;
        tracing::debug!(rpc = %self.rpc_url, count = ids.len(), "registry returned identifiers");
        Ok(ids)
    }
}
