//! Contract tests for `EvmRegistryClient` against a mock JSON-RPC node.
//!
//! | Response | Expected |
//! |----------|----------|
//! | `result` with ABI `string[]` | identifiers |
//! | 5xx | `Unavailable` |
//! | JSON-RPC `error` member | `Protocol` |
//! | missing `result` / non-JSON / bad ABI | `Protocol` |

use passfeed_registry::{EvmRegistryClient, RegistryClient, RegistryError};
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CONTRACT: &str = "0xe47ca047cb7e6a9ade9405ca68077d63424f34ec";

fn word(n: usize) -> String {
    format!("{n:064x}")
}

fn encode_string_array(items: &[&str]) -> String {
    let mut head = String::new();
    let mut tail = String::new();
    let mut tail_bytes = 0;
    for item in items {
        head.push_str(&word(items.len() * 32 + tail_bytes));
        tail.push_str(&word(item.len()));
        let mut data: String = item.bytes().map(|b| format!("{b:02x}")).collect();
        let padded = item.len().div_ceil(32) * 32;
        data.push_str(&"00".repeat(padded - item.len()));
        tail.push_str(&data);
        tail_bytes += 32 + padded;
    }
    format!("0x{}{}{}{}", word(0x20), word(items.len()), head, tail)
}

async fn client(server: &MockServer) -> EvmRegistryClient {
    EvmRegistryClient::new(reqwest::Client::new(), server.uri().parse().unwrap(), CONTRACT).unwrap()
}

#[tokio::test]
async fn fetch_identifiers_decodes_eth_call_result() {
    let server = MockServer::start().await;
    let ids = [
        "0b6ef3a1-8c8d-4a2b-9d7e-2d5b1f6c9e01",
        "6f1c2d3e-4b5a-4c6d-8e7f-9a0b1c2d3e4f",
    ];

    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "jsonrpc": "2.0",
            "method": "eth_call",
            "params": [{ "to": CONTRACT, "data": "0xb0c1eeb2" }, "latest"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": encode_string_array(&ids)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let got = client(&server).await.fetch_identifiers().await.unwrap();
    assert_eq!(got, ids);
}

#[tokio::test]
async fn empty_registry_yields_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "jsonrpc": "2.0", "id": 1, "result": encode_string_array(&[])
        })))
        .mount(&server)
        .await;

    assert!(client(&server).await.fetch_identifiers().await.unwrap().is_empty());
}

#[tokio::test]
async fn server_error_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server).await.fetch_identifiers().await.unwrap_err();
    match err {
        RegistryError::Unavailable { reason, .. } => assert!(reason.contains("503")),
        other => panic!("expected Unavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn rpc_error_member_is_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "jsonrpc": "2.0", "id": 1,
            "error": { "code": -32000, "message": "execution reverted" }
        })))
        .mount(&server)
        .await;

    let err = client(&server).await.fetch_identifiers().await.unwrap_err();
    match err {
        RegistryError::Protocol { reason, .. } => assert!(reason.contains("execution reverted")),
        other => panic!("expected Protocol, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_result_is_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "jsonrpc": "2.0", "id": 1
        })))
        .mount(&server)
        .await;

    let err = client(&server).await.fetch_identifiers().await.unwrap_err();
    assert!(matches!(err, RegistryError::Protocol { .. }));
}

#[tokio::test]
async fn non_json_body_is_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = client(&server).await.fetch_identifiers().await.unwrap_err();
    assert!(matches!(err, RegistryError::Protocol { .. }));
}

#[tokio::test]
async fn malformed_abi_is_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "jsonrpc": "2.0", "id": 1, "result": "0x"
        })))
        .mount(&server)
        .await;

    let err = client(&server).await.fetch_identifiers().await.unwrap_err();
    assert!(matches!(err, RegistryError::Protocol { .. }));
}

#[tokio::test]
async fn unreachable_node_is_unavailable() {
    let c = EvmRegistryClient::new(
        reqwest::Client::new(),
        "http://127.0.0.1:1".parse().unwrap(),
        CONTRACT,
    )
    .unwrap();
    let err = c.fetch_identifiers().await.unwrap_err();
    assert!(matches!(err, RegistryError::Unavailable { .. }));
}
