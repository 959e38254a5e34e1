//! Integration tests for the API.

use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use wallet_tracker_api::api::create_router;
use wallet_tracker_api::app::AppState;
use wallet_tracker_api::domain::{
    BlockchainInfo, ErrorResponse, HealthResponse, ProviderError, RawTransfer,
    RawTransferMetadata, TransferValue, WalletBalance, WalletTransactionsResponse,
};
use wallet_tracker_api::test_utils::MockProviderClient;

const ADDRESS: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0";

fn create_test_state(provider: Arc<MockProviderClient>) -> Arc<AppState> {
    Arc::new(AppState::new(provider as _))
}

fn transfer(hash: &str) -> RawTransfer {
    RawTransfer {
        hash: Some(hash.to_string()),
        from: Some(ADDRESS.to_string()),
        to: Some("0x2222222222222222222222222222222222222222".to_string()),
        value: Some(TransferValue::Text("0.1".to_string())),
        block_num: Some("0x112a880".to_string()),
        category: Some("external".to_string()),
        metadata: Some(RawTransferMetadata {
            block_timestamp: Some("2024-01-15T10:30:00.000Z".to_string()),
        }),
    }
}

async fn get(router: axum::Router, uri: &str) -> (StatusCode, Bytes) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body)
}

#[tokio::test]
async fn test_health_check() {
    let router = create_router(create_test_state(Arc::new(MockProviderClient::new())));

    let (status, body) = get(router, "/api/health").await;
    assert_eq!(status, StatusCode::OK);

    let health: HealthResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.message, "Wallet Tracker API is running!");
}

#[tokio::test]
async fn test_blockchain_info_success() {
    let provider = Arc::new(MockProviderClient::new().with_block_number(18_000_000));
    let router = create_router(create_test_state(provider));

    let (status, body) = get(router, "/api/blockchain/info").await;
    assert_eq!(status, StatusCode::OK);

    let info: BlockchainInfo = serde_json::from_slice(&body).unwrap();
    assert_eq!(info.block_number, 18_000_000);
    assert_eq!(info.network, "eth-mainnet");
    assert!(info.connected);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["blockNumber"], 18_000_000);
}

#[tokio::test]
async fn test_blockchain_info_failure_is_generic_500() {
    let provider = Arc::new(MockProviderClient::new());
    provider.set_available(false);
    let router = create_router(create_test_state(provider));

    let (status, body) = get(router, "/api/blockchain/info").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Failed to connect to blockchain");
    assert_eq!(json["connected"], false);
}

#[tokio::test]
async fn test_wallet_transactions_end_to_end() {
    let mut no_recipient = transfer("0x3");
    no_recipient.to = None;
    let mut no_value = transfer("0x2");
    no_value.value = None;
    let provider = Arc::new(MockProviderClient::with_transfers(vec![
        no_recipient,
        no_value,
        transfer("0x1"),
    ]));
    let router = create_router(create_test_state(Arc::clone(&provider)));

    let (status, body) = get(router, &format!("/api/wallet/{}/transactions?limit=10", ADDRESS)).await;
    assert_eq!(status, StatusCode::OK);

    let response: WalletTransactionsResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.address, ADDRESS);
    assert_eq!(response.count, 3);
    assert_eq!(response.transactions.len(), 3);

    let hashes: Vec<&str> = response.transactions.iter().map(|t| t.hash.as_str()).collect();
    assert_eq!(hashes, vec!["0x3", "0x2", "0x1"]);
    assert!(response.transactions[0].to.is_none());
    assert_eq!(response.transactions[1].value, "0");
    assert_eq!(response.transactions[2].value, "0.1");

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["transactions"][0]["to"].is_null());
}

#[tokio::test]
async fn test_wallet_transactions_limit_parsing() {
    let provider = Arc::new(MockProviderClient::new());
    let router = create_router(create_test_state(Arc::clone(&provider)));

    for query in ["?limit=5", "", "?limit=abc", "?limit=0", "?limit=3x"] {
        let (status, _) = get(
            router.clone(),
            &format!("/api/wallet/{}/transactions{}", ADDRESS, query),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let limits: Vec<u32> = provider.transfer_requests().iter().map(|r| r.1).collect();
    assert_eq!(limits, vec![5, 10, 10, 10, 3]);
}

#[tokio::test]
async fn test_wallet_transactions_repeated_limit_uses_first() {
    let provider = Arc::new(MockProviderClient::new());
    let router = create_router(create_test_state(Arc::clone(&provider)));

    let (status, body) = get(
        router,
        &format!("/api/wallet/{}/transactions?limit=1&limit=2", ADDRESS),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let response: WalletTransactionsResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.count, 0);
    assert_eq!(provider.transfer_requests()[0].1, 1);
}

#[tokio::test]
async fn test_wallet_path_rejection_is_json() {
    let provider = Arc::new(MockProviderClient::new());
    let router = create_router(create_test_state(Arc::clone(&provider)));

    for uri in ["/api/wallet/%FF/transactions", "/api/wallet/%FF/balance"] {
        let (status, body) = get(router.clone(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(!error.error.is_empty());
    }
    assert!(provider.transfer_requests().is_empty());
}

#[tokio::test]
async fn test_wallet_transactions_invalid_address() {
    let provider = Arc::new(MockProviderClient::new());
    let router = create_router(create_test_state(Arc::clone(&provider)));

    let (status, body) = get(router, "/api/wallet/0xValidAddr/transactions").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "Invalid Ethereum address");
    assert!(provider.transfer_requests().is_empty());
}

#[tokio::test]
async fn test_wallet_transactions_provider_error_passed_through() {
    let provider = Arc::new(MockProviderClient::failing(ProviderError::Rpc(
        "Invalid fromAddress".to_string(),
    )));
    let router = create_router(create_test_state(provider));

    let (status, body) = get(router, &format!("/api/wallet/{}/transactions", ADDRESS)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Invalid fromAddress");
    assert!(json.get("transactions").is_none());
}

#[tokio::test]
async fn test_wallet_balance() {
    let provider = Arc::new(MockProviderClient::new().with_balance("0xde0b6b3a7640000"));
    let router = create_router(create_test_state(provider));

    let (status, body) = get(router, &format!("/api/wallet/{}/balance", ADDRESS)).await;
    assert_eq!(status, StatusCode::OK);

    let balance: WalletBalance = serde_json::from_slice(&body).unwrap();
    assert_eq!(balance.balance, "1.0");
    assert_eq!(balance.unit, "ETH");
}

#[tokio::test]
async fn test_wallet_balance_beyond_u128() {
    let provider =
        Arc::new(MockProviderClient::new().with_balance("0x100000000000000000000000000000000"));
    let router = create_router(create_test_state(provider));

    let (status, body) = get(router, &format!("/api/wallet/{}/balance", ADDRESS)).await;
    assert_eq!(status, StatusCode::OK);

    let balance: WalletBalance = serde_json::from_slice(&body).unwrap();
    assert_eq!(balance.balance, "340282366920938463463.374607431768211456");
}

#[tokio::test]
async fn test_cors_and_trace_layers_applied() {
    let router = create_router(create_test_state(Arc::new(MockProviderClient::new())));

    let request = Request::builder()
        .method("GET")
        .uri("/api/health")
        .header("origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_openapi_document_served() {
    let router = create_router(create_test_state(Arc::new(MockProviderClient::new())));

    let (status, body) = get(router, "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);

    let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(doc["paths"]["/api/wallet/{address}/transactions"].is_object());
}
