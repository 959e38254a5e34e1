//! HTTP request handlers with OpenAPI documentation.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};
use utoipa::{IntoParams, OpenApi};

use crate::app::AppState;
use crate::domain::{
    AppError, BlockchainInfo, BlockchainInfoFailure, ErrorResponse, HealthResponse, Transaction,
    ValidationError, WalletBalance, WalletTransactionsResponse,
};

/// Message returned when the chain head cannot be fetched
pub const BLOCKCHAIN_UNAVAILABLE_MESSAGE: &str = "Failed to connect to blockchain";

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wallet Tracker API",
        version = "0.1.0",
        description = "Chain status and wallet transaction history backed by Alchemy",
        license(
            name = "MIT"
        )
    ),
    paths(
        health_handler,
        blockchain_info_handler,
        wallet_transactions_handler,
        wallet_balance_handler,
    ),
    components(
        schemas(
            HealthResponse,
            BlockchainInfo,
            BlockchainInfoFailure,
            Transaction,
            WalletTransactionsResponse,
            WalletBalance,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "blockchain", description = "Chain status endpoints"),
        (name = "wallet", description = "Wallet history and balance endpoints")
    )
)]
pub struct ApiDoc;

/// Query parameters for the transactions endpoint
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TransactionsQuery {
    /// Maximum number of transactions to return (default: 10)
    pub limit: Option<String>,
}

impl TransactionsQuery {
    /// Pick parameters out of raw query pairs. A repeated key keeps its first value.
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let limit = pairs
            .into_iter()
            .find(|(key, _)| key == "limit")
            .map(|(_, value)| value);
        Self { limit }
    }
}

/// Lenient integer parse: optional leading whitespace and sign, then digits,
/// ignoring anything after them. Returns `None` when no digits are present.
pub fn parse_limit(raw: Option<&str>) -> Option<i64> {
    let raw = raw?.trim_start();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    // Only overflow can fail here
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Current chain head height
#[utoipa::path(
    get,
    path = "/api/blockchain/info",
    tag = "blockchain",
    responses(
        (status = 200, description = "Connected to the provider", body = BlockchainInfo),
        (status = 500, description = "Provider unreachable or returned an error", body = BlockchainInfoFailure)
    )
)]
pub async fn blockchain_info_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.service.get_block_info().await {
        Ok(info) => Json(info).into_response(),
        Err(e) => {
            error!(error = %e, "Blockchain info request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(BlockchainInfoFailure {
                    error: BLOCKCHAIN_UNAVAILABLE_MESSAGE.to_string(),
                    connected: false,
                }),
            )
                .into_response()
        }
    }
}

/// Recent outgoing transfers of a wallet
///
/// Returns at most `limit` transfers, most recent first, across native,
/// internal, ERC-20, ERC-721 and ERC-1155 categories.
#[utoipa::path(
    get,
    path = "/api/wallet/{address}/transactions",
    tag = "wallet",
    params(
        ("address" = String, Path, description = "Wallet address (0x + 40 hex digits)"),
        TransactionsQuery
    ),
    responses(
        (status = 200, description = "Normalized transactions", body = WalletTransactionsResponse),
        (status = 400, description = "Invalid address or provider failure", body = ErrorResponse)
    )
)]
pub async fn wallet_transactions_handler(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<WalletTransactionsResponse>, AppError> {
    let Path(address) = path?;
    let Query(pairs) = query?;
    let params = TransactionsQuery::from_pairs(pairs);
    let limit = parse_limit(params.limit.as_deref());
    let transactions = state.service.get_transactions(&address, limit).await?;
    Ok(Json(WalletTransactionsResponse::new(address, transactions)))
}

/// Native balance of a wallet in ether
#[utoipa::path(
    get,
    path = "/api/wallet/{address}/balance",
    tag = "wallet",
    params(
        ("address" = String, Path, description = "Wallet address (0x + 40 hex digits)")
    ),
    responses(
        (status = 200, description = "Wallet balance", body = WalletBalance),
        (status = 400, description = "Invalid address or provider failure", body = ErrorResponse)
    )
)]
pub async fn wallet_balance_handler(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<WalletBalance>, AppError> {
    let Path(address) = path?;
    let balance = state.service.get_balance(&address).await?;
    Ok(Json(balance))
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        ValidationError::InvalidRequest(rejection.body_text()).into()
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        ValidationError::InvalidRequest(rejection.body_text()).into()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) | AppError::Provider(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = self.to_string();

        if status.is_server_error() {
            error!(message = %message, "Server error");
        } else {
            warn!(message = %message, "Request failed");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
