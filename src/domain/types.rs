//! Domain types: provider boundary records, normalized transactions, and API bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Transfer categories requested from the provider
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransferCategory {
    /// Top-level native currency transfer
    External,
    /// Native currency moved by a contract call trace
    Internal,
    /// Fungible token transfer
    Erc20,
    /// Non-fungible token transfer
    Erc721,
    /// Multi-token transfer
    Erc1155,
}

impl TransferCategory {
    /// Every category the transfer query asks for
    pub const ALL: [TransferCategory; 5] = [
        Self::External,
        Self::Internal,
        Self::Erc20,
        Self::Erc721,
        Self::Erc1155,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::External => "external",
            Self::Internal => "internal",
            Self::Erc20 => "erc20",
            Self::Erc721 => "erc721",
            Self::Erc1155 => "erc1155",
        }
    }
}

/// Transfer amount as the provider sends it (Alchemy uses JSON numbers).
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TransferValue {
    Number(serde_json::Number),
    Text(String),
}

impl std::fmt::Display for TransferValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Metadata block attached to a raw transfer
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawTransferMetadata {
    #[serde(default)]
    pub block_timestamp: Option<String>,
}

/// A transfer record as returned by `alchemy_getAssetTransfers`.
///
/// Every field tolerates absence; unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawTransfer {
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub value: Option<TransferValue>,
    #[serde(default)]
    pub block_num: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub metadata: Option<RawTransferMetadata>,
}

/// Result payload of `alchemy_getAssetTransfers`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetTransfersResult {
    #[serde(default)]
    pub transfers: Vec<RawTransfer>,
}

/// Normalized wallet transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction hash
    #[schema(example = "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060")]
    pub hash: String,
    /// Sender address
    #[schema(example = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0")]
    pub from: String,
    /// Recipient address, null for contract creation
    pub to: Option<String>,
    /// Amount in base currency units, "0" when the provider omits it
    #[schema(example = "0.5")]
    pub value: String,
    /// ISO-8601 block timestamp or "Unknown"
    #[schema(example = "2024-01-15T10:30:00.000Z")]
    pub timestamp: String,
    /// Hex-prefixed block number
    #[schema(example = "0x112a880")]
    pub block_number: String,
    /// Transfer category
    #[schema(example = "external")]
    pub category: String,
}

/// Response body for the wallet transactions endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WalletTransactionsResponse {
    pub address: String,
    pub transactions: Vec<Transaction>,
    pub count: usize,
}

impl WalletTransactionsResponse {
    #[must_use]
    pub fn new(address: String, transactions: Vec<Transaction>) -> Self {
        let count = transactions.len();
        Self {
            address,
            transactions,
            count,
        }
    }
}

/// Chain head information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlockchainInfo {
    #[schema(example = 18000000)]
    pub block_number: u64,
    #[schema(example = "eth-mainnet")]
    pub network: String,
    pub connected: bool,
}

/// Body returned when the chain head cannot be fetched
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BlockchainInfoFailure {
    #[schema(example = "Failed to connect to blockchain")]
    pub error: String,
    pub connected: bool,
}

/// Native balance of a wallet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct WalletBalance {
    pub address: String,
    /// Balance formatted in ether
    #[schema(example = "1.5")]
    pub balance: String,
    #[schema(example = "ETH")]
    pub unit: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Wallet Tracker API is running!".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Error response structure
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "Invalid Ethereum address")]
    pub error: String,
}
