//! Alchemy JSON-RPC provider client.
//!
//! Implements the [`ProviderClient`] contract over Alchemy's HTTP endpoint:
//! - `eth_blockNumber` for chain head height
//! - `alchemy_getAssetTransfers` for outgoing transfer history
//! - `eth_getBalance` for native balance
//!
//! No retries are performed; every call is a single outbound request.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::json;
use tracing::{debug, error, instrument, warn};

use crate::domain::{
    Address, AppError, AssetTransfersResult, ConfigError, ProviderClient, ProviderError,
    RawTransfer, TransferCategory, parse_hex_quantity,
};

/// Default Alchemy network
pub const DEFAULT_NETWORK: &str = "eth-mainnet";

/// Configuration for the Alchemy client
#[derive(Debug, Clone)]
pub struct AlchemyConfig {
    /// Network identifier, e.g. `eth-mainnet` or `sepolia`
    pub network: String,
    pub api_key: SecretString,
    /// Full endpoint override; bypasses the derived Alchemy URL
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl AlchemyConfig {
    #[must_use]
    pub fn new(network: impl Into<String>, api_key: SecretString) -> Self {
        Self {
            network: network.into(),
            api_key,
            base_url: None,
            timeout: Duration::from_secs(30),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Endpoint URL the client posts to. Contains the credential; never log it.
    pub fn endpoint_url(&self) -> String {
        if let Some(base_url) = &self.base_url {
            return base_url.clone();
        }
        let host = if self.network.contains('-') {
            self.network.clone()
        } else {
            format!("eth-{}", self.network)
        };
        format!(
            "https://{}.g.alchemy.com/v2/{}",
            host,
            self.api_key.expose_secret()
        )
    }
}

/// Render a transfer count the way `alchemy_getAssetTransfers` expects it
#[must_use]
pub fn max_count_param(limit: u32) -> String {
    format!("0x{:x}", limit)
}

#[derive(Debug, Serialize)]
struct JsonRpcRequest<T: Serialize> {
    jsonrpc: &'static str,
    id: u64,
    method: &'static str,
    params: T,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse<T> {
    result: Option<T>,
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    #[allow(dead_code)]
    code: Option<i64>,
    message: String,
}

/// Alchemy-backed provider client
pub struct AlchemyClient {
    http_client: Client,
    network: String,
    endpoint: SecretString,
}

impl AlchemyClient {
    pub fn new(config: AlchemyConfig) -> Result<Self, AppError> {
        if config.base_url.is_none() && config.api_key.expose_secret().is_empty() {
            return Err(ConfigError::MissingEnv("ALCHEMY_API_KEY".to_string()).into());
        }

        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                name: "http_client".to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            http_client,
            endpoint: SecretString::from(config.endpoint_url()),
            network: config.network,
        })
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &'static str,
        params: serde_json::Value,
    ) -> Result<T, AppError> {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        };

        debug!(method = %method, "Sending provider request");

        let response = self
            .http_client
            .post(self.endpoint.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                // strip the URL: it embeds the API key
                let e = e.without_url();
                error!(method = %method, error = %e, "Provider request failed");
                if e.is_timeout() {
                    ProviderError::Unavailable(format!("request timed out: {}", e))
                } else {
                    ProviderError::Unavailable(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            let e = e.without_url();
            error!(method = %method, error = %e, "Failed to read provider response");
            ProviderError::Unavailable(e.to_string())
        })?;

        let rpc_response: JsonRpcResponse<serde_json::Value> = serde_json::from_str(&body)
            .map_err(|e| {
                error!(method = %method, status = %status, error = %e, "Malformed provider response");
                ProviderError::Unavailable(format!("malformed response (HTTP {}): {}", status, e))
            })?;

        if let Some(rpc_error) = rpc_response.error {
            warn!(method = %method, code = ?rpc_error.code, message = %rpc_error.message, "Provider returned error");
            return Err(ProviderError::Rpc(rpc_error.message).into());
        }

        if !status.is_success() {
            error!(method = %method, status = %status, "Provider returned non-success status");
            return Err(ProviderError::Unavailable(format!("HTTP {}", status)).into());
        }

        let result = rpc_response
            .result
            .ok_or_else(|| ProviderError::Unavailable("empty response".to_string()))?;

        serde_json::from_value(result).map_err(|e| {
            error!(method = %method, error = %e, "Unexpected provider result shape");
            ProviderError::Unavailable(format!("unexpected result shape: {}", e)).into()
        })
    }
}

#[async_trait]
impl ProviderClient for AlchemyClient {
    fn network(&self) -> &str {
        &self.network
    }

    #[instrument(skip(self))]
    async fn get_block_number(&self) -> Result<u64, AppError> {
        let quantity: String = self.call("eth_blockNumber", json!([])).await?;
        parse_hex_quantity(&quantity)
            .filter(|n| n.bits() <= 64)
            .map(|n| n.as_u64())
            .ok_or_else(|| {
                ProviderError::Unavailable(format!("invalid block number: {}", quantity)).into()
            })
    }

    #[instrument(skip(self, address), fields(address = %address))]
    async fn fetch_transfers(
        &self,
        address: &Address,
        limit: u32,
    ) -> Result<Vec<RawTransfer>, AppError> {
        let categories: Vec<&str> = TransferCategory::ALL.iter().map(|c| c.as_str()).collect();
        let params = json!([{
            "fromAddress": address.as_str(),
            "category": categories,
            "maxCount": max_count_param(limit),
            "order": "desc",
            "withMetadata": true,
        }]);

        let result: AssetTransfersResult = self.call("alchemy_getAssetTransfers", params).await?;
        debug!(count = result.transfers.len(), "Fetched transfers");
        Ok(result.transfers)
    }

    #[instrument(skip(self, address), fields(address = %address))]
    async fn get_balance(&self, address: &Address) -> Result<String, AppError> {
        self.call("eth_getBalance", json!([address.as_str(), "latest"]))
            .await
    }
}
