//! Wallet query service: validation, provider fetch, normalization.

use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::domain::{
    Address, AppError, BlockchainInfo, ProviderClient, ProviderError, Transaction, WalletBalance,
    format_ether, parse_hex_quantity,
};

use super::normalizer;

/// Number of transactions returned when the caller gives no usable limit
pub const DEFAULT_TRANSACTION_LIMIT: u32 = 10;

/// Single entry point used by the HTTP layer
pub struct WalletQueryService {
    provider: Arc<dyn ProviderClient>,
    /// Optional cap on the requested page size; `None` forwards any limit
    max_limit: Option<u32>,
}

impl WalletQueryService {
    #[must_use]
    pub fn new(provider: Arc<dyn ProviderClient>) -> Self {
        Self {
            provider,
            max_limit: None,
        }
    }

    /// Cap requested limits at `max_limit` (builder pattern)
    #[must_use]
    pub fn with_max_limit(mut self, max_limit: Option<u32>) -> Self {
        self.max_limit = max_limit.filter(|m| *m > 0);
        self
    }

    /// Resolve the caller's limit into the count sent to the provider.
    #[must_use]
    pub fn effective_limit(&self, limit: Option<i64>) -> u32 {
        let limit = limit
            .filter(|l| *l > 0)
            .map(|l| u32::try_from(l).unwrap_or(u32::MAX))
            .unwrap_or(DEFAULT_TRANSACTION_LIMIT);
        match self.max_limit {
            Some(max) => limit.min(max),
            None => limit,
        }
    }

    /// Fetch and normalize the most recent outgoing transfers of `address`.
    #[instrument(skip(self))]
    pub async fn get_transactions(
        &self,
        address: &str,
        limit: Option<i64>,
    ) -> Result<Vec<Transaction>, AppError> {
        let address = Address::parse(address).map_err(|e| {
            warn!(error = %e, "Rejected wallet query");
            e
        })?;
        let limit = self.effective_limit(limit);

        let records = self
            .provider
            .fetch_transfers(&address, limit)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch wallet transfers");
                e
            })?;

        let transactions = normalizer::normalize(records);
        info!(count = transactions.len(), limit, "Wallet transactions fetched");
        Ok(transactions)
    }

    /// Current chain head and configured network.
    #[instrument(skip(self))]
    pub async fn get_block_info(&self) -> Result<BlockchainInfo, AppError> {
        let block_number = self.provider.get_block_number().await.map_err(|e| {
            error!(error = %e, "Failed to fetch block number");
            e
        })?;

        Ok(BlockchainInfo {
            block_number,
            network: self.provider.network().to_string(),
            connected: true,
        })
    }

    /// Native balance of `address`, formatted in ether.
    #[instrument(skip(self))]
    pub async fn get_balance(&self, address: &str) -> Result<WalletBalance, AppError> {
        let address = Address::parse(address).map_err(|e| {
            warn!(error = %e, "Rejected balance query");
            e
        })?;

        let quantity = self.provider.get_balance(&address).await.map_err(|e| {
            error!(error = %e, "Failed to fetch balance");
            e
        })?;
        let wei = parse_hex_quantity(&quantity).ok_or_else(|| {
            ProviderError::Unavailable(format!("invalid balance quantity: {}", quantity))
        })?;

        Ok(WalletBalance {
            address: address.to_string(),
            balance: format_ether(wei),
            unit: "ETH".to_string(),
        })
    }
}
