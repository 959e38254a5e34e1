//! Domain traits defining contracts for external systems.

use async_trait::async_trait;

use super::address::Address;
use super::error::AppError;
use super::types::RawTransfer;

/// Blockchain data provider used by the wallet query pipeline
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// Network identifier the client is configured for (e.g. `eth-mainnet`)
    fn network(&self) -> &str;

    /// Get current chain head height
    async fn get_block_number(&self) -> Result<u64, AppError>;

    /// Fetch up to `limit` transfers sent from `address`, most recent first
    async fn fetch_transfers(
        &self,
        address: &Address,
        limit: u32,
    ) -> Result<Vec<RawTransfer>, AppError>;

    /// Get the native balance of `address` in wei, as a hex quantity
    async fn get_balance(&self, address: &Address) -> Result<String, AppError> {
        let _ = address;
        Err(AppError::Internal(
            "get_balance not implemented".to_string(),
        ))
    }
}
