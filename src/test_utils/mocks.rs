//! Mock implementations for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::{Address, AppError, ProviderClient, ProviderError, RawTransfer};

/// Configuration for mock behavior
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    pub error: Option<ProviderError>,
}

impl MockConfig {
    #[must_use]
    pub fn success() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn failure(error: ProviderError) -> Self {
        Self { error: Some(error) }
    }
}

/// Mock provider client for testing
pub struct MockProviderClient {
    transfers: Vec<RawTransfer>,
    block_number: u64,
    balance: String,
    network: String,
    config: MockConfig,
    is_available: AtomicBool,
    /// `(address, limit)` of every transfer fetch
    transfer_requests: Arc<Mutex<Vec<(String, u32)>>>,
}

impl MockProviderClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MockConfig::success())
    }

    #[must_use]
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            transfers: Vec::new(),
            block_number: 0,
            balance: "0x0".to_string(),
            network: "eth-mainnet".to_string(),
            config,
            is_available: AtomicBool::new(true),
            transfer_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    #[must_use]
    pub fn failing(error: ProviderError) -> Self {
        Self::with_config(MockConfig::failure(error))
    }

    #[must_use]
    pub fn with_transfers(transfers: Vec<RawTransfer>) -> Self {
        Self {
            transfers,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_block_number(mut self, block_number: u64) -> Self {
        self.block_number = block_number;
        self
    }

    #[must_use]
    pub fn with_balance(mut self, balance_wei_hex: impl Into<String>) -> Self {
        self.balance = balance_wei_hex.into();
        self
    }

    #[must_use]
    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = network.into();
        self
    }

    /// Simulate a transport outage
    pub fn set_available(&self, available: bool) {
        self.is_available.store(available, Ordering::Relaxed);
    }

    /// Recorded transfer fetches
    pub fn transfer_requests(&self) -> Vec<(String, u32)> {
        self.transfer_requests.lock().unwrap().clone()
    }

    fn check_should_fail(&self) -> Result<(), AppError> {
        if !self.is_available.load(Ordering::Relaxed) {
            return Err(AppError::Provider(ProviderError::Unavailable(
                "connection refused".to_string(),
            )));
        }
        if let Some(error) = &self.config.error {
            return Err(AppError::Provider(error.clone()));
        }
        Ok(())
    }
}

impl Default for MockProviderClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderClient for MockProviderClient {
    fn network(&self) -> &str {
        &self.network
    }

    async fn get_block_number(&self) -> Result<u64, AppError> {
        self.check_should_fail()?;
        Ok(self.block_number)
    }

    async fn fetch_transfers(
        &self,
        address: &Address,
        limit: u32,
    ) -> Result<Vec<RawTransfer>, AppError> {
        self.transfer_requests
            .lock()
            .unwrap()
            .push((address.to_string(), limit));
        self.check_should_fail()?;
        Ok(self
            .transfers
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn get_balance(&self, _address: &Address) -> Result<String, AppError> {
        self.check_should_fail()?;
        Ok(self.balance.clone())
    }
}
