//! Application state management.

use std::sync::Arc;

use crate::domain::ProviderClient;

use super::service::WalletQueryService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<WalletQueryService>,
}

impl AppState {
    /// Create a new application state with no limit cap
    #[must_use]
    pub fn new(provider: Arc<dyn ProviderClient>) -> Self {
        Self::with_max_limit(provider, None)
    }

    /// Create a new application state capping transaction page sizes
    #[must_use]
    pub fn with_max_limit(provider: Arc<dyn ProviderClient>, max_limit: Option<u32>) -> Self {
        let service = Arc::new(WalletQueryService::new(provider).with_max_limit(max_limit));
        Self { service }
    }
}
