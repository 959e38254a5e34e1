//! Application layer containing the query pipeline and shared state.

pub mod normalizer;
pub mod service;
pub mod state;

pub use normalizer::{normalize, normalize_one};
pub use service::{DEFAULT_TRANSACTION_LIMIT, WalletQueryService};
pub use state::AppState;
