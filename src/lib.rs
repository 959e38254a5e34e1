//! Wallet Tracker API.
//!
//! Reports chain head height and a wallet's recent transfer history by
//! delegating to an Alchemy JSON-RPC endpoint, normalizing the provider's
//! transfer records into a stable schema.

pub mod api;
pub mod app;
pub mod domain;
pub mod infra;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
