//! Blockchain data provider implementations.

pub mod alchemy;

pub use alchemy::{AlchemyClient, AlchemyConfig, DEFAULT_NETWORK, max_count_param};
