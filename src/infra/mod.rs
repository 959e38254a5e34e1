//! Infrastructure layer implementations.

pub mod blockchain;

pub use blockchain::{AlchemyClient, AlchemyConfig};
