//! Test doubles for the provider seam.

pub mod mocks;

pub use mocks::{MockConfig, MockProviderClient};
