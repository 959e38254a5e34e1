//! Error types for the application.

use thiserror::Error;

/// Top-level application error
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Local input validation failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid Ethereum address")]
    InvalidAddress,

    /// Path or query string could not be extracted
    #[error("{0}")]
    InvalidRequest(String),
}

/// Failures reported by, or while talking to, the blockchain data provider
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider answered but flagged an error; the message is passed through verbatim
    #[error("{0}")]
    Rpc(String),

    /// Transport failure, timeout, or an unparseable response
    #[error("Provider unavailable: {0}")]
    Unavailable(String),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(String),

    #[error("Invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
}
