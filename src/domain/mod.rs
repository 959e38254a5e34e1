//! Domain layer containing core types, traits, and error definitions.

pub mod address;
pub mod error;
pub mod traits;
pub mod types;
pub mod units;

pub use address::{Address, is_valid_address};
pub use error::{AppError, ConfigError, ProviderError, ValidationError};
pub use traits::ProviderClient;
pub use types::{
    AssetTransfersResult, BlockchainInfo, BlockchainInfoFailure, ErrorResponse, HealthResponse,
    RawTransfer, RawTransferMetadata, Transaction, TransferCategory, TransferValue,
    WalletBalance, WalletTransactionsResponse,
};
pub use units::{format_ether, parse_hex_quantity};
