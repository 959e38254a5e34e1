//! Mapping of provider transfer records into the canonical transaction shape.

use crate::domain::{RawTransfer, Transaction};

/// Value used when the provider omits a transfer amount
pub const DEFAULT_VALUE: &str = "0";

/// Timestamp used when the provider omits transfer metadata
pub const UNKNOWN_TIMESTAMP: &str = "Unknown";

/// Normalize a batch of raw transfers, preserving order and length.
#[must_use]
pub fn normalize(records: Vec<RawTransfer>) -> Vec<Transaction> {
    records.into_iter().map(normalize_one).collect()
}

/// Normalize a single raw transfer.
#[must_use]
pub fn normalize_one(record: RawTransfer) -> Transaction {
    let timestamp = record
        .metadata
        .and_then(|m| m.block_timestamp)
        .unwrap_or_else(|| UNKNOWN_TIMESTAMP.to_string());

    Transaction {
        hash: record.hash.unwrap_or_default(),
        from: record.from.unwrap_or_default(),
        to: record.to,
        value: record
            .value
            .map(|v| v.to_string())
            .unwrap_or_else(|| DEFAULT_VALUE.to_string()),
        timestamp,
        block_number: record.block_num.unwrap_or_default(),
        category: record.category.unwrap_or_default(),
    }
}
