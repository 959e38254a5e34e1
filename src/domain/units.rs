//! Hex quantity parsing and ether formatting.

use ethers::types::U256;
use ethers::utils;

/// Parse a `0x`-prefixed hex quantity as returned by JSON-RPC methods.
pub fn parse_hex_quantity(quantity: &str) -> Option<U256> {
    let digits = quantity.strip_prefix("0x")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    U256::from_str_radix(digits, 16).ok()
}

/// Format a wei amount as ether, keeping at least one fractional digit.
#[must_use]
pub fn format_ether(wei: U256) -> String {
    let formatted = utils::format_ether(wei);
    match formatted.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            let fraction = if fraction.is_empty() { "0" } else { fraction };
            format!("{}.{}", whole, fraction)
        }
        None => format!("{}.0", formatted),
    }
}
