//! Account identifier grammar for EVM chains.

use std::fmt;

use serde::Serialize;

use super::error::ValidationError;

/// Number of bytes in an EVM account identifier
pub const ADDRESS_BYTES: usize = 20;

const ADDRESS_PREFIX: &str = "0x";

/// Check whether `address` is `0x` followed by 40 hex digits.
///
/// Letter case is ignored; EIP-55 checksums are not verified.
#[must_use]
pub fn is_valid_address(address: &str) -> bool {
    let Some(body) = address.strip_prefix(ADDRESS_PREFIX) else {
        return false;
    };
    body.len() == ADDRESS_BYTES * 2 && hex::decode(body).is_ok()
}

/// A syntactically valid account identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Validate and wrap an account identifier, keeping the caller's spelling.
    pub fn parse(address: &str) -> Result<Self, ValidationError> {
        if is_valid_address(address) {
            Ok(Self(address.to_string()))
        } else {
            Err(ValidationError::InvalidAddress)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0";

    #[test]
    fn test_accepts_mixed_lower_and_upper_case() {
        assert!(is_valid_address(VALID));
        assert!(is_valid_address(&VALID.to_lowercase()));
        assert!(is_valid_address(&format!("0x{}", VALID[2..].to_uppercase())));
        assert!(is_valid_address("0x0000000000000000000000000000000000000000"));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(!is_valid_address("0x123"));
        assert!(!is_valid_address(&VALID[..41]));
        assert!(!is_valid_address(&format!("{VALID}0")));
        assert!(!is_valid_address("0x"));
        assert!(!is_valid_address(""));
    }

    #[test]
    fn test_rejects_wrong_prefix() {
        assert!(!is_valid_address(&VALID[2..]));
        assert!(!is_valid_address(&format!("0X{}", &VALID[2..])));
        assert!(!is_valid_address(&format!("1x{}", &VALID[2..])));
    }

    #[test]
    fn test_rejects_non_hex_and_whitespace() {
        assert!(!is_valid_address("0x742d35Cc6634C0532925a3b844Bc9e7595f0bEbZ"));
        assert!(!is_valid_address(&format!(" {VALID}")));
        assert!(!is_valid_address(&format!("{VALID}\n")));
        assert!(!is_valid_address("0xValidAddr"));
    }

    #[test]
    fn test_parse_preserves_spelling() {
        let address = Address::parse(VALID).unwrap();
        assert_eq!(address.as_str(), VALID);
        assert_eq!(address.to_string(), VALID);
        assert_eq!(
            Address::parse("invalid").unwrap_err(),
            ValidationError::InvalidAddress
        );
    }
}
