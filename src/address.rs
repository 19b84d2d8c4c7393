//! EVM address parsing and EIP-55 checksum encoding
//!
//! Uses ethers-core for the keccak-based checksum, matching what wallets
//! display. See: https://eips.ethereum.org/EIPS/eip-55

use crate::error::WasmEvmError;
use ethers_core::types::Address;
use ethers_core::utils::to_checksum;

/// Number of hex digits in an address
const ADDRESS_HEX_LEN: usize = 40;

/// Parse an address string
///
/// Accepts an optional `0x` prefix followed by 40 hex digits. Single-case
/// input is taken as-is; mixed-case input must carry a valid EIP-55 checksum.
pub fn parse_address(address: &str) -> Result<Address, WasmEvmError> {
    let digits = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address);

    if digits.len() != ADDRESS_HEX_LEN {
        return Err(WasmEvmError::InvalidAddress(format!(
            "Expected {} hex digits, got {}",
            ADDRESS_HEX_LEN,
            digits.len()
        )));
    }

    let bytes = hex::decode(digits)
        .map_err(|e| WasmEvmError::InvalidAddress(format!("Invalid hex: {}", e)))?;
    let parsed = Address::from_slice(&bytes);

    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper && to_checksum(&parsed, None)[2..] != *digits {
        return Err(WasmEvmError::InvalidAddress("Bad checksum".to_string()));
    }

    Ok(parsed)
}

/// Encode an address in EIP-55 checksummed form (`0x`-prefixed)
pub fn checksum_address(address: &Address) -> String {
    to_checksum(address, None)
}

/// Parse and re-encode an address in canonical form
pub fn normalize_address(address: &str) -> Result<String, WasmEvmError> {
    parse_address(address).map(|a| checksum_address(&a))
}

/// Validate an address string
pub fn validate_address(address: &str) -> bool {
    parse_address(address).is_ok()
}
