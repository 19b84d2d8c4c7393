//! Error types for wasm-evm

use wasm_bindgen::prelude::*;

/// Main error type for wasm-evm operations
///
/// The `Display` text of the validation variants is the reason shown to the
/// end user, so it must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WasmEvmError {
    #[error("Invalid recipient address: {0}")]
    InvalidRecipient(String),
    #[error("Invalid sender address: {0}")]
    InvalidSender(String),
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Amount must be greater than 0")]
    NonPositiveAmount,
    #[error("Amount {amount} has more than {decimals} decimal places")]
    AmountPrecision { amount: String, decimals: u32 },
    #[error("Gas limit must be between 21,000 and 10,000,000")]
    GasLimitOutOfRange,
    #[error("Gas price must be greater than 0")]
    NonPositiveGasPrice,
    #[error("Invalid gas price format")]
    InvalidGasPriceFormat,
    #[error("Nonce must be non-negative")]
    NegativeNonce,
    #[error("Unsupported network: {0}")]
    UnsupportedNetwork(String),
    /// The canonical encoder refused the record
    #[error("Encoding error: {0}")]
    Encoding(String),
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),
    #[error("RLP decode error: {0}")]
    RlpDecode(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<ethers_core::utils::rlp::DecoderError> for WasmEvmError {
    fn from(err: ethers_core::utils::rlp::DecoderError) -> Self {
        WasmEvmError::RlpDecode(err.to_string())
    }
}

impl From<hex::FromHexError> for WasmEvmError {
    fn from(err: hex::FromHexError) -> Self {
        WasmEvmError::InvalidInput(format!("Invalid hex: {}", err))
    }
}

impl From<serde_json::Error> for WasmEvmError {
    fn from(err: serde_json::Error) -> Self {
        WasmEvmError::InvalidInput(err.to_string())
    }
}

// Converts to JS Error with stack trace
impl From<WasmEvmError> for JsValue {
    fn from(err: WasmEvmError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            WasmEvmError::InvalidRecipient("not-an-address".to_string()).to_string(),
            "Invalid recipient address: not-an-address"
        );
        assert_eq!(
            WasmEvmError::GasLimitOutOfRange.to_string(),
            "Gas limit must be between 21,000 and 10,000,000"
        );
        assert_eq!(
            WasmEvmError::AmountPrecision {
                amount: "0.1234567".to_string(),
                decimals: 6
            }
            .to_string(),
            "Amount 0.1234567 has more than 6 decimal places"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err: WasmEvmError = serde_json::from_str::<u64>("\"x\"").unwrap_err().into();
        assert!(matches!(err, WasmEvmError::InvalidInput(_)));
    }
}
