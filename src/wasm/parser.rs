//! WASM bindings for transaction parsing

use crate::parser::{parse_canonical, parse_transaction};
use crate::transaction::EncodedTransaction;
use crate::wasm::to_js_value;
use crate::WasmEvmError;
use wasm_bindgen::prelude::*;

/// Namespace for parsing operations
#[wasm_bindgen]
pub struct ParserNamespace;

#[wasm_bindgen]
impl ParserNamespace {
    /// Parse a `serializedTransaction` object (`{ format, data }`)
    #[wasm_bindgen(js_name = parseTransaction)]
    pub fn parse_transaction_wasm(serialized: JsValue) -> Result<JsValue, JsValue> {
        let encoded: EncodedTransaction = serde_wasm_bindgen::from_value(serialized)
            .map_err(|e| JsValue::from_str(&format!("Invalid serialized transaction: {}", e)))?;
        to_js_value(&parse_transaction(&encoded)?)
    }

    /// Parse canonical unsigned transaction bytes given as hex
    ///
    /// # Arguments
    /// * `hex` - RLP bytes (with or without 0x prefix)
    #[wasm_bindgen(js_name = parseTransactionHex)]
    pub fn parse_transaction_hex(hex: &str) -> Result<JsValue, JsValue> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        let bytes = hex::decode(hex).map_err(WasmEvmError::from)?;
        to_js_value(&parse_canonical(&bytes)?)
    }
}
