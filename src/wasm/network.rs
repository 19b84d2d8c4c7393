//! WASM bindings for network and tool metadata

use crate::address;
use crate::network::NETWORKS;
use crate::tools;
use crate::wasm::to_js_value;
use wasm_bindgen::prelude::*;

/// Namespace for network metadata
#[wasm_bindgen]
pub struct NetworkNamespace;

#[wasm_bindgen]
impl NetworkNamespace {
    /// All supported networks with their constants
    #[wasm_bindgen]
    pub fn networks() -> Result<JsValue, JsValue> {
        to_js_value(&NETWORKS)
    }

    /// Tool definitions to register with the model
    #[wasm_bindgen(js_name = toolDefinitions)]
    pub fn tool_definitions() -> Result<JsValue, JsValue> {
        to_js_value(&tools::tool_definitions())
    }

    /// Validate an EVM address (checksum enforced for mixed case)
    #[wasm_bindgen(js_name = isValidAddress)]
    pub fn is_valid_address(address: &str) -> bool {
        address::validate_address(address)
    }

    /// EIP-55 form of an address
    #[wasm_bindgen(js_name = toChecksumAddress)]
    pub fn to_checksum_address(address: &str) -> Result<String, JsValue> {
        Ok(address::normalize_address(address)?)
    }
}
