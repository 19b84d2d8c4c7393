//! WASM bindings for transfer building
//!
//! BuilderNamespace is what the chat tool runtime calls once the model has
//! picked a transfer tool.

use crate::builder::build_transfer;
use crate::network::Network;
use crate::tools::execute_tool;
use crate::types::TransferRequest;
use crate::wasm::to_js_value;
use wasm_bindgen::prelude::*;

/// Namespace for building operations
#[wasm_bindgen]
pub struct BuilderNamespace;

#[wasm_bindgen]
impl BuilderNamespace {
    /// Build an unsigned native-asset transfer
    ///
    /// # Arguments
    /// * `network` - Network slug (`"ethereumMainnet"`), tool name or chain id (`"1"`)
    /// * `request` - `{ recipient, amount, sender, gasLimit?, gasPrice?, nonce? }`
    ///
    /// # Returns
    /// Either the prepared transfer (`txData`, `serializedTransaction`,
    /// `humanMessage`, echoes) or `{ error, chainId, chainName, currency }`.
    /// Validation failures are returned, not thrown; only an unknown network
    /// or a malformed request object throws.
    ///
    /// # Example Request
    /// ```json
    /// {
    ///   "recipient": "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
    ///   "amount": 0.5,
    ///   "sender": "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
    ///   "nonce": 0
    /// }
    /// ```
    #[wasm_bindgen(js_name = buildTransfer)]
    pub fn build_transfer_wasm(network: &str, request: JsValue) -> Result<JsValue, JsValue> {
        let network: Network = network.parse()?;
        let request: TransferRequest = serde_wasm_bindgen::from_value(request)
            .map_err(|e| JsValue::from_str(&format!("Invalid request: {}", e)))?;

        to_js_value(&build_transfer(network, &request))
    }

    /// Run a transfer tool call by tool name (e.g., `"transfermonadtestnet"`)
    #[wasm_bindgen(js_name = executeTool)]
    pub fn execute_tool_wasm(name: &str, args: JsValue) -> Result<JsValue, JsValue> {
        let args: serde_json::Value = serde_wasm_bindgen::from_value(args)
            .map_err(|e| JsValue::from_str(&format!("Invalid arguments: {}", e)))?;

        to_js_value(&execute_tool(name, args)?)
    }
}
