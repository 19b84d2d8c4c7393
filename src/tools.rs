//! LLM tool definitions for transfer building
//!
//! Each supported network is exposed as its own named tool so the model
//! picks the chain by choosing the tool, never by passing a chain id.

use crate::builder::build_transfer;
use crate::builder::types::TransferOutcome;
use crate::builder::{MAX_GAS_LIMIT, MIN_GAS_LIMIT};
use crate::error::WasmEvmError;
use crate::network::{Network, NETWORKS};
use crate::types::TransferRequest;
use serde::Serialize;
use serde_json::{json, Value};

/// A function-calling tool as advertised to the model
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON schema of the arguments object
    pub parameters: Value,
}

/// Tool definition for one network
pub fn tool_definition(network: Network) -> ToolDefinition {
    let params = network.params();
    let currency = params.currency;

    ToolDefinition {
        name: params.tool_name.to_string(),
        description: format!(
            "Create an unsigned transaction for sending {currency} on {} (Chain ID: {}). \
             Send native {currency} tokens with serialized transaction data.",
            params.chain_name, params.chain_id
        ),
        parameters: json!({
            "type": "object",
            "properties": {
                "recipient": {
                    "type": "string",
                    "description": "Recipient wallet address (must be a valid EVM address)"
                },
                "amount": {
                    "type": "number",
                    "exclusiveMinimum": 0,
                    "description": format!("Amount in {currency} (must be positive)")
                },
                "sender": {
                    "type": "string",
                    "description": "Sender wallet address, the connected wallet the user sends from"
                },
                "gasLimit": {
                    "type": "integer",
                    "minimum": MIN_GAS_LIMIT,
                    "maximum": MAX_GAS_LIMIT,
                    "description": format!("Optional gas limit ({}-{})", MIN_GAS_LIMIT, MAX_GAS_LIMIT)
                },
                "gasPrice": {
                    "type": "string",
                    "description": "Optional gas price in wei (as string)"
                },
                "nonce": {
                    "type": "integer",
                    "minimum": 0,
                    "description": "Optional nonce (non-negative integer)"
                }
            },
            "required": ["recipient", "amount", "sender"],
            "additionalProperties": false
        }),
    }
}

/// Definitions for every supported network, in table order
pub fn tool_definitions() -> Vec<ToolDefinition> {
    NETWORKS.iter().map(|p| tool_definition(p.network)).collect()
}

/// Run a transfer tool call
///
/// Unknown tool names and malformed argument objects are errors; anything
/// past that point is reported inside the returned outcome.
pub fn execute_tool(name: &str, arguments: Value) -> Result<TransferOutcome, WasmEvmError> {
    let network = Network::from_tool_name(name)?;
    let request: TransferRequest = serde_json::from_value(arguments)
        .map_err(|e| WasmEvmError::InvalidInput(format!("Invalid arguments for {}: {}", name, e)))?;
    Ok(build_transfer(network, &request))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_tool_per_network() {
        let names: Vec<String> = tool_definitions().into_iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "transferethereummainnet",
                "transferethereumsepolia",
                "transfermonadtestnet",
                "transfersomniatestnet",
            ]
        );
    }

    #[test]
    fn test_definition_mentions_chain() {
        let tool = tool_definition(Network::MonadTestnet);
        assert!(tool.description.contains("MON"));
        assert!(tool.description.contains("Chain ID: 10143"));
        assert_eq!(tool.parameters["properties"]["gasLimit"]["minimum"], 21000);
        assert_eq!(
            tool.parameters["required"],
            json!(["recipient", "amount", "sender"])
        );
    }

    #[test]
    fn test_execute_tool() {
        let outcome = execute_tool(
            "transferethereumsepolia",
            json!({
                "recipient": "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
                "amount": 0.25,
                "sender": "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
                "nonce": 0
            }),
        )
        .unwrap();

        let prepared = outcome.prepared().expect("prepared");
        assert_eq!(prepared.chain_id, 11_155_111);
        assert_eq!(prepared.tx_data.value, "250000000000000000");
        assert_eq!(prepared.recipient, "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
        assert_eq!(prepared.nonce, Some(0));
    }

    #[test]
    fn test_execute_tool_reports_validation_as_data() {
        let outcome = execute_tool(
            "transferethereummainnet",
            json!({ "recipient": "not-an-address", "amount": 1, "sender": "x" }),
        )
        .unwrap();
        assert_eq!(
            outcome.error(),
            Some("Failed to create Ethereum Mainnet transaction: Invalid recipient address: not-an-address")
        );
    }

    #[test]
    fn test_unknown_tool() {
        let err = execute_tool("transfersui", json!({})).unwrap_err();
        assert_eq!(err, WasmEvmError::UnsupportedNetwork("transfersui".to_string()));
    }

    #[test]
    fn test_malformed_arguments() {
        let err = execute_tool("transfermonadtestnet", json!({ "amount": 1 })).unwrap_err();
        assert!(matches!(err, WasmEvmError::InvalidInput(_)));
    }
}
