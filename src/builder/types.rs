//! Output shapes of the transfer builder
//!
//! The outcome is either a prepared transaction or a failure, never a mix.
//! Both serialize to the flat JSON objects the chat tool layer embeds in the
//! assistant's response.

use crate::network::Network;
use crate::transaction::{EncodedTransaction, TransactionRecord};
use serde::{Deserialize, Serialize};

/// Successful build: everything the approval UI needs to prompt for a signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedTransfer {
    /// Raw field snapshot
    pub tx_data: TransactionRecord,
    pub serialized_transaction: EncodedTransaction,
    /// One-line description for display
    pub human_message: String,
    /// Amount in display units, as requested
    pub amount: String,
    /// Recipient (EIP-55)
    pub recipient: String,
    /// Sender (EIP-55)
    pub sender: String,
    // Echoes of the optional inputs; `null` when not supplied
    pub gas_limit: Option<u64>,
    pub gas_price: Option<String>,
    pub nonce: Option<u64>,
    pub chain_id: u64,
    pub chain_name: String,
    pub currency: String,
}

/// Failed build: the reason plus the network it was meant for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferFailure {
    pub error: String,
    pub chain_id: u64,
    pub chain_name: String,
    pub currency: String,
}

impl TransferFailure {
    pub fn new(network: Network, reason: impl std::fmt::Display) -> Self {
        let params = network.params();
        TransferFailure {
            error: format!(
                "Failed to create {} transaction: {}",
                params.chain_name, reason
            ),
            chain_id: params.chain_id,
            chain_name: params.chain_name.to_string(),
            currency: params.currency.to_string(),
        }
    }
}

/// Result of [`crate::builder::build_transfer`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransferOutcome {
    Prepared(PreparedTransfer),
    Failed(TransferFailure),
}

impl TransferOutcome {
    pub fn is_prepared(&self) -> bool {
        matches!(self, TransferOutcome::Prepared(_))
    }

    pub fn prepared(&self) -> Option<&PreparedTransfer> {
        match self {
            TransferOutcome::Prepared(prepared) => Some(prepared),
            TransferOutcome::Failed(_) => None,
        }
    }

    /// Error text if the build failed
    pub fn error(&self) -> Option<&str> {
        match self {
            TransferOutcome::Prepared(_) => None,
            TransferOutcome::Failed(failure) => Some(&failure.error),
        }
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            TransferOutcome::Prepared(prepared) => prepared.chain_id,
            TransferOutcome::Failed(failure) => failure.chain_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_json_shape() {
        let outcome = TransferOutcome::Failed(TransferFailure::new(
            Network::EthereumMainnet,
            "Amount must be greater than 0",
        ));
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            serde_json::json!({
                "error": "Failed to create Ethereum Mainnet transaction: Amount must be greater than 0",
                "chainId": 1,
                "chainName": "Ethereum Mainnet",
                "currency": "ETH"
            })
        );
    }

    #[test]
    fn test_failure_roundtrips_as_failure() {
        let outcome =
            TransferOutcome::Failed(TransferFailure::new(Network::MonadTestnet, "boom"));
        let json = serde_json::to_string(&outcome).unwrap();
        let back: TransferOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
        assert_eq!(back.error(), Some("Failed to create Monad Testnet transaction: boom"));
        assert!(back.prepared().is_none());
    }
}
