//! Unsigned transfer transactions and their encodings

use crate::address::checksum_address;
use crate::error::WasmEvmError;
use ethers_core::types::transaction::eip2718::TypedTransaction;
use ethers_core::types::{Address, Eip1559TransactionRequest, TransactionRequest, U256};
use serde::{Deserialize, Serialize};

/// Field snapshot of an unsigned transfer
///
/// Large integers are decimal strings for BigInt compatibility. Optional
/// fields that were not supplied are omitted, not defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Recipient (EIP-55)
    pub to: String,
    /// Value in the smallest unit
    pub value: String,
    pub chain_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
}

/// Serialized form handed to the signer
///
/// The variant records which encoding was produced so a decoder never has to
/// guess from the bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", content = "data", rename_all = "camelCase")]
pub enum EncodedTransaction {
    /// Unsigned RLP encoding (`0x`-prefixed hex)
    Canonical(String),
    /// Hex of the JSON [`TransactionRecord`], used when canonical encoding fails
    Snapshot(String),
}

impl EncodedTransaction {
    pub fn data(&self) -> &str {
        match self {
            EncodedTransaction::Canonical(data) | EncodedTransaction::Snapshot(data) => data,
        }
    }

    pub fn is_canonical(&self) -> bool {
        matches!(self, EncodedTransaction::Canonical(_))
    }
}

/// A validated native-asset transfer, not yet signed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsignedTransfer {
    pub to: Address,
    pub value: U256,
    pub chain_id: u64,
    pub gas_limit: Option<u64>,
    pub gas_price: Option<U256>,
    pub nonce: Option<u64>,
}

impl UnsignedTransfer {
    pub fn record(&self) -> TransactionRecord {
        TransactionRecord {
            to: checksum_address(&self.to),
            value: self.value.to_string(),
            chain_id: self.chain_id,
            gas_limit: self.gas_limit.map(|g| g.to_string()),
            gas_price: self.gas_price.map(|p| p.to_string()),
            nonce: self.nonce,
        }
    }

    /// Build the typed request for this transfer
    ///
    /// A supplied gas price selects a legacy EIP-155 transaction. Otherwise
    /// an EIP-1559 transaction is built and fees are left to the signer.
    pub fn to_typed_transaction(&self) -> Result<TypedTransaction, WasmEvmError> {
        if let Some(gas_price) = self.gas_price {
            // v = chain_id * 2 + 35 must fit the signature's recovery id
            self.chain_id
                .checked_mul(2)
                .and_then(|v| v.checked_add(35))
                .ok_or_else(|| {
                    WasmEvmError::Encoding(format!(
                        "chain id {} cannot carry EIP-155 replay protection",
                        self.chain_id
                    ))
                })?;

            let mut request = TransactionRequest::new()
                .to(self.to)
                .value(self.value)
                .chain_id(self.chain_id)
                .gas_price(gas_price);
            if let Some(gas) = self.gas_limit {
                request = request.gas(gas);
            }
            if let Some(nonce) = self.nonce {
                request = request.nonce(nonce);
            }
            Ok(TypedTransaction::Legacy(request))
        } else {
            let mut request = Eip1559TransactionRequest::new()
                .to(self.to)
                .value(self.value)
                .chain_id(self.chain_id);
            if let Some(gas) = self.gas_limit {
                request = request.gas(gas);
            }
            if let Some(nonce) = self.nonce {
                request = request.nonce(nonce);
            }
            Ok(TypedTransaction::Eip1559(request))
        }
    }

    /// Canonical unsigned encoding
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, WasmEvmError> {
        Ok(self.to_typed_transaction()?.rlp().to_vec())
    }

    /// Hex-encoded JSON snapshot of [`Self::record`]
    pub fn snapshot_hex(&self) -> Result<String, WasmEvmError> {
        let json = serde_json::to_vec(&self.record())?;
        Ok(format!("0x{}", hex::encode(json)))
    }

    /// Encode canonically, falling back to the snapshot encoding
    pub fn encode(&self) -> Result<EncodedTransaction, WasmEvmError> {
        match self.canonical_bytes() {
            Ok(bytes) => Ok(EncodedTransaction::Canonical(format!(
                "0x{}",
                hex::encode(bytes)
            ))),
            Err(err) => {
                tracing::warn!(
                    chain_id = self.chain_id,
                    error = %err,
                    "canonical encoding failed, using snapshot encoding"
                );
                Ok(EncodedTransaction::Snapshot(self.snapshot_hex()?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::parse_address;

    fn transfer() -> UnsignedTransfer {
        UnsignedTransfer {
            to: parse_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").unwrap(),
            value: U256::exp10(18),
            chain_id: 1,
            gas_limit: None,
            gas_price: None,
            nonce: None,
        }
    }

    #[test]
    fn test_record_omits_absent_fields() {
        let json = serde_json::to_value(transfer().record()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "to": "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
                "value": "1000000000000000000",
                "chainId": 1
            })
        );
    }

    #[test]
    fn test_record_keeps_zero_nonce() {
        let mut tx = transfer();
        tx.nonce = Some(0);
        let json = serde_json::to_value(tx.record()).unwrap();
        assert_eq!(json["nonce"], 0);
    }

    #[test]
    fn test_eip1559_without_gas_price() {
        let encoded = transfer().encode().unwrap();
        assert!(encoded.is_canonical());
        assert!(encoded.data().starts_with("0x02"));
    }

    #[test]
    fn test_legacy_with_gas_price() {
        let mut tx = transfer();
        tx.gas_price = Some(U256::from(1_000_000_000u64));
        tx.gas_limit = Some(21_000);
        let typed = tx.to_typed_transaction().unwrap();
        assert!(matches!(typed, TypedTransaction::Legacy(_)));

        let bytes = tx.canonical_bytes().unwrap();
        // RLP list header, not a type byte
        assert!(bytes[0] >= 0xc0);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        assert_eq!(transfer().encode().unwrap(), transfer().encode().unwrap());
    }

    #[test]
    fn test_snapshot_fallback() {
        let mut tx = transfer();
        tx.chain_id = u64::MAX;
        tx.gas_price = Some(U256::one());

        assert!(matches!(
            tx.canonical_bytes(),
            Err(WasmEvmError::Encoding(_))
        ));

        let encoded = tx.encode().unwrap();
        let EncodedTransaction::Snapshot(data) = &encoded else {
            panic!("Expected snapshot encoding");
        };
        let json = hex::decode(data.strip_prefix("0x").unwrap()).unwrap();
        let record: TransactionRecord = serde_json::from_slice(&json).unwrap();
        assert_eq!(record, tx.record());
    }

    #[test]
    fn test_encoded_transaction_json_shape() {
        let encoded = EncodedTransaction::Canonical("0x02".to_string());
        assert_eq!(
            serde_json::to_value(&encoded).unwrap(),
            serde_json::json!({ "format": "canonical", "data": "0x02" })
        );
    }
}
