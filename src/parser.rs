//! Transaction parsing
//!
//! Decodes an [`EncodedTransaction`] back into its fields so callers can
//! show the user exactly what they are about to sign.

use crate::address::checksum_address;
use crate::error::WasmEvmError;
use crate::network::Network;
use crate::transaction::{EncodedTransaction, TransactionRecord};
use crate::units::format_units;
use ethers_core::types::{Address, U256};
use ethers_core::utils::rlp::Rlp;
use serde::Serialize;

/// EIP-2718 type byte for EIP-1559 transactions
const EIP1559_TX_TYPE: u8 = 0x02;
/// Field count of an unsigned EIP-155 legacy transaction
const LEGACY_FIELD_COUNT: usize = 9;
/// Field count of an unsigned EIP-1559 transaction
const EIP1559_FIELD_COUNT: usize = 9;

/// Kind of encoding a transaction was decoded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TxType {
    Legacy,
    Eip1559,
    Snapshot,
}

/// Parsed transaction data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTransaction {
    #[serde(rename = "type")]
    pub tx_type: TxType,
    /// Recipient (EIP-55)
    pub to: String,
    /// Value in the smallest unit
    pub value: String,
    pub chain_id: u64,
    /// Value in display units, if the chain is a supported network
    pub amount: Option<String>,
    pub currency: Option<String>,
    pub gas_limit: Option<String>,
    pub gas_price: Option<String>,
    pub nonce: Option<u64>,
}

/// Parse a serialized transaction of either encoding
pub fn parse_transaction(encoded: &EncodedTransaction) -> Result<ParsedTransaction, WasmEvmError> {
    let bytes = decode_hex(encoded.data())?;
    match encoded {
        EncodedTransaction::Canonical(_) => parse_canonical(&bytes),
        EncodedTransaction::Snapshot(_) => parse_snapshot(&bytes),
    }
}

/// Parse unsigned RLP bytes (legacy EIP-155 or EIP-1559)
///
/// RLP has no way to tell a zero from an absent field, so zero nonce and
/// gas values come back as `None`.
pub fn parse_canonical(bytes: &[u8]) -> Result<ParsedTransaction, WasmEvmError> {
    match bytes.first() {
        None => Err(WasmEvmError::InvalidTransaction(
            "Empty transaction".to_string(),
        )),
        Some(&EIP1559_TX_TYPE) => parse_eip1559(&bytes[1..]),
        Some(&b) if b >= 0xc0 => parse_legacy(bytes),
        Some(&b) => Err(WasmEvmError::InvalidTransaction(format!(
            "Unsupported transaction type: 0x{:02x}",
            b
        ))),
    }
}

/// Parse the hex-decoded JSON snapshot encoding
pub fn parse_snapshot(bytes: &[u8]) -> Result<ParsedTransaction, WasmEvmError> {
    let record: TransactionRecord = serde_json::from_slice(bytes)?;
    let to = crate::address::normalize_address(&record.to)?;
    let value = U256::from_dec_str(&record.value)
        .map_err(|_| WasmEvmError::InvalidTransaction(format!("Invalid value: {}", record.value)))?;

    Ok(build_parsed(
        TxType::Snapshot,
        to,
        value,
        record.chain_id,
        record.gas_limit,
        record.gas_price,
        record.nonce,
    ))
}

fn parse_legacy(bytes: &[u8]) -> Result<ParsedTransaction, WasmEvmError> {
    let rlp = open_list(bytes, LEGACY_FIELD_COUNT)?;

    // Unsigned EIP-155 carries (chain_id, 0, 0) where a signature would be
    let r: U256 = rlp.val_at(7)?;
    let s: U256 = rlp.val_at(8)?;
    if !r.is_zero() || !s.is_zero() {
        return Err(WasmEvmError::InvalidTransaction(
            "Expected an unsigned transaction".to_string(),
        ));
    }

    let nonce: U256 = rlp.val_at(0)?;
    let gas_price: U256 = rlp.val_at(1)?;
    let gas: U256 = rlp.val_at(2)?;
    let to = recipient_at(&rlp, 3)?;
    let value: U256 = rlp.val_at(4)?;
    let chain_id = to_u64(rlp.val_at(6)?, "chain id")?;

    Ok(build_parsed(
        TxType::Legacy,
        to,
        value,
        chain_id,
        non_zero(gas),
        non_zero(gas_price),
        optional_u64(nonce, "nonce")?,
    ))
}

fn parse_eip1559(bytes: &[u8]) -> Result<ParsedTransaction, WasmEvmError> {
    let rlp = open_list(bytes, EIP1559_FIELD_COUNT)?;

    let chain_id = to_u64(rlp.val_at(0)?, "chain id")?;
    let nonce: U256 = rlp.val_at(1)?;
    let gas: U256 = rlp.val_at(4)?;
    let to = recipient_at(&rlp, 5)?;
    let value: U256 = rlp.val_at(6)?;

    Ok(build_parsed(
        TxType::Eip1559,
        to,
        value,
        chain_id,
        non_zero(gas),
        None,
        optional_u64(nonce, "nonce")?,
    ))
}

/// Open an RLP list that must span all of `bytes` with exactly `fields` items
fn open_list(bytes: &[u8], fields: usize) -> Result<Rlp<'_>, WasmEvmError> {
    let rlp = Rlp::new(bytes);
    if !rlp.is_list() {
        return Err(WasmEvmError::InvalidTransaction(
            "Expected an RLP list".to_string(),
        ));
    }
    let info = rlp.payload_info()?;
    if info.header_len + info.value_len != bytes.len() {
        return Err(WasmEvmError::InvalidTransaction(
            "Trailing bytes after transaction".to_string(),
        ));
    }
    let count = rlp.item_count()?;
    if count != fields {
        return Err(WasmEvmError::InvalidTransaction(format!(
            "Expected {} fields, got {} (signed transactions are not supported)",
            fields, count
        )));
    }
    Ok(rlp)
}

fn recipient_at(rlp: &Rlp<'_>, index: usize) -> Result<String, WasmEvmError> {
    if rlp.at(index)?.is_empty() {
        return Err(WasmEvmError::InvalidTransaction(
            "Contract creation is not a transfer".to_string(),
        ));
    }
    let to: Address = rlp.val_at(index)?;
    Ok(checksum_address(&to))
}

fn build_parsed(
    tx_type: TxType,
    to: String,
    value: U256,
    chain_id: u64,
    gas_limit: Option<String>,
    gas_price: Option<String>,
    nonce: Option<u64>,
) -> ParsedTransaction {
    let network = Network::from_chain_id(chain_id).ok();
    ParsedTransaction {
        tx_type,
        to,
        value: value.to_string(),
        chain_id,
        amount: network.map(|n| format_units(value, n.decimals())),
        currency: network.map(|n| n.currency().to_string()),
        gas_limit,
        gas_price,
        nonce,
    }
}

fn decode_hex(data: &str) -> Result<Vec<u8>, WasmEvmError> {
    let data = data.strip_prefix("0x").unwrap_or(data);
    Ok(hex::decode(data)?)
}

fn non_zero(value: U256) -> Option<String> {
    (!value.is_zero()).then(|| value.to_string())
}

fn to_u64(value: U256, field: &str) -> Result<u64, WasmEvmError> {
    if value > U256::from(u64::MAX) {
        return Err(WasmEvmError::InvalidTransaction(format!(
            "{} does not fit in 64 bits",
            field
        )));
    }
    Ok(value.low_u64())
}

fn optional_u64(value: U256, field: &str) -> Result<Option<u64>, WasmEvmError> {
    if value.is_zero() {
        return Ok(None);
    }
    to_u64(value, field).map(Some)
}
