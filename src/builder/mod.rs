//! Transfer building
//!
//! Validates a [`TransferRequest`] against a network's constants and produces
//! an unsigned, serialized native-asset transfer. Every failure is returned
//! as a [`TransferFailure`]; nothing here panics or returns `Err`.

pub mod types;

use crate::address::{checksum_address, parse_address};
use crate::error::WasmEvmError;
use crate::network::Network;
use crate::transaction::UnsignedTransfer;
use crate::types::TransferRequest;
use crate::units::DecimalAmount;
use ethers_core::types::U256;
use types::{PreparedTransfer, TransferFailure, TransferOutcome};

/// Base cost of a plain value transfer
// TODO: move to NetworkParams once a supported chain uses a different base cost
pub const MIN_GAS_LIMIT: i64 = 21_000;
/// Upper sanity bound for a caller-supplied gas limit
pub const MAX_GAS_LIMIT: i64 = 10_000_000;

/// Build an unsigned native-asset transfer for `network`
pub fn build_transfer(network: Network, request: &TransferRequest) -> TransferOutcome {
    match prepare(network, request) {
        Ok(prepared) => {
            tracing::debug!(
                chain_id = prepared.chain_id,
                value = %prepared.tx_data.value,
                canonical = prepared.serialized_transaction.is_canonical(),
                "prepared unsigned transfer"
            );
            TransferOutcome::Prepared(prepared)
        }
        Err(err) => {
            tracing::debug!(chain_id = network.chain_id(), error = %err, "transfer rejected");
            TransferOutcome::Failed(TransferFailure::new(network, err))
        }
    }
}

/// Validate `request` and assemble the unsigned transfer
///
/// Checks run in a fixed order and the first failure wins.
pub fn validate(
    network: Network,
    request: &TransferRequest,
) -> Result<UnsignedTransfer, WasmEvmError> {
    let to = parse_address(&request.recipient)
        .map_err(|_| WasmEvmError::InvalidRecipient(request.recipient.clone()))?;
    parse_address(&request.sender)
        .map_err(|_| WasmEvmError::InvalidSender(request.sender.clone()))?;

    let amount = DecimalAmount::parse(&request.amount)?;
    if !amount.is_positive() {
        return Err(WasmEvmError::NonPositiveAmount);
    }
    let value = amount.to_base_units(network.decimals())?;

    let gas_limit = request.gas_limit.map(validate_gas_limit).transpose()?;
    let gas_price = request
        .gas_price
        .as_deref()
        .map(parse_gas_price)
        .transpose()?;
    let nonce = request.nonce.map(validate_nonce).transpose()?;

    Ok(UnsignedTransfer {
        to,
        value,
        chain_id: network.chain_id(),
        gas_limit,
        gas_price,
        nonce,
    })
}

fn prepare(network: Network, request: &TransferRequest) -> Result<PreparedTransfer, WasmEvmError> {
    let transfer = validate(network, request)?;
    let sender = checksum_address(&parse_address(&request.sender)?);
    let serialized_transaction = transfer.encode()?;
    let params = network.params();

    Ok(PreparedTransfer {
        tx_data: transfer.record(),
        serialized_transaction,
        human_message: format!(
            "Unsigned {} transaction prepared for {}. Click to sign with your connected wallet.",
            params.currency, params.chain_name
        ),
        amount: request.amount.clone(),
        recipient: checksum_address(&transfer.to),
        sender,
        gas_limit: transfer.gas_limit,
        gas_price: request.gas_price.clone(),
        nonce: transfer.nonce,
        chain_id: params.chain_id,
        chain_name: params.chain_name.to_string(),
        currency: params.currency.to_string(),
    })
}

fn validate_gas_limit(gas_limit: i64) -> Result<u64, WasmEvmError> {
    if !(MIN_GAS_LIMIT..=MAX_GAS_LIMIT).contains(&gas_limit) {
        return Err(WasmEvmError::GasLimitOutOfRange);
    }
    Ok(gas_limit as u64)
}

/// Parse a gas price given in wei, as decimal or `0x` hex
fn parse_gas_price(raw: &str) -> Result<U256, WasmEvmError> {
    let trimmed = raw.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let value = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) if !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()) => {
            U256::from_str_radix(hex, 16).map_err(|_| WasmEvmError::InvalidGasPriceFormat)?
        }
        Some(_) => return Err(WasmEvmError::InvalidGasPriceFormat),
        None if !unsigned.is_empty() && unsigned.bytes().all(|b| b.is_ascii_digit()) => {
            U256::from_dec_str(unsigned).map_err(|_| WasmEvmError::InvalidGasPriceFormat)?
        }
        None => return Err(WasmEvmError::InvalidGasPriceFormat),
    };

    if negative || value.is_zero() {
        return Err(WasmEvmError::NonPositiveGasPrice);
    }
    Ok(value)
}

fn validate_nonce(nonce: i64) -> Result<u64, WasmEvmError> {
    u64::try_from(nonce).map_err(|_| WasmEvmError::NegativeNonce)
}
