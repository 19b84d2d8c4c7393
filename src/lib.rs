//! wasm-evm: WASM module for EVM native-asset transfer building
//!
//! This crate provides:
//! - Validation of chat-extracted transfer requests per network
//! - Unsigned transaction building (legacy EIP-155 or EIP-1559)
//! - Transaction parsing (decode what is about to be signed)
//! - LLM tool definitions, one per supported network
//!
//! Nothing here holds keys, signs, or talks to a node.
//!
//! # Architecture
//!
//! The crate follows a two-layer architecture:
//! - **Core layer** (`src/*.rs`): Pure Rust logic, no WASM dependencies
//! - **WASM layer** (`src/wasm/*.rs`): Thin wrappers with `#[wasm_bindgen]`
//!
//! # Usage from Rust
//!
//! ```rust
//! use wasm_evm::{build_transfer, Network, TransferRequest};
//!
//! let request = TransferRequest::new(
//!     "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
//!     "1",
//!     "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
//! );
//! let outcome = build_transfer(Network::EthereumMainnet, &request);
//! assert_eq!(
//!     outcome.prepared().map(|p| p.tx_data.value.as_str()),
//!     Some("1000000000000000000")
//! );
//! ```

pub mod address;
pub mod builder;
pub mod error;
pub mod network;
pub mod parser;
pub mod tools;
pub mod transaction;
pub mod types;
pub mod units;
pub mod wasm;

// Re-export main types for convenience
pub use address::{checksum_address, normalize_address, parse_address, validate_address};
pub use builder::build_transfer;
pub use builder::types::{PreparedTransfer, TransferFailure, TransferOutcome};
pub use error::WasmEvmError;
pub use network::{Network, NetworkParams};
pub use parser::{parse_transaction, ParsedTransaction};
pub use transaction::{EncodedTransaction, TransactionRecord, UnsignedTransfer};
pub use types::TransferRequest;

// Re-export WASM types
pub use wasm::{BuilderNamespace, NetworkNamespace, ParserNamespace};
