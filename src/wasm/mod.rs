//! WASM bindings for wasm-evm
//!
//! This module contains thin wrappers with #[wasm_bindgen] that delegate
//! to the core Rust implementations.

pub mod builder;
pub mod network;
pub mod parser;

pub use builder::BuilderNamespace;
pub use network::NetworkNamespace;
pub use parser::ParserNamespace;

use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Convert to a plain JS object (`None` becomes `null`, maps become objects)
pub(crate) fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
