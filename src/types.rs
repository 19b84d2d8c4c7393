//! Shared input types

use serde::{de, Deserialize, Deserializer, Serialize};

/// Native-asset transfer request, as extracted from conversation
///
/// Numeric fields are deliberately wide and signed so that out-of-range
/// values reach validation and get a readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Recipient address (hex, any case)
    pub recipient: String,
    /// Amount in the network's display unit (e.g., ETH)
    #[serde(deserialize_with = "deserialize_decimal")]
    pub amount: String,
    /// Connected wallet address
    pub sender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<i64>,
    /// Gas price in the smallest fee unit (wei), decimal or 0x-hex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<i64>,
}

impl TransferRequest {
    pub fn new(recipient: &str, amount: &str, sender: &str) -> Self {
        TransferRequest {
            recipient: recipient.to_string(),
            amount: amount.to_string(),
            sender: sender.to_string(),
            gas_limit: None,
            gas_price: None,
            nonce: None,
        }
    }

    pub fn with_gas_limit(mut self, gas_limit: i64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    pub fn with_gas_price(mut self, gas_price: &str) -> Self {
        self.gas_price = Some(gas_price.to_string());
        self
    }

    pub fn with_nonce(mut self, nonce: i64) -> Self {
        self.nonce = Some(nonce);
        self
    }
}

/// Deserialize a decimal amount from either a number or a string
///
/// Floats are rendered with `Display`, which never uses exponent notation.
fn deserialize_decimal<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct DecimalVisitor;

    impl<'de> de::Visitor<'de> for DecimalVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a decimal amount as number or string")
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> Result<String, E>
        where
            E: de::Error,
        {
            if value.is_finite() {
                Ok(value.to_string())
            } else {
                Err(E::custom("amount must be finite"))
            }
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(DecimalVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_numeric_amount() {
        let json = r#"{
            "recipient": "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "amount": 0.05,
            "sender": "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"
        }"#;

        let request: TransferRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.amount, "0.05");
        assert_eq!(request.gas_limit, None);
        assert_eq!(request.nonce, None);
    }

    #[test]
    fn test_deserialize_small_float_without_exponent() {
        let json = r#"{ "recipient": "a", "amount": 1e-7, "sender": "b" }"#;
        let request: TransferRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.amount, "0.0000001");
    }

    #[test]
    fn test_deserialize_optional_fields() {
        let json = r#"{
            "recipient": "a",
            "amount": "2",
            "sender": "b",
            "gasLimit": 21000,
            "gasPrice": "1000000000",
            "nonce": 0
        }"#;

        let request: TransferRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.amount, "2");
        assert_eq!(request.gas_limit, Some(21000));
        assert_eq!(request.gas_price.as_deref(), Some("1000000000"));
        assert_eq!(request.nonce, Some(0));
    }

    #[test]
    fn test_negative_values_survive_deserialization() {
        let json = r#"{ "recipient": "a", "amount": -1, "sender": "b", "nonce": -3 }"#;
        let request: TransferRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.amount, "-1");
        assert_eq!(request.nonce, Some(-3));
    }

    #[test]
    fn test_missing_required_field() {
        let json = r#"{ "recipient": "a", "sender": "b" }"#;
        assert!(serde_json::from_str::<TransferRequest>(json).is_err());
    }
}
