//! Exact conversion between display units and smallest units
//!
//! Amounts are kept as decimal text end to end; no floating point is
//! involved once the value has been received.

use crate::error::WasmEvmError;
use ethers_core::types::U256;

/// A signed decimal number as written by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalAmount {
    raw: String,
    negative: bool,
    integer: String,
    fraction: String,
}

impl DecimalAmount {
    /// Parse decimal text such as `"1"`, `"0.05"` or `"-3"`
    ///
    /// Exponent notation, separators and non-ASCII digits are rejected.
    pub fn parse(raw: &str) -> Result<Self, WasmEvmError> {
        let invalid = || WasmEvmError::InvalidAmount(raw.to_string());

        let trimmed = raw.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (integer, fraction) = match unsigned.split_once('.') {
            Some((i, f)) => (i, f),
            None => (unsigned, ""),
        };

        if integer.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(integer) || !all_digits(fraction) {
            return Err(invalid());
        }

        Ok(DecimalAmount {
            raw: raw.to_string(),
            negative,
            integer: integer.to_string(),
            fraction: fraction.to_string(),
        })
    }

    /// The text this amount was parsed from
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_zero(&self) -> bool {
        self.integer.bytes().chain(self.fraction.bytes()).all(|b| b == b'0')
    }

    /// True for amounts strictly greater than zero
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    /// Scale to the smallest unit for a currency with `decimals` places
    ///
    /// Fails if the amount is negative, needs more fractional digits than
    /// the unit allows, or does not fit in 256 bits.
    pub fn to_base_units(&self, decimals: u32) -> Result<U256, WasmEvmError> {
        if self.negative && !self.is_zero() {
            return Err(WasmEvmError::NonPositiveAmount);
        }

        let fraction = self.fraction.trim_end_matches('0');
        if fraction.len() > decimals as usize {
            return Err(WasmEvmError::AmountPrecision {
                amount: self.raw.clone(),
                decimals,
            });
        }

        let mut digits = String::with_capacity(self.integer.len() + decimals as usize);
        digits.push_str(&self.integer);
        digits.push_str(fraction);
        digits.extend(std::iter::repeat('0').take(decimals as usize - fraction.len()));

        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return Ok(U256::zero());
        }
        U256::from_dec_str(digits).map_err(|_| WasmEvmError::InvalidAmount(self.raw.clone()))
    }
}

/// Convert display-unit text to smallest units
pub fn parse_units(amount: &str, decimals: u32) -> Result<U256, WasmEvmError> {
    DecimalAmount::parse(amount)?.to_base_units(decimals)
}

/// Render a smallest-unit value in display units, without trailing zeros
pub fn format_units(value: U256, decimals: u32) -> String {
    let digits = value.to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits;
    }

    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals - digits.len() + 1), digits)
    } else {
        digits
    };
    let (integer, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{}.{}", integer, fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", 18, "1000000000000000000")]
    #[case("0.5", 18, "500000000000000000")]
    #[case("1.000000000000000001", 18, "1000000000000000001")]
    #[case("0.000000000000000001", 18, "1")]
    #[case("123.4500", 18, "123450000000000000000")]
    #[case(".25", 2, "25")]
    #[case("7.", 0, "7")]
    #[case("0", 18, "0")]
    fn test_parse_units(#[case] amount: &str, #[case] decimals: u32, #[case] expected: &str) {
        assert_eq!(parse_units(amount, decimals).unwrap().to_string(), expected);
    }

    #[test]
    fn test_excess_precision_rejected() {
        let err = parse_units("0.0000000000000000001", 18).unwrap_err();
        assert_eq!(
            err,
            WasmEvmError::AmountPrecision {
                amount: "0.0000000000000000001".to_string(),
                decimals: 18
            }
        );
    }

    #[test]
    fn test_trailing_zeros_do_not_count_as_precision() {
        assert!(parse_units("1.5000000000000000000000", 18).is_ok());
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case(".")]
    #[case("1e18")]
    #[case("1,000")]
    #[case("--1")]
    #[case("1.2.3")]
    fn test_malformed(#[case] amount: &str) {
        assert!(matches!(
            DecimalAmount::parse(amount),
            Err(WasmEvmError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_sign() {
        assert!(DecimalAmount::parse("1").unwrap().is_positive());
        assert!(!DecimalAmount::parse("0.000").unwrap().is_positive());
        assert!(!DecimalAmount::parse("-0.1").unwrap().is_positive());
        assert!(DecimalAmount::parse("-0").unwrap().is_zero());
    }

    #[test]
    fn test_overflow() {
        let huge = "9".repeat(80);
        assert!(matches!(
            parse_units(&huge, 18),
            Err(WasmEvmError::InvalidAmount(_))
        ));
    }

    #[rstest]
    #[case("1000000000000000000", 18, "1")]
    #[case("1500000000000000000", 18, "1.5")]
    #[case("1", 18, "0.000000000000000001")]
    #[case("0", 18, "0")]
    #[case("42", 0, "42")]
    fn test_format_units(#[case] value: &str, #[case] decimals: u32, #[case] expected: &str) {
        let value = U256::from_dec_str(value).unwrap();
        assert_eq!(format_units(value, decimals), expected);
    }
}
