// ============================================================================
// Numeric Input Parsing
// Canonical conversion of heterogeneous inputs into precise decimals
// ============================================================================

use super::errors::{NumericResult, SumError};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One user-supplied numeric value: an integer, a float, or a string token.
///
/// Deserializes untagged, so a JSON array like `[1, 2.5, "4.2"]` maps
/// directly onto a `Vec<NumericInput>`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum NumericInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericInput::Integer(value) => write!(f, "{}", value),
            NumericInput::Float(value) => write!(f, "{}", value),
            NumericInput::Text(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for NumericInput {
    fn from(value: i64) -> Self {
        NumericInput::Integer(value)
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Float(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        NumericInput::Text(value)
    }
}

// ============================================================================
// Precise Conversion
// ============================================================================

/// Parse a string token into a `Decimal`.
///
/// Surrounding whitespace is trimmed. Both plain (`"2.5"`) and scientific
/// (`"2.5e3"`) notation are accepted.
///
/// # Errors
/// Returns `InvalidNumber` with the offending token when the trimmed input
/// is empty or is not a well-formed decimal.
pub fn parse_decimal(token: &str) -> NumericResult<Decimal> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(SumError::InvalidNumber(token.to_string()));
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| SumError::InvalidNumber(trimmed.to_string()))
}

/// Convert a single input into the canonical precise representation.
///
/// Floats are converted through their canonical decimal string form rather
/// than a direct binary-to-decimal cast, so `0.1f64` becomes exactly `0.1`
/// instead of its nearest binary approximation.
///
/// # Errors
/// Returns `InvalidNumber` when the input is empty, non-finite, or not a
/// well-formed number.
pub fn parse_number(input: &NumericInput) -> NumericResult<Decimal> {
    match input {
        NumericInput::Integer(value) => Ok(Decimal::from(*value)),
        NumericInput::Float(value) => {
            if !value.is_finite() {
                return Err(SumError::InvalidNumber(value.to_string()));
            }
            parse_decimal(&value.to_string())
        },
        NumericInput::Text(value) => parse_decimal(value),
    }
}

// ============================================================================
// Float Conversion (vectorized path)
// ============================================================================

/// Convert a single input to a finite f64 for the vectorized path.
///
/// # Errors
/// Returns `InvalidNumber` when a string token fails float parsing or the
/// resulting value is not finite.
pub fn to_f64(input: &NumericInput) -> NumericResult<f64> {
    let value = match input {
        NumericInput::Integer(value) => *value as f64,
        NumericInput::Float(value) => *value,
        NumericInput::Text(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Err(SumError::InvalidNumber(value.clone()));
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| SumError::InvalidNumber(trimmed.to_string()))?
        },
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(SumError::InvalidNumber(input.to_string()))
    }
}

// ============================================================================
// Count Parsing (console path)
// ============================================================================

/// Parse a user-supplied element count and validate it is a positive integer.
///
/// # Errors
/// - `EmptyCount` when the trimmed input is empty
/// - `InvalidCount` when the input is not an integer or is not positive
pub fn parse_count(raw: &str) -> NumericResult<usize> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SumError::EmptyCount);
    }

    let count: i64 = trimmed
        .parse()
        .map_err(|_| SumError::InvalidCount(format!("not an integer: {}", trimmed)))?;

    if count <= 0 {
        return Err(SumError::InvalidCount("count must be positive".to_string()));
    }

    Ok(count as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_plain() {
        assert_eq!(parse_decimal("2.5").unwrap(), Decimal::new(25, 1));
        assert_eq!(parse_decimal("  -3 ").unwrap(), Decimal::from(-3));
    }

    #[test]
    fn test_parse_decimal_scientific() {
        assert_eq!(parse_decimal("2.5e3").unwrap(), Decimal::from(2500));
        assert_eq!(parse_decimal("1E2").unwrap(), Decimal::from(100));
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        assert_eq!(
            parse_decimal("abc"),
            Err(SumError::InvalidNumber("abc".to_string()))
        );
    }

    #[test]
    fn test_parse_decimal_rejects_empty() {
        assert!(matches!(parse_decimal(""), Err(SumError::InvalidNumber(_))));
        assert!(matches!(
            parse_decimal("   "),
            Err(SumError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_parse_number_integer_is_exact() {
        let parsed = parse_number(&NumericInput::Integer(i64::MAX)).unwrap();
        assert_eq!(parsed.to_string(), i64::MAX.to_string());
    }

    #[test]
    fn test_parse_number_float_via_canonical_string() {
        // 0.1 has no exact binary representation; the string route must
        // still yield exactly 0.1
        let parsed = parse_number(&NumericInput::Float(0.1)).unwrap();
        assert_eq!(parsed, Decimal::new(1, 1));
    }

    #[test]
    fn test_parse_number_rejects_non_finite_float() {
        assert!(matches!(
            parse_number(&NumericInput::Float(f64::NAN)),
            Err(SumError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_number(&NumericInput::Float(f64::INFINITY)),
            Err(SumError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_to_f64_accepts_all_variants() {
        assert_eq!(to_f64(&NumericInput::Integer(3)).unwrap(), 3.0);
        assert_eq!(to_f64(&NumericInput::Float(2.5)).unwrap(), 2.5);
        assert_eq!(to_f64(&NumericInput::Text(" 4.2 ".to_string())).unwrap(), 4.2);
    }

    #[test]
    fn test_to_f64_rejects_inf_token() {
        // "inf" parses as f64 but is not a usable numeric value
        assert!(matches!(
            to_f64(&NumericInput::Text("inf".to_string())),
            Err(SumError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_parse_count_valid() {
        assert_eq!(parse_count("3").unwrap(), 3);
        assert_eq!(parse_count("  10 ").unwrap(), 10);
    }

    #[test]
    fn test_parse_count_empty() {
        assert_eq!(parse_count(""), Err(SumError::EmptyCount));
        assert_eq!(parse_count("   "), Err(SumError::EmptyCount));
    }

    #[test]
    fn test_parse_count_negative_and_zero() {
        assert!(matches!(parse_count("-1"), Err(SumError::InvalidCount(_))));
        assert!(matches!(parse_count("0"), Err(SumError::InvalidCount(_))));
    }

    #[test]
    fn test_parse_count_non_integer() {
        assert!(matches!(parse_count("abc"), Err(SumError::InvalidCount(_))));
        assert!(matches!(parse_count("2.5"), Err(SumError::InvalidCount(_))));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_numeric_input_untagged_deserialization() {
        let inputs: Vec<NumericInput> =
            serde_json::from_str(r#"[1, 2.5, "4.2"]"#).unwrap();
        assert_eq!(
            inputs,
            vec![
                NumericInput::Integer(1),
                NumericInput::Float(2.5),
                NumericInput::Text("4.2".to_string()),
            ]
        );
    }
}
