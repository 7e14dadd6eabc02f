// ============================================================================
// Summation Result Domain Model
// ============================================================================

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize, Serializer};

// ============================================================================
// Value Objects
// ============================================================================

/// Per-call correlation identifier used to link logs to a specific
/// external call.
///
/// Generated identifiers take the form `req-<uuid>`; identifiers supplied
/// by callers (e.g. an `X-Request-ID` header) are carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RequestId(String);

impl RequestId {
    pub fn new() -> Self {
        Self(format!("req-{}", Uuid::new_v4().simple()))
    }

    pub fn from_string(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The strategy that actually produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SelectedStrategy {
    /// Arbitrary-precision decimal accumulation
    Precise,
    /// SIMD f64 reduction
    Vectorized,
}

impl fmt::Display for SelectedStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectedStrategy::Precise => write!(f, "precise"),
            SelectedStrategy::Vectorized => write!(f, "vectorized"),
        }
    }
}

// ============================================================================
// Sum Value
// ============================================================================

/// A computed value in whichever representation the strategy produced.
///
/// Precise values serialize as JSON strings (decimals survive the wire
/// exactly); float values serialize as JSON numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SumValue {
    Precise(Decimal),
    Float(f64),
}

impl SumValue {
    /// The value as an f64, with the usual precision loss for decimals
    /// outside the binary-representable range.
    pub fn to_f64(&self) -> f64 {
        match self {
            SumValue::Precise(value) => value.to_f64().unwrap_or(f64::NAN),
            SumValue::Float(value) => *value,
        }
    }

    /// The precise decimal, if this value came from the precise strategy.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            SumValue::Precise(value) => Some(*value),
            SumValue::Float(_) => None,
        }
    }
}

impl fmt::Display for SumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SumValue::Precise(value) => write!(f, "{}", value),
            SumValue::Float(value) => write!(f, "{}", value),
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for SumValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            SumValue::Precise(value) => serializer.serialize_str(&value.to_string()),
            SumValue::Float(value) => serializer.serialize_f64(*value),
        }
    }
}

// ============================================================================
// Sum Result
// ============================================================================

/// The structured outcome of one summation call.
///
/// Computed fresh per invocation and never mutated after construction.
/// `count` equals the number of successfully parsed inputs; `min`/`max`
/// are the exact extrema of the parsed set and are absent when the input
/// was empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SumResult {
    /// Total of all parsed inputs
    pub sum: SumValue,

    /// Number of successfully parsed inputs
    pub count: usize,

    /// Smallest parsed value, absent for empty input
    pub min: Option<SumValue>,

    /// Largest parsed value, absent for empty input
    pub max: Option<SumValue>,

    /// The strategy that produced this result
    pub strategy: SelectedStrategy,
}

impl SumResult {
    /// An empty precise result: count 0, sum 0, no extrema.
    pub fn empty_precise() -> Self {
        Self {
            sum: SumValue::Precise(Decimal::ZERO),
            count: 0,
            min: None,
            max: None,
            strategy: SelectedStrategy::Precise,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_request_id_format() {
        let id = RequestId::new();
        assert!(id.as_str().starts_with("req-"));
        // uuid simple form: 32 hex chars
        assert_eq!(id.as_str().len(), "req-".len() + 32);
    }

    #[test]
    fn test_request_ids_are_unique() {
        assert_ne!(RequestId::new(), RequestId::new());
    }

    #[test]
    fn test_caller_supplied_request_id_passes_through() {
        let id = RequestId::from_string("trace-42".to_string());
        assert_eq!(id.to_string(), "trace-42");
    }

    #[test]
    fn test_sum_value_display() {
        assert_eq!(SumValue::Precise(Decimal::new(105, 1)).to_string(), "10.5");
        assert_eq!(SumValue::Float(10.5).to_string(), "10.5");
    }

    #[test]
    fn test_sum_value_to_f64() {
        assert_eq!(SumValue::Precise(Decimal::new(65, 1)).to_f64(), 6.5);
        assert_eq!(SumValue::Float(6.5).to_f64(), 6.5);
    }

    #[test]
    fn test_empty_precise_result() {
        let result = SumResult::empty_precise();
        assert_eq!(result.count, 0);
        assert_eq!(result.sum, SumValue::Precise(Decimal::ZERO));
        assert!(result.min.is_none());
        assert!(result.max.is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_sum_value_serialization() {
        let precise = serde_json::to_string(&SumValue::Precise(Decimal::new(107, 1))).unwrap();
        assert_eq!(precise, "\"10.7\"");

        let float = serde_json::to_string(&SumValue::Float(10.7)).unwrap();
        assert_eq!(float, "10.7");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_selected_strategy_serialization() {
        assert_eq!(
            serde_json::to_string(&SelectedStrategy::Precise).unwrap(),
            "\"precise\""
        );
    }
}
