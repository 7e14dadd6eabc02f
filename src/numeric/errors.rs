// ============================================================================
// Summation Errors
// Error taxonomy for parsing and accumulation operations
// ============================================================================

use std::fmt;
use std::io;

/// Errors that can occur while parsing inputs or computing a sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SumError {
    /// The requested element count was empty
    EmptyCount,
    /// The requested element count is not a positive integer
    InvalidCount(String),
    /// A token is empty or fails numeric parsing; carries the offending token
    InvalidNumber(String),
    /// The vectorized strategy was requested but SIMD reduction is unavailable
    StrategyUnavailable,
    /// Accumulation exceeded the representable decimal range
    Overflow,
    /// The input source failed while streaming
    Io(String),
    /// Anything else
    Unexpected(String),
}

impl fmt::Display for SumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SumError::EmptyCount => write!(f, "count required"),
            SumError::InvalidCount(reason) => write!(f, "invalid count: {}", reason),
            SumError::InvalidNumber(token) => {
                write!(f, "invalid numeric value: {}", token)
            },
            SumError::StrategyUnavailable => write!(
                f,
                "vectorized strategy unavailable: SIMD reduction support is not enabled"
            ),
            SumError::Overflow => {
                write!(f, "arithmetic overflow: sum exceeded the decimal range")
            },
            SumError::Io(detail) => write!(f, "i/o error: {}", detail),
            SumError::Unexpected(detail) => write!(f, "unexpected error: {}", detail),
        }
    }
}

impl std::error::Error for SumError {}

impl From<io::Error> for SumError {
    fn from(err: io::Error) -> Self {
        SumError::Io(err.to_string())
    }
}

/// Result type alias for summation operations
pub type NumericResult<T> = Result<T, SumError>;
