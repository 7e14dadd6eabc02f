// ============================================================================
// Numeric Module
// Input parsing and the error taxonomy for summation
// ============================================================================
//
// This module provides:
// - NumericInput: one heterogeneous input value (integer, float, or string)
// - parse_number / parse_decimal: canonical conversion to precise decimals
// - parse_count: validated positive element counts for interactive input
// - SumError: error types shared by every summation operation
//
// Design principles:
// - Floats always convert through their canonical decimal string form,
//   never a binary-to-decimal cast
// - All parsing returns Result (no panics)
// - One unparsable token fails the whole operation

mod errors;
mod parse;

pub use errors::{NumericResult, SumError};
pub use parse::{parse_count, parse_decimal, parse_number, to_f64, NumericInput};
