// ============================================================================
// Streaming Summation
// Line-at-a-time accumulation over newline-delimited sources
// ============================================================================

use crate::domain::{SelectedStrategy, SumResult, SumValue};
use crate::numeric::{parse_decimal, NumericResult, SumError};
use rust_decimal::Decimal;
use std::io::BufRead;

/// The token parser used for an entire streaming call.
///
/// Fixed up front: a stream is either accumulated precisely or as floats,
/// never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamParser {
    /// Parse each line as a precise decimal
    Precise,
    /// Parse each line as an f64 (reduced precision, reported under the
    /// vectorized strategy label)
    Float,
}

/// Sum newline-delimited numeric tokens from a sequential source.
///
/// Lines are parsed and accumulated one at a time, so memory stays O(1)
/// regardless of input size. Blank lines are skipped; surrounding
/// whitespace is trimmed from each token.
///
/// # Errors
/// - `InvalidNumber` on the first line that fails parsing (the whole call
///   fails; no partial sum is surfaced)
/// - `Io` when the underlying source fails
/// - `Overflow` when a precise total leaves the decimal range
pub fn stream_sum<R: BufRead>(reader: R, parser: StreamParser) -> NumericResult<SumResult> {
    match parser {
        StreamParser::Precise => stream_precise(reader),
        StreamParser::Float => stream_float(reader),
    }
}

fn stream_precise<R: BufRead>(reader: R) -> NumericResult<SumResult> {
    let mut total = Decimal::ZERO;
    let mut count = 0usize;
    let mut min: Option<Decimal> = None;
    let mut max: Option<Decimal> = None;

    for line in reader.lines() {
        let line = line?;
        let token = line.trim();
        if token.is_empty() {
            continue;
        }

        let value = parse_decimal(token)?;
        total = total.checked_add(value).ok_or(SumError::Overflow)?;
        count += 1;
        min = Some(min.map_or(value, |current| current.min(value)));
        max = Some(max.map_or(value, |current| current.max(value)));
    }

    Ok(SumResult {
        sum: SumValue::Precise(total),
        count,
        min: min.map(SumValue::Precise),
        max: max.map(SumValue::Precise),
        strategy: SelectedStrategy::Precise,
    })
}

fn stream_float<R: BufRead>(reader: R) -> NumericResult<SumResult> {
    let mut total = 0.0f64;
    let mut count = 0usize;
    let mut min: Option<f64> = None;
    let mut max: Option<f64> = None;

    for line in reader.lines() {
        let line = line?;
        let token = line.trim();
        if token.is_empty() {
            continue;
        }

        let value: f64 = token
            .parse()
            .map_err(|_| SumError::InvalidNumber(token.to_string()))?;
        if !value.is_finite() {
            return Err(SumError::InvalidNumber(token.to_string()));
        }

        total += value;
        count += 1;
        min = Some(min.map_or(value, |current| current.min(value)));
        max = Some(max.map_or(value, |current| current.max(value)));
    }

    Ok(SumResult {
        sum: SumValue::Float(total),
        count,
        min: min.map(SumValue::Float),
        max: max.map(SumValue::Float),
        strategy: SelectedStrategy::Vectorized,
    })
}
