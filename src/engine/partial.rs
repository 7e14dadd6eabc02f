// ============================================================================
// Partial Summation
// Split-then-combine aggregation for chunked datasets
// ============================================================================

use crate::domain::{SelectedStrategy, SumResult, SumValue};
use crate::numeric::{parse_number, NumericInput, NumericResult, SumError};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A partial sum over one chunk of a larger dataset.
///
/// Combination is associative and commutative, so partials may be computed
/// over disjoint chunks in any order and reduced to the same total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartialSum {
    /// Precise total of the chunk
    pub sum: Decimal,

    /// Number of elements in the chunk
    pub count: usize,
}

impl PartialSum {
    /// The combination identity: zero elements, zero total.
    pub const IDENTITY: Self = Self {
        sum: Decimal::ZERO,
        count: 0,
    };

    /// Combine two partials by adding their sums and counts.
    ///
    /// # Errors
    /// Returns `Overflow` if the combined total leaves the decimal range.
    pub fn combine(self, other: Self) -> NumericResult<Self> {
        Ok(Self {
            sum: self.sum.checked_add(other.sum).ok_or(SumError::Overflow)?,
            count: self.count + other.count,
        })
    }
}

/// Compute the precise partial sum of one chunk.
///
/// # Errors
/// Fails atomically with `InvalidNumber` on the first unparsable element.
pub fn partial_sum(chunk: &[NumericInput]) -> NumericResult<PartialSum> {
    let mut partial = PartialSum::IDENTITY;
    for input in chunk {
        let value = parse_number(input)?;
        partial = partial.combine(PartialSum { sum: value, count: 1 })?;
    }
    Ok(partial)
}

/// Reduce independently computed partials into a final result.
///
/// The reduce of any partition of the same multiset of inputs yields an
/// identical total regardless of chunk boundaries or ordering. Extrema are
/// not tracked across partials, so `min`/`max` are absent.
pub fn reduce<I>(partials: I) -> NumericResult<SumResult>
where
    I: IntoIterator<Item = PartialSum>,
{
    let mut total = PartialSum::IDENTITY;
    for partial in partials {
        total = total.combine(partial)?;
    }

    Ok(SumResult {
        sum: SumValue::Precise(total.sum),
        count: total.count,
        min: None,
        max: None,
        strategy: SelectedStrategy::Precise,
    })
}
