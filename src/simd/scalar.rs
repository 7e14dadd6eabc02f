// ============================================================================
// Scalar Fallback Implementation
// Plain f64 reduction for platforms without SIMD support
// ============================================================================

use super::traits::SimdReducer;

/// Scalar implementation of f64 reduction.
///
/// Works on every platform. Also serves as the reference implementation
/// the SIMD variants are tested against.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarReducer;

impl ScalarReducer {
    pub fn new() -> Self {
        Self
    }
}

impl SimdReducer for ScalarReducer {
    fn sum(&self, values: &[f64]) -> f64 {
        values.iter().sum()
    }

    fn min_max(&self, values: &[f64]) -> Option<(f64, f64)> {
        values.split_first().map(|(&first, rest)| {
            rest.iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)))
        })
    }

    fn name(&self) -> &'static str {
        "Scalar"
    }
}
