// ============================================================================
// SIMD Reducer Trait
// Abstract interface for vectorized f64 reduction
// ============================================================================

/// Trait for SIMD-accelerated bulk reduction over f64 slices.
///
/// Implementations provide vectorized sum and extrema computation for the
/// engine's fast path.
///
/// # Thread Safety
/// All implementations must be `Send + Sync` so one reducer instance can be
/// shared by concurrent summation calls.
///
/// # Precision
/// Reduction happens in binary floating point. Results are subject to the
/// usual rounding and cancellation error; lane order may differ between
/// implementations, so two reducers can legitimately disagree in the last
/// few ulps.
pub trait SimdReducer: Send + Sync {
    /// Sum all values in the slice. Returns 0.0 for an empty slice.
    fn sum(&self, values: &[f64]) -> f64;

    /// Compute `(min, max)` over the slice, or `None` when it is empty.
    fn min_max(&self, values: &[f64]) -> Option<(f64, f64)>;

    /// Get the name of this SIMD implementation.
    ///
    /// Used for logging, debugging, and benchmarking.
    fn name(&self) -> &'static str;
}
