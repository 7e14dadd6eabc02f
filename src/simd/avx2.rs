// ============================================================================
// x86_64 AVX2 Implementation
// SIMD reduction using AVX2 instructions (256-bit, 4x f64)
// ============================================================================

use super::traits::SimdReducer;

/// AVX2 implementation of f64 reduction.
///
/// Uses 256-bit AVX2 registers to process 4 f64 values per iteration.
/// Requires runtime detection of AVX2 support.
#[derive(Debug, Clone, Copy, Default)]
pub struct Avx2Reducer;

impl Avx2Reducer {
    /// Create a new AVX2 reducer.
    ///
    /// # Panics
    /// Panics if AVX2 is not available on this CPU.
    /// Use `is_available()` to check before creating.
    pub fn new() -> Self {
        assert!(Self::is_available(), "AVX2 is not available on this CPU");
        Self
    }

    /// Check if AVX2 is available on this CPU.
    #[inline]
    pub fn is_available() -> bool {
        is_x86_feature_detected!("avx2")
    }
}

impl SimdReducer for Avx2Reducer {
    fn sum(&self, values: &[f64]) -> f64 {
        // Safety: We checked AVX2 availability in new()
        unsafe { avx2_sum(values) }
    }

    fn min_max(&self, values: &[f64]) -> Option<(f64, f64)> {
        if values.is_empty() {
            return None;
        }
        Some(unsafe { avx2_min_max(values) })
    }

    fn name(&self) -> &'static str {
        "AVX2"
    }
}

/// AVX2-accelerated sum over a slice of f64.
///
/// Accumulates 4 independent lanes, then adds the lanes together and folds
/// in the remainder with scalar code.
///
/// # Safety
/// Caller must ensure AVX2 is available.
#[target_feature(enable = "avx2")]
unsafe fn avx2_sum(values: &[f64]) -> f64 {
    use std::arch::x86_64::*;

    let chunks = values.chunks_exact(4);
    let remainder = chunks.remainder();

    let mut acc = _mm256_setzero_pd();
    for chunk in chunks {
        // Load 4 values and accumulate lane-wise
        let v = _mm256_loadu_pd(chunk.as_ptr());
        acc = _mm256_add_pd(acc, v);
    }

    // Horizontal add of the 4 accumulator lanes
    let mut lanes = [0.0f64; 4];
    _mm256_storeu_pd(lanes.as_mut_ptr(), acc);
    let mut total = (lanes[0] + lanes[1]) + (lanes[2] + lanes[3]);

    // Handle remainder with scalar code
    for &value in remainder {
        total += value;
    }

    total
}

/// AVX2-accelerated min/max over a slice of f64.
///
/// # Safety
/// Caller must ensure AVX2 is available and the slice is non-empty.
#[target_feature(enable = "avx2")]
unsafe fn avx2_min_max(values: &[f64]) -> (f64, f64) {
    use std::arch::x86_64::*;

    let chunks = values.chunks_exact(4);
    let remainder = chunks.remainder();

    let mut min_acc = _mm256_set1_pd(f64::INFINITY);
    let mut max_acc = _mm256_set1_pd(f64::NEG_INFINITY);
    for chunk in chunks {
        let v = _mm256_loadu_pd(chunk.as_ptr());
        min_acc = _mm256_min_pd(min_acc, v);
        max_acc = _mm256_max_pd(max_acc, v);
    }

    let mut min_lanes = [0.0f64; 4];
    let mut max_lanes = [0.0f64; 4];
    _mm256_storeu_pd(min_lanes.as_mut_ptr(), min_acc);
    _mm256_storeu_pd(max_lanes.as_mut_ptr(), max_acc);

    let mut lo = min_lanes.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = max_lanes.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // Handle remainder
    for &value in remainder {
        lo = lo.min(value);
        hi = hi.max(value);
    }

    (lo, hi)
}
