// ============================================================================
// x86_64 AVX-512 Implementation
// SIMD reduction using AVX-512 instructions (512-bit, 8x f64)
// ============================================================================

use super::traits::SimdReducer;

/// AVX-512 implementation of f64 reduction.
///
/// Uses 512-bit registers to process 8 f64 values per iteration.
/// Requires runtime detection of AVX-512F support.
#[derive(Debug, Clone, Copy, Default)]
pub struct Avx512Reducer;

impl Avx512Reducer {
    /// Create a new AVX-512 reducer.
    ///
    /// # Panics
    /// Panics if AVX-512F is not available on this CPU.
    /// Use `is_available()` to check before creating.
    pub fn new() -> Self {
        assert!(
            Self::is_available(),
            "AVX-512F is not available on this CPU"
        );
        Self
    }

    /// Check if AVX-512F is available on this CPU.
    #[inline]
    pub fn is_available() -> bool {
        is_x86_feature_detected!("avx512f")
    }
}

impl SimdReducer for Avx512Reducer {
    fn sum(&self, values: &[f64]) -> f64 {
        // Safety: We checked AVX-512F availability in new()
        unsafe { avx512_sum(values) }
    }

    fn min_max(&self, values: &[f64]) -> Option<(f64, f64)> {
        if values.is_empty() {
            return None;
        }
        Some(unsafe { avx512_min_max(values) })
    }

    fn name(&self) -> &'static str {
        "AVX-512"
    }
}

/// AVX-512-accelerated sum over a slice of f64.
///
/// # Safety
/// Caller must ensure AVX-512F is available.
#[target_feature(enable = "avx512f")]
unsafe fn avx512_sum(values: &[f64]) -> f64 {
    use std::arch::x86_64::*;

    let chunks = values.chunks_exact(8);
    let remainder = chunks.remainder();

    let mut acc = _mm512_setzero_pd();
    for chunk in chunks {
        let v = _mm512_loadu_pd(chunk.as_ptr());
        acc = _mm512_add_pd(acc, v);
    }

    // Horizontal add of the 8 accumulator lanes
    let mut lanes = [0.0f64; 8];
    _mm512_storeu_pd(lanes.as_mut_ptr(), acc);
    let mut total = lanes.iter().sum::<f64>();

    // Handle remainder with scalar code
    for &value in remainder {
        total += value;
    }

    total
}

/// AVX-512-accelerated min/max over a slice of f64.
///
/// # Safety
/// Caller must ensure AVX-512F is available and the slice is non-empty.
#[target_feature(enable = "avx512f")]
unsafe fn avx512_min_max(values: &[f64]) -> (f64, f64) {
    use std::arch::x86_64::*;

    let chunks = values.chunks_exact(8);
    let remainder = chunks.remainder();

    let mut min_acc = _mm512_set1_pd(f64::INFINITY);
    let mut max_acc = _mm512_set1_pd(f64::NEG_INFINITY);
    for chunk in chunks {
        let v = _mm512_loadu_pd(chunk.as_ptr());
        min_acc = _mm512_min_pd(min_acc, v);
        max_acc = _mm512_max_pd(max_acc, v);
    }

    let mut min_lanes = [0.0f64; 8];
    let mut max_lanes = [0.0f64; 8];
    _mm512_storeu_pd(min_lanes.as_mut_ptr(), min_acc);
    _mm512_storeu_pd(max_lanes.as_mut_ptr(), max_acc);

    let mut lo = min_lanes.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = max_lanes.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // Handle remainder
    for &value in remainder {
        lo = lo.min(value);
        hi = hi.max(value);
    }

    (lo, hi)
}
