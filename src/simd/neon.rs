// ============================================================================
// aarch64 NEON Implementation
// SIMD reduction using NEON instructions (128-bit, 2x f64)
// ============================================================================

use super::traits::SimdReducer;

/// NEON implementation of f64 reduction.
///
/// Uses 128-bit NEON registers to process 2 f64 values per iteration.
/// NEON is always available on aarch64 (including Apple Silicon).
#[derive(Debug, Clone, Copy, Default)]
pub struct NeonReducer;

impl NeonReducer {
    pub fn new() -> Self {
        Self
    }
}

impl SimdReducer for NeonReducer {
    fn sum(&self, values: &[f64]) -> f64 {
        // Safety: NEON is always available on aarch64
        unsafe { neon_sum(values) }
    }

    fn min_max(&self, values: &[f64]) -> Option<(f64, f64)> {
        if values.is_empty() {
            return None;
        }
        Some(unsafe { neon_min_max(values) })
    }

    fn name(&self) -> &'static str {
        "NEON"
    }
}

/// NEON-accelerated sum over a slice of f64.
///
/// # Safety
/// This function uses NEON intrinsics which are always available on aarch64.
#[inline]
unsafe fn neon_sum(values: &[f64]) -> f64 {
    use std::arch::aarch64::*;

    let chunks = values.chunks_exact(2);
    let remainder = chunks.remainder();

    // Accumulate both lanes of a 128-bit register
    let mut acc = vdupq_n_f64(0.0);
    for chunk in chunks {
        let v = vld1q_f64(chunk.as_ptr());
        acc = vaddq_f64(acc, v);
    }

    let mut total = vgetq_lane_f64(acc, 0) + vgetq_lane_f64(acc, 1);

    // Handle remainder with scalar code
    for &value in remainder {
        total += value;
    }

    total
}

/// NEON-accelerated min/max over a slice of f64.
///
/// # Safety
/// NEON intrinsics are always available on aarch64. The slice must be
/// non-empty.
#[inline]
unsafe fn neon_min_max(values: &[f64]) -> (f64, f64) {
    use std::arch::aarch64::*;

    let chunks = values.chunks_exact(2);
    let remainder = chunks.remainder();

    let mut min_acc = vdupq_n_f64(f64::INFINITY);
    let mut max_acc = vdupq_n_f64(f64::NEG_INFINITY);
    for chunk in chunks {
        let v = vld1q_f64(chunk.as_ptr());
        min_acc = vminq_f64(min_acc, v);
        max_acc = vmaxq_f64(max_acc, v);
    }

    let mut lo = vgetq_lane_f64(min_acc, 0).min(vgetq_lane_f64(min_acc, 1));
    let mut hi = vgetq_lane_f64(max_acc, 0).max(vgetq_lane_f64(max_acc, 1));

    // Handle remainder
    for &value in remainder {
        lo = lo.min(value);
        hi = hi.max(value);
    }

    (lo, hi)
}
