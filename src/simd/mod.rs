// ============================================================================
// SIMD Reduction Module
// Platform-specific SIMD implementations for bulk f64 reduction
//
// Supported architectures:
// - x86_64: AVX2 (256-bit, 4x f64), optionally AVX-512 (512-bit, 8x f64)
// - aarch64: NEON (128-bit, 2x f64)
// - Other: Scalar fallback
// ============================================================================

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(all(target_arch = "x86_64", feature = "avx512"))]
mod avx512;
mod detector;
#[cfg(target_arch = "aarch64")]
mod neon;
mod scalar;
mod traits;

#[cfg(target_arch = "x86_64")]
pub use avx2::Avx2Reducer;
#[cfg(all(target_arch = "x86_64", feature = "avx512"))]
pub use avx512::Avx512Reducer;
pub use detector::{
    create_scalar_reducer, create_simd_reducer, Architecture, CpuCapabilities, SimdLevel,
};
#[cfg(target_arch = "aarch64")]
pub use neon::NeonReducer;
pub use scalar::ScalarReducer;
pub use traits::SimdReducer;
