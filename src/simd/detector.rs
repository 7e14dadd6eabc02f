// ============================================================================
// CPU Detection and SIMD Reducer Factory
// Runtime detection of CPU capabilities and optimal reducer selection
// ============================================================================

use super::scalar::ScalarReducer;
use super::traits::SimdReducer;
use std::sync::Arc;

/// CPU architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Architecture {
    /// x86_64 (Intel/AMD 64-bit)
    X86_64,
    /// aarch64 (ARM 64-bit, including Apple Silicon)
    Aarch64,
    /// Unknown or unsupported architecture
    Other,
}

impl Architecture {
    /// Detect the current CPU architecture.
    #[inline]
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            Architecture::X86_64
        }
        #[cfg(target_arch = "aarch64")]
        {
            Architecture::Aarch64
        }
        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            Architecture::Other
        }
    }
}

impl std::fmt::Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Architecture::X86_64 => write!(f, "x86_64"),
            Architecture::Aarch64 => write!(f, "aarch64"),
            Architecture::Other => write!(f, "other"),
        }
    }
}

/// SIMD capability level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SimdLevel {
    /// No SIMD, scalar reduction only
    None,
    /// ARM NEON (128-bit, 2x f64)
    Neon,
    /// x86 AVX2 (256-bit, 4x f64)
    Avx2,
    /// x86 AVX-512 (512-bit, 8x f64)
    Avx512,
}

impl SimdLevel {
    /// Detect the highest available SIMD level for the current CPU.
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            // AVX-512 reduction is opt-in via the avx512 feature
            #[cfg(feature = "avx512")]
            if is_x86_feature_detected!("avx512f") {
                return SimdLevel::Avx512;
            }
            if is_x86_feature_detected!("avx2") {
                return SimdLevel::Avx2;
            }
            return SimdLevel::None;
        }

        #[cfg(target_arch = "aarch64")]
        {
            // NEON is always available on aarch64
            SimdLevel::Neon
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            SimdLevel::None
        }
    }

    /// Number of f64 lanes processed per register at this level.
    pub const fn lanes(self) -> usize {
        match self {
            SimdLevel::None => 1,
            SimdLevel::Neon => 2,
            SimdLevel::Avx2 => 4,
            SimdLevel::Avx512 => 8,
        }
    }
}

impl std::fmt::Display for SimdLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimdLevel::None => write!(f, "None (Scalar)"),
            SimdLevel::Neon => write!(f, "ARM NEON"),
            SimdLevel::Avx2 => write!(f, "AVX2"),
            SimdLevel::Avx512 => write!(f, "AVX-512"),
        }
    }
}

/// Detected CPU capabilities.
#[derive(Debug, Clone, Copy)]
pub struct CpuCapabilities {
    /// The CPU architecture
    pub architecture: Architecture,
    /// The highest available SIMD level
    pub simd_level: SimdLevel,
}

impl CpuCapabilities {
    /// Detect CPU capabilities at runtime.
    pub fn detect() -> Self {
        Self {
            architecture: Architecture::detect(),
            simd_level: SimdLevel::detect(),
        }
    }
}

impl std::fmt::Display for CpuCapabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CPU: {} with {}", self.architecture, self.simd_level)
    }
}

/// Create the optimal SIMD reducer for the current CPU.
///
/// Detects CPU capabilities and returns the widest available
/// implementation:
///
/// - AVX-512 on x86_64 with AVX-512F support (avx512 feature)
/// - AVX2 on x86_64 with AVX2 support
/// - NEON on aarch64 (always available)
/// - Scalar fallback on other platforms
pub fn create_simd_reducer() -> Arc<dyn SimdReducer> {
    let caps = CpuCapabilities::detect();

    match caps.simd_level {
        #[cfg(all(target_arch = "x86_64", feature = "avx512"))]
        SimdLevel::Avx512 => {
            use super::avx512::Avx512Reducer;
            Arc::new(Avx512Reducer::new())
        },

        #[cfg(target_arch = "x86_64")]
        SimdLevel::Avx2 => {
            use super::avx2::Avx2Reducer;
            Arc::new(Avx2Reducer::new())
        },

        #[cfg(target_arch = "aarch64")]
        SimdLevel::Neon => {
            use super::neon::NeonReducer;
            Arc::new(NeonReducer::new())
        },

        _ => Arc::new(ScalarReducer::new()),
    }
}

/// Create a scalar reducer (for testing or comparison).
pub fn create_scalar_reducer() -> Arc<dyn SimdReducer> {
    Arc::new(ScalarReducer::new())
}
