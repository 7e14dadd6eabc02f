// ============================================================================
// Summation Configuration
// Explicitly constructed, passed-in configuration for the engine
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Strategy
// ============================================================================

/// The accumulation strategy requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Pick vectorized when available and worthwhile, precise otherwise
    Auto,

    /// Arbitrary-precision decimal accumulation
    /// Deterministic and order-independent; exact for any decimal input
    Precise,

    /// SIMD f64 reduction
    /// Faster on large homogeneous inputs; subject to float rounding
    Vectorized,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Auto
    }
}

// ============================================================================
// Engine Configuration
// ============================================================================

/// Configuration for a summation engine.
///
/// Passed in explicitly at construction rather than held in process-wide
/// mutable state, so concurrent callers cannot race on shared settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SumConfig {
    /// Strategy used when the caller does not specify one
    pub default_strategy: Strategy,

    /// Minimum input length before `Auto` prefers the vectorized path.
    /// Below this the precise path wins regardless of capability.
    pub vectorized_min_len: usize,
}

impl SumConfig {
    /// Create a configuration with the default auto strategy.
    pub fn new() -> Self {
        Self {
            default_strategy: Strategy::Auto,
            vectorized_min_len: 1000,
        }
    }

    /// Builder method: Set the default strategy
    pub fn with_default_strategy(mut self, strategy: Strategy) -> Self {
        self.default_strategy = strategy;
        self
    }

    /// Builder method: Set the auto-selection length threshold
    pub fn with_vectorized_min_len(mut self, len: usize) -> Self {
        self.vectorized_min_len = len;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.vectorized_min_len == 0 {
            return Err("vectorized_min_len must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for SumConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl SumConfig {
    /// Exactness-first configuration: every call runs the precise path.
    pub fn exact() -> Self {
        Self::new().with_default_strategy(Strategy::Precise)
    }

    /// Throughput-first configuration: auto selection with a low threshold,
    /// so even modest inputs take the vectorized path when available.
    pub fn high_throughput() -> Self {
        Self::new().with_vectorized_min_len(64)
    }
}
