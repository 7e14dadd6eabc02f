// ============================================================================
// Sum Engine Library
// Precise numeric summation with a SIMD-accelerated fast path
// ============================================================================

//! # Sum Engine
//!
//! A request-scoped summation engine for heterogeneous numeric input.
//!
//! ## Features
//!
//! - **Precise strategy** accumulating in arbitrary-precision decimals, so
//!   `0.1 + 0.2` is exactly `0.3`
//! - **Vectorized strategy** using SIMD f64 reduction (AVX2 on x86_64,
//!   NEON on aarch64) for large homogeneous inputs
//! - **Explicit auto selection** that falls back to precise as a
//!   deliberate branch, never an implicit catch-all
//! - **Split-then-combine helpers** for chunked aggregation
//! - **Streaming accumulation** over newline-delimited sources in O(1)
//!   memory
//!
//! ## Example
//!
//! ```rust
//! use sum_engine::prelude::*;
//!
//! let engine = SumEngine::with_defaults();
//!
//! let inputs = vec![
//!     NumericInput::from("1"),
//!     NumericInput::from("2.5"),
//!     NumericInput::from(3i64),
//! ];
//!
//! let result = engine.sum(&inputs, Strategy::Precise).unwrap();
//! assert_eq!(result.sum.to_string(), "6.5");
//! assert_eq!(result.count, 3);
//! println!("Sum: {} ({} values)", result.sum, result.count);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
#[cfg(feature = "vectorized")]
pub mod simd;

#[cfg(feature = "http")]
pub mod http;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        RequestId, SelectedStrategy, Strategy, SumConfig, SumResult, SumValue,
    };
    pub use crate::engine::{partial_sum, reduce, stream_sum, PartialSum, StreamParser, SumEngine};
    pub use crate::interfaces::{EventHandler, LoggingEventHandler, NoOpEventHandler, SumEvent};
    pub use crate::numeric::{
        parse_count, parse_decimal, parse_number, NumericInput, NumericResult, SumError,
    };
    #[cfg(feature = "vectorized")]
    pub use crate::simd::{create_simd_reducer, SimdReducer};
}
