// ============================================================================
// Domain Models Module
// Contains the summation value objects and configuration
// ============================================================================

pub mod config;
pub mod result;

pub use config::{Strategy, SumConfig};
pub use result::{RequestId, SelectedStrategy, SumResult, SumValue};
