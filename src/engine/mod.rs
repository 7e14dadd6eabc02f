// ============================================================================
// Engine Module
// Contains the core summation business logic
// ============================================================================

mod partial;
mod stream;
mod sum_engine;

pub use partial::{partial_sum, reduce, PartialSum};
pub use stream::{stream_sum, StreamParser};
pub use sum_engine::SumEngine;
