//! Tests for the CPU core.



/// Stages and the single-step engine.
pub mod pipeline;

/// Functional units.
pub mod units;
