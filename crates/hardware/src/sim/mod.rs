//! Simulation utilities and program loading.
//!
//! Provides the [`Simulator`] a driver steps, plus utilities for turning
//! program files into memory contents.

pub mod loader;

/// Simulator that owns the machine state and steps the engine.
pub mod simulator;

pub use simulator::{RunSummary, Simulator};
