//! # Unit Components
//!
//! This module serves as the central hub for the per-component tests. It
//! organizes tests for the processor core, ISA definitions, and simulation
//! session.


/// Unit tests for the register file, memory, CPU, ALU, and pipeline stages.
pub mod core;


/// Unit tests for the loader and the simulator session, including full programs.
pub mod sim;


/// Unit tests for statistics collection.
///
/// Ensures [`SimStats`](mipsim_core::stats::SimStats) classifies retired
/// instructions and tracks halts.
pub mod stats;
