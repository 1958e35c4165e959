//! CPU core.
//!
//! Architectural state, the machine-state container, the instruction
//! pipeline, and its functional units.

/// Architectural state (registers, memory).
pub mod arch;

/// Machine state container and typed accessors.
pub mod cpu;

/// Instruction pipeline stages and execution engine.
pub mod pipeline;

/// Functional units (ALU).
pub mod units;

pub use cpu::Cpu;
