//! Common utilities and types used throughout the simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Machine-wide constants for memory, registers, and control flow.
//! 2. **Memory Access:** Definitions for categorizing memory operations (Fetch/Read/Write).
//! 3. **Error Handling:** Memory errors and halt reasons.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types and halt reasons.
pub mod error;

pub use constants::{DEFAULT_MEMORY_SIZE, INSTRUCTION_SIZE, NUM_REGISTERS, WORD_SIZE};
pub use data::AccessType;
pub use error::{HaltReason, MemoryError};
