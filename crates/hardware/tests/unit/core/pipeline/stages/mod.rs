//! Stage-by-stage tests.



/// Instruction fetch and PC advance.
pub mod fetch;

/// Data reads and writes.
pub mod memory;
