//! Functional unit tests.

/// Integer ALU.
pub mod alu;
