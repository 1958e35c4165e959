//! Architectural state.
//!
//! The programmer-visible storage of the machine:
//! 1. **GPR:** 32 integer registers with `$0` hardwired to zero.
//! 2. **Memory:** A fixed-size byte array shared by code and data.

/// General-purpose register file.
pub mod gpr;

/// Byte-addressable main memory.
pub mod memory;

pub use gpr::Gpr;
pub use memory::Memory;
