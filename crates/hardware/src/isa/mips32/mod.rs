//! MIPS-like 32-bit base instruction set.
//!
//! # Structure
//!
//! - `opcodes`: Primary opcodes selecting the I-type instruction or the R-type family.
//! - `funct`: Secondary function codes selecting the R-type operation.

/// Function code definitions for R-type operations.
pub mod funct;

/// Primary opcode definitions.
pub mod opcodes;
