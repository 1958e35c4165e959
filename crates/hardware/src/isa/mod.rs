//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, field extraction, and
//! decoding logic for the six-instruction MIPS-like base set.

/// Conventional register name mappings.
pub mod abi;

/// Instruction decoding for both encoding families.
pub mod decode;

/// Instruction disassembler for traces and listings.
pub mod disasm;

/// Instruction field extraction and the decoded instruction type.
pub mod instruction;

/// Base instruction set opcodes and function codes.
pub mod mips32;

pub use decode::decode;
pub use instruction::{Instruction, InstructionBits, Unimplemented, sign_extend16};
