//! Global System Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Memory Constants:** Default capacity and access widths.
//! 2. **Register Constants:** Register file size and the hard-wired zero index.
//! 3. **Control Constants:** PC increment and branch offset scaling.

/// Default memory capacity in bytes (4 KiB).
pub const DEFAULT_MEMORY_SIZE: usize = 4096;

/// Width of a data or instruction word in bytes.
pub const WORD_SIZE: u32 = 4;

/// Size of every instruction in bytes; the PC advances by this amount on fetch.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Number of architectural general-purpose registers.
pub const NUM_REGISTERS: usize = 32;

/// Index of the hard-wired zero register.
pub const ZERO_REGISTER: usize = 0;

/// Left shift applied to a sign-extended branch immediate to form a byte offset.
pub const BRANCH_OFFSET_SHIFT: u32 = 2;

/// Address at which the loader places the first instruction word.
pub const PROGRAM_BASE: u32 = 0;
