//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used throughout the simulator.
//! These types are used for the following:
//! 1. **Byte Ordering:** Instruction words are big-endian, data words are little-endian.
//! 2. **Fault Generation:** Tagging out-of-range errors with the access that caused them.
//! 3. **Reporting:** Naming the access in halt reasons and JSON traces.

use serde::Serialize;
use std::fmt;

/// Type of memory access operation.
///
/// The access purpose, never the address, selects the byte order of a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessType {
    /// Instruction fetch (or loader placement of an instruction word).
    ///
    /// Words are laid out most significant byte first.
    Fetch,

    /// Data read performed by a load instruction.
    ///
    /// Words are laid out least significant byte first.
    Read,

    /// Data write performed by a store instruction.
    ///
    /// Words are laid out least significant byte first.
    Write,
}

impl AccessType {
    /// Returns `true` for accesses that use the instruction-word (big-endian) layout.
    #[inline]
    pub const fn is_instruction(self) -> bool {
        matches!(self, Self::Fetch)
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch => f.write_str("fetch"),
            Self::Read => f.write_str("read"),
            Self::Write => f.write_str("write"),
        }
    }
}
