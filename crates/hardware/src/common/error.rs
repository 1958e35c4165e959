//! Memory errors and halt reasons.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Memory Errors:** Raised by Machine State accessors when a 4-byte window leaves memory.
//! 2. **Halt Reasons:** The two ways a step can end a run (fetch out of range, data fault).
//!
//! An unrecognized instruction is deliberately absent here: it retires as a no-op.

use serde::Serialize;
use thiserror::Error;

use super::data::AccessType;

/// Error returned by a raw memory accessor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// The accessed window `[addr, addr + width)` does not lie within memory.
    #[error("{access} of {width} byte(s) at {addr:#010x} is outside memory of {size} bytes")]
    OutOfRange {
        /// First byte address of the access.
        addr: u32,
        /// Number of bytes accessed.
        width: u32,
        /// Purpose of the access.
        access: AccessType,
        /// Memory capacity in bytes.
        size: usize,
    },
}

impl MemoryError {
    /// Returns the first byte address of the failed access.
    pub const fn addr(&self) -> u32 {
        match self {
            Self::OutOfRange { addr, .. } => *addr,
        }
    }

    /// Returns the purpose of the failed access.
    pub const fn access(&self) -> AccessType {
        match self {
            Self::OutOfRange { access, .. } => *access,
        }
    }
}

/// Reason a step stopped the run.
///
/// Both variants are terminal: once a simulator reports a halt it never
/// fetches again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HaltReason {
    /// The PC (or PC + 3) lies outside memory; raised before fetch.
    #[error("PC {pc:#010x} is out of memory range")]
    OutOfRange {
        /// Program counter at the time of the failed fetch.
        pc: u32,
    },

    /// A load or store computed an effective address whose 4-byte window
    /// lies outside memory.
    #[error("{access} address {addr:#010x} is out of memory range")]
    MemoryFault {
        /// Computed effective address.
        addr: u32,
        /// Whether the faulting instruction was a load or a store.
        access: AccessType,
    },
}

impl From<MemoryError> for HaltReason {
    fn from(err: MemoryError) -> Self {
        match err.access() {
            AccessType::Fetch => Self::OutOfRange { pc: err.addr() },
            access => Self::MemoryFault {
                addr: err.addr(),
                access,
            },
        }
    }
}
