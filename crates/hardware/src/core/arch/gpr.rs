//! General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file for the simulated machine.
//! It performs the following:
//! 1. **Storage:** Maintains 32 unsigned 32-bit registers (`$0`-`$31`).
//! 2. **Invariant Enforcement:** Ensures that register `$0` is hardwired to zero.
//! 3. **Observability:** Provides a snapshot of the complete register state for trace consumers.

use crate::common::constants::{NUM_REGISTERS, ZERO_REGISTER};

/// General-Purpose Register file.
///
/// Contains 32 general-purpose registers. Register `$0` is hardwired to zero:
/// writes to it are accepted and discarded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_REGISTERS],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    ///
    /// # Returns
    ///
    /// A new `Gpr` instance with all registers set to 0.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the specified register. Register `$0` always returns 0.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a valid register index. Decoded register fields
    /// are 5 bits wide and can never trigger this.
    #[inline]
    pub const fn read(&self, idx: usize) -> u32 {
        if idx == ZERO_REGISTER { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// A write to `$0` is a no-op, not an error.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a valid register index.
    #[inline]
    pub const fn write(&mut self, idx: usize, val: u32) {
        if idx != ZERO_REGISTER {
            self.regs[idx] = val;
        }
        self.enforce_zero();
    }

    /// Forces the backing storage of `$0` back to zero.
    ///
    /// Called as the final act of every register mutation path so the
    /// invariant holds even for code that touches the storage directly.
    #[inline]
    pub const fn enforce_zero(&mut self) {
        self.regs[ZERO_REGISTER] = 0;
    }

    /// Resets every register to zero.
    pub const fn clear(&mut self) {
        self.regs = [0; NUM_REGISTERS];
    }

    /// Returns a copy of all 32 register values, index 0 first.
    pub const fn snapshot(&self) -> [u32; NUM_REGISTERS] {
        self.regs
    }
}
