//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the machine state operated on by the
//! execution engine. It coordinates the following:
//! 1. **State Management:** Owns the register file, the program counter, and memory.
//! 2. **Register Access:** Index-based reads and writes honoring the `$0` invariant.
//! 3. **Memory Access:** Typed word accessors keyed by access purpose (see [`memory`]).

/// Typed instruction and data word accessors.
pub mod memory;

use crate::common::constants::NUM_REGISTERS;
use crate::config::Config;
use crate::core::arch::{Gpr, Memory};

/// Machine state: registers, program counter, and memory.
///
/// Created zeroed, mutated in place by every step, and dropped with the
/// simulator that owns it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: Gpr,
    /// Program counter (byte address).
    pub pc: u32,
    /// Main memory.
    pub mem: Memory,
}

impl Cpu {
    /// Creates a zeroed machine with the memory size from `config`.
    ///
    /// # Arguments
    ///
    /// * `config` - Simulator configuration; only `memory.size` is used here.
    pub fn new(config: &Config) -> Self {
        Self::with_memory_size(config.memory.size)
    }

    /// Creates a zeroed machine with `size` bytes of memory.
    pub fn with_memory_size(size: usize) -> Self {
        Self {
            regs: Gpr::new(),
            pc: 0,
            mem: Memory::new(size),
        }
    }

    /// Reads general-purpose register `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= 32`.
    #[inline]
    pub const fn get_register(&self, idx: usize) -> u32 {
        self.regs.read(idx)
    }

    /// Writes general-purpose register `idx`; writes to `$0` are discarded.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= 32`.
    #[inline]
    pub const fn set_register(&mut self, idx: usize, val: u32) {
        self.regs.write(idx, val);
    }

    /// Returns all register values, index 0 first.
    pub const fn registers(&self) -> [u32; NUM_REGISTERS] {
        self.regs.snapshot()
    }

    /// Returns the memory capacity in bytes.
    #[inline]
    pub fn memory_size(&self) -> usize {
        self.mem.len()
    }

    /// Returns the machine to its power-on state: registers, PC, and memory zeroed.
    pub fn reset(&mut self) {
        self.regs.clear();
        self.pc = 0;
        self.mem.clear();
    }
}
