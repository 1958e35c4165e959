//! Typed word accessors on the machine state.
//!
//! Instruction words and data words share one byte array but use opposite byte
//! orders. The accessor names carry the purpose so callers never pick an
//! ordering by hand:
//! 1. **Instruction words:** big-endian, used by the loader and the fetch stage.
//! 2. **Data words:** little-endian, used by loads and stores.
//!
//! None of these check alignment; that is the engine's concern.

use super::Cpu;
use crate::common::data::AccessType;
use crate::common::error::MemoryError;

impl Cpu {
    /// Reads the big-endian instruction word at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfRange`] if `addr + 3` is outside memory.
    #[inline]
    pub fn load_instruction_word(&self, addr: u32) -> Result<u32, MemoryError> {
        self.mem.read_word(addr, AccessType::Fetch)
    }

    /// Writes `word` at `addr` in big-endian order.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfRange`] if `addr + 3` is outside memory.
    #[inline]
    pub fn store_instruction_word(&mut self, addr: u32, word: u32) -> Result<(), MemoryError> {
        self.mem.write_word(addr, word, AccessType::Fetch)
    }

    /// Reads the little-endian data word at `addr`, reinterpreted as signed.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfRange`] if `addr + 3` is outside memory.
    #[inline]
    pub fn load_data_word(&self, addr: u32) -> Result<i32, MemoryError> {
        self.mem
            .read_word(addr, AccessType::Read)
            .map(|w| w as i32)
    }

    /// Writes `word` at `addr` in little-endian order.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfRange`] if `addr + 3` is outside memory.
    #[inline]
    pub fn store_data_word(&mut self, addr: u32, word: u32) -> Result<(), MemoryError> {
        self.mem.write_word(addr, word, AccessType::Write)
    }
}
