//! Byte-addressable main memory.
//!
//! This module provides the fixed-size byte array backing the simulated machine. It provides:
//! 1. **Bounds Checking:** Every access validates its whole window without integer overflow.
//! 2. **Byte Ordering:** Word accesses pick big- or little-endian layout from the access purpose.
//! 3. **Inspection:** Clamped byte windows for memory dumps.
//!
//! Capacity is chosen at construction and never changes.

use crate::common::constants::WORD_SIZE;
use crate::common::data::AccessType;
use crate::common::error::MemoryError;

/// Fixed-capacity byte-addressable memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    bytes: Vec<u8>,
}

impl Memory {
    /// Creates a zero-filled memory of `size` bytes.
    ///
    /// # Arguments
    ///
    /// * `size` - Capacity in bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Returns the capacity in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the memory has zero capacity.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns `true` if the `width`-byte window starting at `addr` lies in memory.
    #[inline]
    pub fn contains(&self, addr: u32, width: u32) -> bool {
        (addr as usize)
            .checked_add(width as usize)
            .is_some_and(|end| end <= self.bytes.len())
    }

    /// Returns `true` if a full word starting at `addr` lies in memory.
    #[inline]
    pub fn contains_word(&self, addr: u32) -> bool {
        self.contains(addr, WORD_SIZE)
    }

    /// Validates an access window and returns its start offset.
    fn check(&self, addr: u32, width: u32, access: AccessType) -> Result<usize, MemoryError> {
        if self.contains(addr, width) {
            Ok(addr as usize)
        } else {
            Err(MemoryError::OutOfRange {
                addr,
                width,
                access,
                size: self.bytes.len(),
            })
        }
    }

    /// Reads a single byte.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfRange`] if `addr` is outside memory.
    pub fn read_byte(&self, addr: u32, access: AccessType) -> Result<u8, MemoryError> {
        let off = self.check(addr, 1, access)?;
        Ok(self.bytes[off])
    }

    /// Writes a single byte.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfRange`] if `addr` is outside memory.
    pub fn write_byte(&mut self, addr: u32, val: u8, access: AccessType) -> Result<(), MemoryError> {
        let off = self.check(addr, 1, access)?;
        self.bytes[off] = val;
        Ok(())
    }

    /// Reads a 32-bit word, choosing the byte order from `access`.
    ///
    /// Fetches read most significant byte first; data reads read least
    /// significant byte first.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfRange`] if any of the four bytes is outside memory.
    pub fn read_word(&self, addr: u32, access: AccessType) -> Result<u32, MemoryError> {
        let off = self.check(addr, WORD_SIZE, access)?;
        let mut raw = [0u8; WORD_SIZE as usize];
        raw.copy_from_slice(&self.bytes[off..off + WORD_SIZE as usize]);
        Ok(if access.is_instruction() {
            u32::from_be_bytes(raw)
        } else {
            u32::from_le_bytes(raw)
        })
    }

    /// Writes a 32-bit word, choosing the byte order from `access`.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfRange`] if any of the four bytes is outside memory.
    /// Memory is left untouched on error.
    pub fn write_word(&mut self, addr: u32, val: u32, access: AccessType) -> Result<(), MemoryError> {
        let off = self.check(addr, WORD_SIZE, access)?;
        let raw = if access.is_instruction() {
            val.to_be_bytes()
        } else {
            val.to_le_bytes()
        };
        self.bytes[off..off + WORD_SIZE as usize].copy_from_slice(&raw);
        Ok(())
    }

    /// Returns up to `len` bytes starting at `start`, clamped to the end of memory.
    ///
    /// An empty slice is returned when `start` is past the end.
    pub fn window(&self, start: usize, len: usize) -> &[u8] {
        let begin = start.min(self.bytes.len());
        let end = start.saturating_add(len).min(self.bytes.len());
        &self.bytes[begin..end]
    }

    /// Returns the entire memory contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Zero-fills the whole memory without changing its capacity.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }
}
