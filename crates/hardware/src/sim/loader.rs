//! Program loading.
//!
//! This module turns programs into memory contents. It performs:
//! 1. **Placement:** Writes instruction words from address 0 upward, big-endian, contiguous.
//! 2. **Binary images:** Splits a raw image into big-endian 32-bit words.
//! 3. **Hex listings:** Parses text with one or more hex words per line.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::common::constants::{PROGRAM_BASE, WORD_SIZE};
use crate::common::error::MemoryError;
use crate::core::Cpu;

/// Error raised while reading or placing a program.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read program '{}': {source}", .path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A hex listing was not valid UTF-8.
    #[error("program listing '{}' is not valid UTF-8", .path.display())]
    NotText {
        /// Path of the listing.
        path: PathBuf,
    },

    /// A token in a hex listing is not a 32-bit hex word.
    #[error("line {line}: '{token}' is not a 32-bit hex word")]
    InvalidWord {
        /// 1-based line number.
        line: usize,
        /// Offending token.
        token: String,
    },

    /// A binary image length is not a whole number of words.
    #[error("binary image of {len} bytes is not a multiple of 4")]
    TruncatedImage {
        /// Image length in bytes.
        len: usize,
    },

    /// The program does not fit in memory.
    #[error("program of {words} words does not fit in {capacity} bytes of memory")]
    ProgramTooLarge {
        /// Number of instruction words.
        words: usize,
        /// Memory capacity in bytes.
        capacity: usize,
    },

    /// A word could not be placed in memory.
    #[error(transparent)]
    Memory(#[from] MemoryError),
}

/// Places `words` in memory starting at address 0 and points the PC at the first one.
///
/// Each word occupies four bytes in big-endian order, in sequence order.
/// Memory beyond the program is left as it was.
///
/// # Arguments
///
/// * `cpu` - Machine state to load into.
/// * `words` - Instruction words in program order.
///
/// # Errors
///
/// Returns [`LoadError::ProgramTooLarge`] if the program exceeds memory; the
/// machine is untouched in that case.
pub fn load_program(cpu: &mut Cpu, words: &[u32]) -> Result<(), LoadError> {
    let capacity = cpu.memory_size();
    let fits = words
        .len()
        .checked_mul(WORD_SIZE as usize)
        .is_some_and(|bytes| bytes <= capacity);
    if !fits {
        return Err(LoadError::ProgramTooLarge {
            words: words.len(),
            capacity,
        });
    }

    let mut addr = PROGRAM_BASE;
    for &word in words {
        cpu.store_instruction_word(addr, word)?;
        addr += WORD_SIZE;
    }
    cpu.pc = PROGRAM_BASE;

    debug!(words = words.len(), base = PROGRAM_BASE, "program loaded");
    Ok(())
}

/// Splits a raw binary image into big-endian instruction words.
///
/// # Errors
///
/// Returns [`LoadError::TruncatedImage`] if the length is not a multiple of 4.
pub fn words_from_image(bytes: &[u8]) -> Result<Vec<u32>, LoadError> {
    if bytes.len() % WORD_SIZE as usize != 0 {
        return Err(LoadError::TruncatedImage { len: bytes.len() });
    }
    Ok(bytes
        .chunks_exact(WORD_SIZE as usize)
        .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Parses a hex listing into instruction words.
///
/// Tokens are separated by whitespace and may carry a `0x`/`0X` prefix and
/// `_` digit separators. Everything after `#` or `//` on a line is ignored,
/// as are blank lines.
///
/// # Errors
///
/// Returns [`LoadError::InvalidWord`] for the first token that is not a
/// 32-bit hex value.
pub fn parse_hex_listing(text: &str) -> Result<Vec<u32>, LoadError> {
    let mut words = Vec::new();
    for (idx, raw_line) in text.lines().enumerate() {
        let line = strip_comment(raw_line);
        for token in line.split_whitespace() {
            words.push(parse_hex_word(token).ok_or_else(|| LoadError::InvalidWord {
                line: idx + 1,
                token: token.to_string(),
            })?);
        }
    }
    Ok(words)
}

/// Reads a program file.
///
/// Files with a `.bin` extension are treated as raw big-endian images; all
/// others are parsed as hex listings.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or the errors of
/// [`words_from_image`] / [`parse_hex_listing`].
pub fn read_program(path: &Path) -> Result<Vec<u32>, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_image = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("bin"));
    if is_image {
        return words_from_image(&bytes);
    }

    let text = String::from_utf8(bytes).map_err(|_| LoadError::NotText {
        path: path.to_path_buf(),
    })?;
    parse_hex_listing(&text)
}

/// Returns the part of `line` before any `#` or `//` comment.
fn strip_comment(line: &str) -> &str {
    let cut = [line.find('#'), line.find("//")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());
    &line[..cut]
}

/// Parses one hex token into a word.
fn parse_hex_word(token: &str) -> Option<u32> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token)
        .replace('_', "");
    if digits.is_empty() || digits.len() > 8 {
        return None;
    }
    u32::from_str_radix(&digits, 16).ok()
}
