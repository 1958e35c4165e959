//! Built-in sample programs.
//!
//! The core never embeds programs; these are driver fixtures selectable with
//! `--program`.

use std::path::Path;

use mipsim_core::sim::loader;

use crate::error::CliError;

/// A named, pre-encoded program.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    /// Name used on the command line.
    pub name: &'static str,
    /// One-line description for `sim programs`.
    pub about: &'static str,
    /// Instruction words in load order.
    pub words: &'static [u32],
}

/// Computes 10 + 1 and stores 11 at address 0.
const SUM_TO_TEN: [u32; 4] = [
    0x2008_000A, // addi $t0, $zero, 10
    0x2009_0001, // addi $t1, $zero, 1
    0x0109_5020, // add  $t2, $t0, $t1
    0xAC0A_0000, // sw   $t2, 0($zero)
];

/// Sums 5 + 4 + 3 + 2 + 1 in a loop and stores 15 at address 0.
const COUNTDOWN_SUM: [u32; 7] = [
    0x2008_0005, // addi $t0, $zero, 5
    0x2009_0000, // addi $t1, $zero, 0
    0x0128_4820, // add  $t1, $t1, $t0
    0x2108_FFFF, // addi $t0, $t0, -1
    0x1100_0001, // beq  $t0, $zero, 1
    0x1000_FFFC, // beq  $zero, $zero, -4
    0xAC09_0000, // sw   $t1, 0($zero)
];

/// All built-in programs.
pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "sum-to-ten",
        about: "ADDI, ADDI, ADD, SW; stores 11 at address 0",
        words: &SUM_TO_TEN,
    },
    Sample {
        name: "countdown-sum",
        about: "loop summing 5..1; stores 15 at address 0",
        words: &COUNTDOWN_SUM,
    },
];

/// Program run when neither `--program` nor `--file` is given.
pub const DEFAULT_PROGRAM: &str = "countdown-sum";

/// Looks up a built-in program by name.
pub fn find(name: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|s| s.name == name)
}

/// Resolves the command-line program source into a display name and words.
///
/// # Errors
///
/// Returns [`CliError::ConflictingSource`] if both sources are given,
/// [`CliError::UnknownProgram`] for an unknown name, or the loader's error
/// for an unreadable file.
pub fn resolve(program: Option<&str>, file: Option<&Path>) -> Result<(String, Vec<u32>), CliError> {
    match (program, file) {
        (Some(_), Some(_)) => Err(CliError::ConflictingSource),
        (None, Some(path)) => Ok((path.display().to_string(), loader::read_program(path)?)),
        (name, None) => {
            let name = name.unwrap_or(DEFAULT_PROGRAM);
            let sample = find(name).ok_or_else(|| CliError::UnknownProgram {
                name: name.to_string(),
                available: SAMPLES.iter().map(|s| s.name).collect::<Vec<_>>().join(", "),
            })?;
            Ok((sample.name.to_string(), sample.words.to_vec()))
        }
    }
}
