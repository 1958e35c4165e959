//! Driver errors.

use std::io;

use mipsim_core::config::ConfigError;
use mipsim_core::sim::loader::LoadError;
use thiserror::Error;

/// Any failure that ends the `sim` process with a non-zero status.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The program could not be read or placed in memory.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// `--program` named no built-in program.
    #[error("unknown program '{name}' (available: {available})")]
    UnknownProgram {
        /// Name given on the command line.
        name: String,
        /// Comma-separated built-in names.
        available: String,
    },

    /// Both `--program` and `--file` were given.
    #[error("--program and --file are mutually exclusive")]
    ConflictingSource,

    /// Writing output failed.
    #[error("output error: {0}")]
    Io(#[from] io::Error),

    /// Serializing a JSON record failed.
    #[error("could not serialize trace: {0}")]
    Json(#[from] serde_json::Error),
}
