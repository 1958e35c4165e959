//! Configuration system for the simulator.
//!
//! This module defines all configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline machine constants (memory size, cycle budget).
//! 2. **Structures:** Hierarchical config for general run settings and memory.
//! 3. **Loading:** JSON parsing and validation.
//!
//! Every field is optional in JSON; missing fields take the defaults below.
//! `general` settings are read by the driver only, the core never consults them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::common::constants::WORD_SIZE;

/// Default configuration constants for the simulator.
mod defaults {
    /// Memory capacity (4 KiB).
    pub const MEMORY_SIZE: usize = crate::common::constants::DEFAULT_MEMORY_SIZE;

    /// Maximum number of steps a driver runs before giving up.
    pub const MAX_CYCLES: u64 = 1000;

    /// Bytes past the end of the loaded program the PC may wander before the
    /// driver stops the run.
    pub const PROGRAM_SLACK: u32 = 100;

    /// Per-cycle trace output is on by default.
    pub const TRACE_INSTRUCTIONS: bool = true;
}

/// Error raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config '{}': {source}", .path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The JSON was malformed or had the wrong shape.
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The memory size is zero or not a whole number of words.
    #[error("memory size {0} must be a non-zero multiple of 4 bytes")]
    InvalidMemorySize(usize),
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::Config;
///
/// let json = r#"{ "memory": { "size": 8192 }, "general": { "max_cycles": 50 } }"#;
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.memory.size, 8192);
/// assert_eq!(config.general.max_cycles, 50);
/// assert_eq!(config.general.program_slack, Some(100));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General run settings (driver policy).
    #[serde(default)]
    pub general: GeneralConfig,
    /// Main memory configuration.
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses and validates a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidMemorySize`] for an unusable memory size.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json_str`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Checks invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMemorySize`] if the memory size is zero or
    /// not a multiple of the word size.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        let size = self.memory.size;
        if size == 0 || size % WORD_SIZE as usize != 0 {
            return Err(ConfigError::InvalidMemorySize(size));
        }
        Ok(())
    }
}

/// General run settings.
///
/// These are consumed by the driver; the execution engine has no notion of a
/// cycle budget or of where the program ends.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Print a trace block for every cycle.
    #[serde(default = "GeneralConfig::default_trace")]
    pub trace_instructions: bool,

    /// Stop after this many steps.
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,

    /// Stop once the PC passes the end of the program by more than this many
    /// bytes. `null` disables the check.
    #[serde(default = "GeneralConfig::default_program_slack")]
    pub program_slack: Option<u32>,
}

impl GeneralConfig {
    /// Returns the default trace setting.
    const fn default_trace() -> bool {
        defaults::TRACE_INSTRUCTIONS
    }

    /// Returns the default cycle budget.
    const fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }

    /// Returns the default program slack.
    const fn default_program_slack() -> Option<u32> {
        Some(defaults::PROGRAM_SLACK)
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: defaults::TRACE_INSTRUCTIONS,
            max_cycles: defaults::MAX_CYCLES,
            program_slack: Some(defaults::PROGRAM_SLACK),
        }
    }
}

/// Main memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Capacity in bytes; fixed for the lifetime of the machine.
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,
}

impl MemoryConfig {
    /// Returns the default memory size.
    const fn default_size() -> usize {
        defaults::MEMORY_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: defaults::MEMORY_SIZE,
        }
    }
}
