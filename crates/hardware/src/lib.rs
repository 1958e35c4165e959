//! MIPS-like instruction-set simulator library.
//!
//! This crate implements a sequential simulator for a small 32-bit RISC machine with the following:
//! 1. **Core:** Register file, byte-addressable memory, PC, and a five-stage
//!    fetch/decode/execute/memory/writeback cycle retiring one instruction per step.
//! 2. **ISA:** Field extraction, decoding, and disassembly for ADD, SUB, ADDI, LW, SW, and BEQ.
//! 3. **Simulation:** Program loader, simulator session, configuration, and statistics.
//!
//! Instruction words are stored big-endian and data words little-endian; the
//! access purpose, never the address, selects the byte order.
//!
//! # Example
//!
//! ```
//! use mipsim_core::{Config, Simulator};
//!
//! let program = [0x2008_000A, 0x2009_0001, 0x0109_5020, 0xAC0A_0000];
//! let mut sim = Simulator::with_program(&Config::default(), &program).unwrap();
//! for _ in 0..program.len() {
//!     let _ = sim.step();
//! }
//! assert_eq!(sim.cpu.get_register(10), 11);
//! assert_eq!(sim.cpu.load_data_word(0).unwrap(), 11);
//! ```

/// Common types and constants (access types, errors, limits).
pub mod common;
/// Simulator configuration (defaults, JSON loading).
pub mod config;
/// CPU core (architectural state, pipeline, functional units).
pub mod core;
/// Instruction set (fields, decode, disassembly, register names).
pub mod isa;
/// Program loader and simulator session.
pub mod sim;
/// Execution statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Machine state; holds registers, PC, and memory.
pub use crate::core::Cpu;
/// Per-step results.
pub use crate::core::pipeline::trace::{StepOutcome, TraceRecord, Verdict};
/// Halt reasons and memory errors.
pub use crate::common::error::{HaltReason, MemoryError};
/// Simulator session; owns a `Cpu` and steps it.
pub use crate::sim::Simulator;
