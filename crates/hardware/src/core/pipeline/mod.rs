//! Instruction pipeline.
//!
//! The machine retires one instruction per step, but the step is still
//! organized as five stages connected by latches:
//! 1. **Signals:** Control signals generated by decode.
//! 2. **Latches:** Values handed from one stage to the next.
//! 3. **Stages:** Fetch, decode, execute, memory, writeback.
//! 4. **Engine:** Drives one instruction through the stages.
//! 5. **Trace:** The per-step record returned to the driver.

/// Single-step execution engine.
pub mod engine;

/// Inter-stage latch entries.
pub mod latches;

/// Control signal definitions.
pub mod signals;

/// Stage implementations.
pub mod stages;

/// Trace records and step verdicts.
pub mod trace;

pub use trace::{MemAccess, RegWrite, StepOutcome, TraceRecord, Verdict};
