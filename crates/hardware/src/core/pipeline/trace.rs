//! Per-step trace records.
//!
//! A [`TraceRecord`] describes one retired (or faulted) instruction: where it
//! came from, what it decoded to, and which memory and register effects it
//! committed. It carries no formatting; rendering is the caller's business.

use serde::Serialize;

use crate::common::error::HaltReason;
use crate::isa::instruction::Instruction;

/// Outcome of a step as seen by the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", content = "reason", rename_all = "snake_case")]
pub enum Verdict {
    /// The instruction retired; the machine may step again.
    Continue,
    /// The run is over.
    Halt(HaltReason),
}

impl Verdict {
    /// Returns `true` for [`Verdict::Halt`].
    pub const fn is_halt(&self) -> bool {
        matches!(self, Self::Halt(_))
    }
}

/// A data-word memory access (address and 32-bit value).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MemAccess {
    /// Byte address of the word.
    pub addr: u32,
    /// Value written or read.
    pub value: u32,
}

/// A register write-back.
///
/// Write-backs to `$0` are still reported, with `ignored` set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RegWrite {
    /// Destination register index.
    pub reg: usize,
    /// Value presented to the register file.
    pub value: u32,
    /// `true` when the destination was `$0` and the write was discarded.
    pub ignored: bool,
}

/// Trace record for one step that fetched an instruction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TraceRecord {
    /// Cycle number, starting at 1.
    pub cycle: u64,
    /// PC the instruction was fetched from.
    pub pc: u32,
    /// PC after the step (sequential successor or branch target).
    pub next_pc: u32,
    /// Raw instruction word.
    pub inst: u32,
    /// Decoded mnemonic (`ADD`, `SUB`, `ADDI`, `LW`, `SW`, `BEQ`, `R-UNIMPL`, `UNIMPL_OP`).
    pub mnemonic: &'static str,
    /// Decoded operation with its operands.
    pub decoded: Instruction,
    /// Data word written by SW.
    pub mem_write: Option<MemAccess>,
    /// Data word read by LW.
    pub mem_read: Option<MemAccess>,
    /// Register write-back performed by ADD, SUB, ADDI, or LW.
    pub reg_write: Option<RegWrite>,
    /// Whether BEQ redirected the PC.
    pub branch_taken: bool,
    /// Continue, or the fault that ended the run during this step.
    pub verdict: Verdict,
}

/// Result of [`crate::sim::Simulator::step`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    /// Whether the machine may step again.
    pub verdict: Verdict,
    /// Record of the fetched instruction; `None` when the fetch itself failed.
    pub trace: Option<TraceRecord>,
}

impl StepOutcome {
    /// Outcome of a step that halted before fetching.
    pub const fn halted(reason: HaltReason) -> Self {
        Self {
            verdict: Verdict::Halt(reason),
            trace: None,
        }
    }
}
