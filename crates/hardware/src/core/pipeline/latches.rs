//! Pipeline latch structures for inter-stage communication.
//!
//! Each step carries one instruction through
//! Fetch → Decode → Execute → Memory → Writeback; these entries are the values
//! handed from one stage to the next. Nothing survives between steps.

use crate::core::pipeline::signals::ControlSignals;
use crate::core::pipeline::trace::MemAccess;
use crate::isa::instruction::Instruction;

/// Entry in the IF/ID latch (Fetch to Decode stage).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Program counter of the instruction (before increment).
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
}

/// Entry in the ID/EX latch (Decode to Execute stage).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Decoded operation.
    pub decoded: Instruction,
    /// Destination register index, if the instruction writes one.
    pub rd: Option<usize>,
    /// Sign-extended immediate (zero for R-type).
    pub imm: i32,
    /// Value read from `rs`.
    pub rv1: u32,
    /// Value read from `rt`.
    pub rv2: u32,
    /// Control signals for downstream stages.
    pub ctrl: ControlSignals,
}

/// Entry in the EX/MEM latch (Execute to Memory stage).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExMemEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Decoded operation.
    pub decoded: Instruction,
    /// Destination register index, if any.
    pub rd: Option<usize>,
    /// ALU result, or the effective address for loads and stores.
    pub alu: u32,
    /// Data to be stored (for SW).
    pub store_data: u32,
    /// Whether a branch redirected the PC.
    pub branch_taken: bool,
    /// Control signals for downstream stages.
    pub ctrl: ControlSignals,
}

/// Entry in the MEM/WB latch (Memory to Writeback stage).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemWbEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Decoded operation.
    pub decoded: Instruction,
    /// Destination register index, if any.
    pub rd: Option<usize>,
    /// ALU result (for non-load instructions).
    pub alu: u32,
    /// Data loaded from memory (for LW).
    pub load_data: u32,
    /// Data word read by the memory stage.
    pub mem_read: Option<MemAccess>,
    /// Data word written by the memory stage.
    pub mem_write: Option<MemAccess>,
    /// Whether a branch redirected the PC.
    pub branch_taken: bool,
    /// Control signals for the writeback stage.
    pub ctrl: ControlSignals,
}
