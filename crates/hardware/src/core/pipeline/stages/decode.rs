//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the pipeline. It performs:
//! 1. **Decoding:** Translates the raw word into an [`Instruction`].
//! 2. **Control Generation:** Produces the [`ControlSignals`] for later stages.
//! 3. **Register Read:** Reads the `rs` and `rt` operands from the register file.
//!
//! Unrecognized encodings produce a bubble (default control signals), so they
//! flow through the remaining stages without any effect.

use crate::core::Cpu;
use crate::core::pipeline::latches::{IdExEntry, IfIdEntry};
use crate::core::pipeline::signals::{AluOp, ControlSignals, OpBSrc};
use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;

/// Executes the instruction decode stage.
///
/// # Arguments
///
/// * `cpu` - Reference to the CPU state (register file read ports).
/// * `entry` - The fetched instruction.
///
/// # Returns
///
/// The ID/EX latch entry for the execute stage.
pub fn decode_stage(cpu: &Cpu, entry: &IfIdEntry) -> IdExEntry {
    let decoded = decode(entry.inst);

    let (rs, rt, imm) = match decoded {
        Instruction::Add { rs, rt, .. } | Instruction::Sub { rs, rt, .. } => (rs, rt, 0),
        Instruction::Addi { rs, rt, imm } => (rs, rt, imm),
        Instruction::Lw { rs, rt, offset }
        | Instruction::Sw { rs, rt, offset }
        | Instruction::Beq { rs, rt, offset } => (rs, rt, offset),
        Instruction::Unimplemented(_) => (0, 0, 0),
    };

    IdExEntry {
        pc: entry.pc,
        inst: entry.inst,
        decoded,
        rd: decoded.dest(),
        imm,
        rv1: cpu.regs.read(rs),
        rv2: cpu.regs.read(rt),
        ctrl: control_signals(&decoded),
    }
}

/// Derives the control signals for a decoded instruction.
pub fn control_signals(decoded: &Instruction) -> ControlSignals {
    match decoded {
        Instruction::Add { .. } => ControlSignals {
            reg_write: true,
            alu: AluOp::Add,
            b_src: OpBSrc::Reg,
            ..ControlSignals::default()
        },
        Instruction::Sub { .. } => ControlSignals {
            reg_write: true,
            alu: AluOp::Sub,
            b_src: OpBSrc::Reg,
            ..ControlSignals::default()
        },
        Instruction::Addi { .. } => ControlSignals {
            reg_write: true,
            alu: AluOp::Add,
            b_src: OpBSrc::Imm,
            ..ControlSignals::default()
        },
        Instruction::Lw { .. } => ControlSignals {
            reg_write: true,
            mem_read: true,
            alu: AluOp::Add,
            b_src: OpBSrc::Imm,
            ..ControlSignals::default()
        },
        Instruction::Sw { .. } => ControlSignals {
            mem_write: true,
            alu: AluOp::Add,
            b_src: OpBSrc::Imm,
            ..ControlSignals::default()
        },
        Instruction::Beq { .. } => ControlSignals {
            branch: true,
            ..ControlSignals::default()
        },
        Instruction::Unimplemented(_) => ControlSignals::default(),
    }
}
