//! Execute (EX) Stage.
//!
//! This module implements the third stage of the pipeline. It performs:
//! 1. **ALU Execution:** Arithmetic for ADD, SUB, ADDI, and effective addresses.
//! 2. **Address Validation:** Faults loads and stores whose word leaves memory.
//! 3. **Branch Resolution:** Redirects the PC for a taken BEQ.

use crate::common::constants::BRANCH_OFFSET_SHIFT;
use crate::common::data::AccessType;
use crate::common::error::HaltReason;
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry};
use crate::core::pipeline::signals::OpBSrc;
use crate::core::units::alu;

/// Executes the execute stage.
///
/// A taken branch writes the PC here. The PC has already been incremented by
/// fetch, so the target is `PC + 4 + (offset << 2)` relative to the branch.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state (PC redirect).
/// * `entry` - The decoded instruction and its operands.
///
/// # Errors
///
/// Returns [`HaltReason::MemoryFault`] if a load or store address window is
/// outside memory. No register or memory cell has been modified at that point.
pub fn execute_stage(cpu: &mut Cpu, entry: &IdExEntry) -> Result<ExMemEntry, HaltReason> {
    let ctrl = entry.ctrl;

    let op_b = match ctrl.b_src {
        OpBSrc::Reg => entry.rv2,
        OpBSrc::Imm => entry.imm as u32,
    };
    let result = alu::execute(ctrl.alu, entry.rv1, op_b);

    if ctrl.mem_read || ctrl.mem_write {
        let access = if ctrl.mem_write {
            AccessType::Write
        } else {
            AccessType::Read
        };
        if !cpu.mem.contains_word(result) {
            return Err(HaltReason::MemoryFault {
                addr: result,
                access,
            });
        }
    }

    let branch_taken = ctrl.branch && entry.rv1 == entry.rv2;
    if branch_taken {
        cpu.pc = alu::offset_address(cpu.pc, entry.imm << BRANCH_OFFSET_SHIFT);
    }

    Ok(ExMemEntry {
        pc: entry.pc,
        inst: entry.inst,
        decoded: entry.decoded,
        rd: entry.rd,
        alu: result,
        store_data: entry.rv2,
        branch_taken,
        ctrl,
    })
}
