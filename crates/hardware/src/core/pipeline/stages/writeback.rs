//! Writeback (WB) Stage.
//!
//! Commits the ALU result or the loaded word to the destination register.
//! A destination of `$0` is accepted and discarded; the zero invariant is
//! re-applied as the last action of the stage.

use crate::common::constants::ZERO_REGISTER;
use crate::core::Cpu;
use crate::core::pipeline::latches::MemWbEntry;
use crate::core::pipeline::trace::RegWrite;

/// Executes the writeback stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
/// * `entry` - The instruction leaving the memory stage.
///
/// # Returns
///
/// The register write presented to the register file, if any.
pub fn wb_stage(cpu: &mut Cpu, entry: &MemWbEntry) -> Option<RegWrite> {
    let write = match (entry.ctrl.reg_write, entry.rd) {
        (true, Some(reg)) => {
            let value = if entry.ctrl.mem_read {
                entry.load_data
            } else {
                entry.alu
            };
            cpu.regs.write(reg, value);
            Some(RegWrite {
                reg,
                value,
                ignored: reg == ZERO_REGISTER,
            })
        }
        _ => None,
    };

    cpu.regs.enforce_zero();
    write
}
