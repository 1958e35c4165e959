//! Instruction Fetch (IF) Stage.
//!
//! Guards the PC against the memory bounds, reads the big-endian instruction
//! word, and advances the PC by one instruction before anything else runs.
//! Branch targets computed later are therefore relative to the incremented PC.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::error::HaltReason;
use crate::core::Cpu;
use crate::core::pipeline::latches::IfIdEntry;

/// Executes the instruction fetch stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
///
/// # Errors
///
/// Returns [`HaltReason::OutOfRange`] if `PC` or `PC + 3` lies outside memory.
/// The PC and registers are left untouched in that case.
pub fn fetch_stage(cpu: &mut Cpu) -> Result<IfIdEntry, HaltReason> {
    let pc = cpu.pc;
    if !cpu.mem.contains_word(pc) {
        return Err(HaltReason::OutOfRange { pc });
    }

    let inst = cpu.load_instruction_word(pc)?;
    cpu.pc = pc.wrapping_add(INSTRUCTION_SIZE);

    Ok(IfIdEntry { pc, inst })
}
