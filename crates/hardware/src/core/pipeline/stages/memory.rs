//! Memory Access (MEM) Stage.
//!
//! Performs the data-word read or write scheduled by the execute stage. Data
//! words are little-endian, unlike instruction words.

use crate::common::error::HaltReason;
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMemEntry, MemWbEntry};
use crate::core::pipeline::trace::MemAccess;

/// Executes the memory access stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
/// * `entry` - The executed instruction.
///
/// # Errors
///
/// Returns [`HaltReason::MemoryFault`] if the access is out of range. The
/// execute stage has already validated the address, so this only guards
/// callers that build latch entries by hand.
pub fn mem_stage(cpu: &mut Cpu, entry: &ExMemEntry) -> Result<MemWbEntry, HaltReason> {
    let mut load_data = 0;
    let mut mem_read = None;
    let mut mem_write = None;

    if entry.ctrl.mem_write {
        cpu.store_data_word(entry.alu, entry.store_data)?;
        mem_write = Some(MemAccess {
            addr: entry.alu,
            value: entry.store_data,
        });
    } else if entry.ctrl.mem_read {
        load_data = cpu.load_data_word(entry.alu)? as u32;
        mem_read = Some(MemAccess {
            addr: entry.alu,
            value: load_data,
        });
    }

    Ok(MemWbEntry {
        pc: entry.pc,
        inst: entry.inst,
        decoded: entry.decoded,
        rd: entry.rd,
        alu: entry.alu,
        load_data,
        mem_read,
        mem_write,
        branch_taken: entry.branch_taken,
        ctrl: entry.ctrl,
    })
}
