//! Single-instruction execution engine.
//!
//! Runs one instruction through all five stages and assembles the trace
//! record. Execution is strictly sequential: the instruction is fully
//! retired (or faulted) before the function returns.

use crate::common::error::HaltReason;
use crate::core::Cpu;
use crate::core::pipeline::latches::IdExEntry;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};
use crate::core::pipeline::trace::{StepOutcome, TraceRecord, Verdict};

/// Performs one fetch/decode/execute/memory/writeback cycle.
///
/// `cycles` is incremented once the fetch guard has passed, so a step that
/// halts on an out-of-range PC does not consume a cycle.
///
/// # Arguments
///
/// * `cpu` - Machine state, mutated in place.
/// * `cycles` - Running cycle counter owned by the caller.
///
/// # Returns
///
/// The verdict and, unless fetch failed, the trace record.
pub fn step(cpu: &mut Cpu, cycles: &mut u64) -> StepOutcome {
    let if_id = match fetch_stage(cpu) {
        Ok(entry) => entry,
        Err(reason) => return StepOutcome::halted(reason),
    };
    *cycles += 1;
    let cycle = *cycles;

    let id_ex = decode_stage(cpu, &if_id);

    let ex_mem = match execute_stage(cpu, &id_ex) {
        Ok(entry) => entry,
        Err(reason) => return faulted(cpu, cycle, &id_ex, reason),
    };

    let mem_wb = match mem_stage(cpu, &ex_mem) {
        Ok(entry) => entry,
        Err(reason) => return faulted(cpu, cycle, &id_ex, reason),
    };

    let reg_write = wb_stage(cpu, &mem_wb);

    let record = TraceRecord {
        cycle,
        pc: mem_wb.pc,
        next_pc: cpu.pc,
        inst: mem_wb.inst,
        mnemonic: mem_wb.decoded.mnemonic(),
        decoded: mem_wb.decoded,
        mem_write: mem_wb.mem_write,
        mem_read: mem_wb.mem_read,
        reg_write,
        branch_taken: mem_wb.branch_taken,
        verdict: Verdict::Continue,
    };

    StepOutcome {
        verdict: Verdict::Continue,
        trace: Some(record),
    }
}

/// Builds the outcome for an instruction that faulted after fetch.
fn faulted(cpu: &mut Cpu, cycle: u64, entry: &IdExEntry, reason: HaltReason) -> StepOutcome {
    cpu.regs.enforce_zero();
    let verdict = Verdict::Halt(reason);
    StepOutcome {
        verdict,
        trace: Some(TraceRecord {
            cycle,
            pc: entry.pc,
            next_pc: cpu.pc,
            inst: entry.inst,
            mnemonic: entry.decoded.mnemonic(),
            decoded: entry.decoded,
            mem_write: None,
            mem_read: None,
            reg_write: None,
            branch_taken: false,
            verdict,
        }),
    }
}
