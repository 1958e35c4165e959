//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the simulator. It provides:
//! 1. **Cycles:** Total cycles and retired instructions.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, unimplemented).
//! 3. **Control flow:** Taken branches.
//! 4. **Termination:** The halt reason, once the run has ended.
//!
//! The report is produced through [`fmt::Display`]; printing is left to the caller.

use std::fmt;

use serde::Serialize;

use crate::common::error::HaltReason;
use crate::core::pipeline::trace::{TraceRecord, Verdict};
use crate::isa::instruction::Instruction;

/// Simulation statistics structure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Cycles consumed (one per fetched instruction).
    pub cycles: u64,
    /// Instructions that completed write-back without faulting.
    pub instructions_retired: u64,

    /// Count of ADD, SUB, and ADDI instructions retired.
    pub inst_alu: u64,
    /// Count of LW instructions retired.
    pub inst_load: u64,
    /// Count of SW instructions retired.
    pub inst_store: u64,
    /// Count of BEQ instructions retired.
    pub inst_branch: u64,
    /// Count of unrecognized encodings retired as no-ops.
    pub inst_unimplemented: u64,

    /// Number of BEQ instructions that redirected the PC.
    pub branches_taken: u64,
    /// Write-backs that targeted `$0` and were discarded.
    pub zero_register_writes: u64,

    /// Why the run ended, if it has.
    pub halt: Option<HaltReason>,
}

impl SimStats {
    /// Folds one step into the counters.
    ///
    /// # Arguments
    ///
    /// * `record` - Trace record of the step, if an instruction was fetched.
    /// * `verdict` - Verdict of the step.
    pub fn record_step(&mut self, record: Option<&TraceRecord>, verdict: Verdict) {
        if let Some(rec) = record {
            self.cycles = self.cycles.max(rec.cycle);
            if !rec.verdict.is_halt() {
                self.instructions_retired += 1;
                match rec.decoded {
                    Instruction::Add { .. } | Instruction::Sub { .. } | Instruction::Addi { .. } => {
                        self.inst_alu += 1;
                    }
                    Instruction::Lw { .. } => self.inst_load += 1,
                    Instruction::Sw { .. } => self.inst_store += 1,
                    Instruction::Beq { .. } => self.inst_branch += 1,
                    Instruction::Unimplemented(_) => self.inst_unimplemented += 1,
                }
                if rec.branch_taken {
                    self.branches_taken += 1;
                }
                if rec.reg_write.is_some_and(|w| w.ignored) {
                    self.zero_register_writes += 1;
                }
            }
        }
        if let Verdict::Halt(reason) = verdict {
            self.halt = Some(reason);
        }
    }
}

impl fmt::Display for SimStats {
    /// Formats a fixed-width statistics report.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = |n: u64| {
            if self.instructions_retired == 0 {
                0.0
            } else {
                (n as f64 / self.instructions_retired as f64) * 100.0
            }
        };

        writeln!(f, "==========================================================")?;
        writeln!(f, "SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        for (name, count) in [
            ("op.alu", self.inst_alu),
            ("op.load", self.inst_load),
            ("op.store", self.inst_store),
            ("op.branch", self.inst_branch),
            ("op.unimplemented", self.inst_unimplemented),
        ] {
            writeln!(f, "  {name:<22} {count} ({:.2}%)", pct(count))?;
        }
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "CONTROL")?;
        writeln!(f, "  branch.taken           {}", self.branches_taken)?;
        writeln!(f, "  wb.zero_discarded      {}", self.zero_register_writes)?;
        match self.halt {
            Some(reason) => writeln!(f, "  halt                   {reason}")?,
            None => writeln!(f, "  halt                   (running)")?,
        }
        write!(f, "==========================================================")
    }
}
