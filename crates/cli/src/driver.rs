//! Run loop and stop policy.
//!
//! The core only ever reports a halt when the machine itself cannot proceed.
//! Everything else that ends a run lives here:
//! 1. **Cycle budget:** Stop after `max_cycles` completed steps.
//! 2. **Memory end:** Stop once the PC reaches the end of memory.
//! 3. **Program extent:** Stop once the PC wanders more than `slack` bytes past
//!    the loaded program (optional).

use std::fmt;

use mipsim_core::config::Config;
use mipsim_core::core::pipeline::trace::{StepOutcome, Verdict};
use mipsim_core::{HaltReason, Simulator};
use tracing::debug;

/// Why the driver ended a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The core halted.
    Halted(HaltReason),
    /// The cycle budget was spent.
    CycleLimit,
    /// The PC reached or passed the end of memory.
    PcPastMemory,
    /// The PC passed the loaded program plus slack.
    PcPastProgram,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Halted(reason) => write!(f, "{reason}. Halting."),
            Self::CycleLimit => f.write_str("Cycle limit reached. Halting."),
            Self::PcPastMemory => f.write_str("PC >= memory size. Halting."),
            Self::PcPastProgram => f.write_str("PC beyond program area (heuristic). Halting."),
        }
    }
}

/// Driver-side stop conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopPolicy {
    /// Maximum number of completed steps.
    pub max_cycles: u64,
    /// Memory capacity in bytes.
    pub memory_size: usize,
    /// Highest PC tolerated after a step, or `None` to never apply the check.
    pub program_limit: Option<u64>,
}

impl StopPolicy {
    /// Builds the policy for a program of `program_words` words.
    pub fn new(config: &Config, program_words: usize) -> Self {
        Self {
            max_cycles: config.general.max_cycles,
            memory_size: config.memory.size,
            program_limit: config
                .general
                .program_slack
                .map(|slack| program_words as u64 * 4 + u64::from(slack)),
        }
    }

    /// Checks the PC reached after a completed step.
    pub fn after_step(&self, pc: u32) -> Option<StopReason> {
        if pc as usize >= self.memory_size {
            return Some(StopReason::PcPastMemory);
        }
        match self.program_limit {
            Some(limit) if u64::from(pc) > limit => Some(StopReason::PcPastProgram),
            _ => None,
        }
    }
}

/// Result of a driven run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Steps that completed with a Continue verdict.
    pub steps: u64,
    /// Why the run ended.
    pub stop: StopReason,
}

/// Steps `sim` until the core halts or the policy stops it.
///
/// `observe` sees every outcome (including the halting one) together with
/// the post-step machine state.
///
/// # Errors
///
/// Propagates the first error returned by `observe`.
pub fn run<E>(
    sim: &mut Simulator,
    policy: &StopPolicy,
    mut observe: impl FnMut(&StepOutcome, &Simulator) -> Result<(), E>,
) -> Result<RunReport, E> {
    let mut steps = 0;
    let stop = loop {
        if steps >= policy.max_cycles {
            break StopReason::CycleLimit;
        }
        let outcome = sim.step();
        observe(&outcome, sim)?;
        if let Verdict::Halt(reason) = outcome.verdict {
            break StopReason::Halted(reason);
        }
        steps += 1;
        if let Some(reason) = policy.after_step(sim.cpu.pc) {
            break reason;
        }
    };
    debug!(steps, %stop, "run finished");
    Ok(RunReport { steps, stop })
}
