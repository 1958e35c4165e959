//! Simulator: owns the machine state and drives the execution engine.
//!
//! The simulator is the unit a driver talks to. It performs:
//! 1. **Ownership:** Holds the only handle to the [`Cpu`], so steps never race.
//! 2. **Stepping:** Runs one instruction per [`Simulator::step`] call.
//! 3. **Termination:** Latches the first halt reason; later steps report it again
//!    without touching state.

use tracing::{debug, trace, warn};

use crate::common::error::HaltReason;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::pipeline::engine;
use crate::core::pipeline::trace::{StepOutcome, Verdict};
use crate::sim::loader::{self, LoadError};
use crate::stats::SimStats;

/// Top-level simulator: machine state plus run bookkeeping.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// Machine state (registers, PC, memory).
    pub cpu: Cpu,
    /// Execution statistics.
    pub stats: SimStats,
    cycles: u64,
    halted: Option<HaltReason>,
    program_words: usize,
}

/// Summary returned by [`Simulator::run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Steps that fetched an instruction during this call.
    pub steps: u64,
    /// Halt reason, or `None` if the step budget ran out first.
    pub halt: Option<HaltReason>,
}

impl Simulator {
    /// Creates a simulator with zeroed state sized by `config`.
    pub fn new(config: &Config) -> Self {
        Self::from_cpu(Cpu::new(config))
    }

    /// Wraps an existing machine state, e.g. one prepared with a custom memory image.
    pub fn from_cpu(cpu: Cpu) -> Self {
        Self {
            cpu,
            stats: SimStats::default(),
            cycles: 0,
            halted: None,
            program_words: 0,
        }
    }

    /// Creates a simulator and loads `words` at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ProgramTooLarge`] if the program exceeds memory.
    pub fn with_program(config: &Config, words: &[u32]) -> Result<Self, LoadError> {
        let mut sim = Self::new(config);
        sim.load_program(words)?;
        Ok(sim)
    }

    /// Loads `words` at address 0 and sets the PC to 0.
    ///
    /// Starts a new run: the cycle counter, statistics, and halt latch are
    /// cleared. Registers and memory outside the program keep their values.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ProgramTooLarge`] if the program exceeds memory.
    /// The session is left untouched in that case.
    pub fn load_program(&mut self, words: &[u32]) -> Result<(), LoadError> {
        loader::load_program(&mut self.cpu, words)?;
        self.program_words = words.len();
        self.stats = SimStats::default();
        self.cycles = 0;
        self.halted = None;
        Ok(())
    }

    /// Number of words placed by the last [`Simulator::load_program`].
    pub const fn program_words(&self) -> usize {
        self.program_words
    }

    /// Cycles consumed so far.
    pub const fn cycles(&self) -> u64 {
        self.cycles
    }

    /// The halt reason, once the run has ended.
    pub const fn halted(&self) -> Option<HaltReason> {
        self.halted
    }

    /// Executes one instruction.
    ///
    /// Once a halt has been reported, every further call returns the same
    /// halt with no trace and no state change.
    pub fn step(&mut self) -> StepOutcome {
        if let Some(reason) = self.halted {
            return StepOutcome::halted(reason);
        }

        let outcome = engine::step(&mut self.cpu, &mut self.cycles);
        self.stats.record_step(outcome.trace.as_ref(), outcome.verdict);

        if let Some(rec) = &outcome.trace {
            trace!(
                cycle = rec.cycle,
                pc = format_args!("{:#010x}", rec.pc),
                inst = format_args!("{:#010x}", rec.inst),
                mnemonic = rec.mnemonic,
                "retired"
            );
            if rec.decoded.is_unimplemented() && !rec.verdict.is_halt() {
                warn!(
                    pc = format_args!("{:#010x}", rec.pc),
                    inst = format_args!("{:#010x}", rec.inst),
                    "unimplemented instruction treated as no-op"
                );
            }
            if rec.branch_taken {
                debug!(
                    from = format_args!("{:#010x}", rec.pc),
                    to = format_args!("{:#010x}", rec.next_pc),
                    "branch taken"
                );
            }
        }

        if let Verdict::Halt(reason) = outcome.verdict {
            debug!(cycle = self.cycles, %reason, "halted");
            self.halted = Some(reason);
        }
        outcome
    }

    /// Steps until a halt or until `max_steps` instructions have been fetched.
    ///
    /// The budget is the caller's policy; the simulator itself never stops a
    /// run that has not faulted.
    pub fn run(&mut self, max_steps: u64) -> RunSummary {
        let mut steps = 0;
        while steps < max_steps {
            let outcome = self.step();
            if outcome.trace.is_some() {
                steps += 1;
            }
            if let Verdict::Halt(reason) = outcome.verdict {
                return RunSummary {
                    steps,
                    halt: Some(reason),
                };
            }
        }
        RunSummary { steps, halt: None }
    }

    /// Restores power-on state: memory, registers, PC, counters, and halt latch.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.stats = SimStats::default();
        self.cycles = 0;
        self.halted = None;
        self.program_words = 0;
    }
}
