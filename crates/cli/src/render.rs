//! Trace rendering.
//!
//! The core hands out structured [`TraceRecord`]s; this module turns them into
//! output. It provides:
//! 1. **Text:** A per-cycle block (header, memory and write-back lines,
//!    register dump, memory window) and a final state summary.
//! 2. **JSON lines:** One serialized record per step and a closing summary
//!    object.

use std::io::{self, Write};

use mipsim_core::Simulator;
use mipsim_core::common::HaltReason;
use mipsim_core::core::Cpu;
use mipsim_core::core::pipeline::trace::{StepOutcome, TraceRecord, Verdict};
use mipsim_core::stats::SimStats;
use serde::Serialize;

use crate::driver::RunReport;
use crate::error::CliError;

/// Bytes shown in memory windows.
const MEM_WINDOW: usize = 16;

/// Registers per row in a register dump.
const REGS_PER_ROW: usize = 4;

const RULE: &str = "--------------------------------------------------";

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Human-readable trace.
    Text,
    /// One JSON object per line.
    Json,
}

/// Consumer of run events.
pub trait Renderer {
    /// Called once after the program is loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn start(&mut self, out: &mut dyn Write, source: &str, words: usize) -> Result<(), CliError>;

    /// Called after every step.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or serialization fails.
    fn step(&mut self, out: &mut dyn Write, outcome: &StepOutcome, cpu: &Cpu)
    -> Result<(), CliError>;

    /// Called once when the run is over.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or serialization fails.
    fn finish(
        &mut self,
        out: &mut dyn Write,
        report: &RunReport,
        sim: &Simulator,
    ) -> Result<(), CliError>;
}

/// Builds the renderer for `format`.
pub fn renderer(format: Format, trace: bool, stats: bool) -> Box<dyn Renderer> {
    match format {
        Format::Text => Box::new(TextRenderer { trace, stats }),
        Format::Json => Box::new(JsonRenderer { trace }),
    }
}

/// Writes the register file, four registers per row.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_registers(out: &mut dyn Write, regs: &[u32]) -> io::Result<()> {
    for (i, val) in regs.iter().enumerate() {
        write!(out, "${i:02}=0x{val:08x}")?;
        if i % REGS_PER_ROW == REGS_PER_ROW - 1 {
            writeln!(out)?;
        } else {
            write!(out, "  ")?;
        }
    }
    Ok(())
}

/// Writes `bytes` as a labelled hex window starting at `start`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_memory_window(out: &mut dyn Write, start: usize, bytes: &[u8]) -> io::Result<()> {
    let last = (start + bytes.len()).saturating_sub(1);
    write!(out, "Memory [{start} .. {last}]: ")?;
    for b in bytes {
        write!(out, "{b:02x} ")?;
    }
    writeln!(out)
}

/// Human-readable renderer.
#[derive(Debug)]
pub struct TextRenderer {
    /// Print a block for every cycle.
    pub trace: bool,
    /// Print the statistics report at the end.
    pub stats: bool,
}

impl TextRenderer {
    fn write_record(out: &mut dyn Write, rec: &TraceRecord, cpu: &Cpu) -> io::Result<()> {
        writeln!(
            out,
            "Cycle {}: PC=0x{:08x} IR=0x{:08x} ({})",
            rec.cycle, rec.pc, rec.inst, rec.mnemonic
        )?;
        // A faulting access changes nothing, so there is no state to dump.
        if let Verdict::Halt(reason) = rec.verdict {
            return writeln!(out, "  {reason}");
        }
        if let Some(w) = rec.mem_write {
            writeln!(out, "  SW wrote 0x{:08x} to addr 0x{:08x}", w.value, w.addr)?;
        }
        if let Some(r) = rec.mem_read {
            writeln!(out, "  LW loaded 0x{:08x} from addr 0x{:08x}", r.value, r.addr)?;
        }
        match rec.reg_write {
            Some(w) if w.ignored => writeln!(out, "  WB: attempt to write $0 ignored")?,
            Some(w) => writeln!(out, "  WB: Reg ${} <= 0x{:08x}", w.reg, w.value)?,
            None => {}
        }
        writeln!(out, " Registers after cycle {}:", rec.cycle)?;
        write_registers(out, &cpu.registers())?;
        writeln!(out, " Memory (first {MEM_WINDOW} bytes):")?;
        write_memory_window(out, 0, cpu.mem.window(0, MEM_WINDOW))?;
        writeln!(out, "{RULE}")
    }
}

impl Renderer for TextRenderer {
    fn start(&mut self, out: &mut dyn Write, source: &str, words: usize) -> Result<(), CliError> {
        writeln!(out, "Loaded program {source} ({words} words) into memory.")?;
        writeln!(out, "Starting simulation. PC=0x00000000")?;
        writeln!(out, "{RULE}")?;
        Ok(())
    }

    fn step(
        &mut self,
        out: &mut dyn Write,
        outcome: &StepOutcome,
        cpu: &Cpu,
    ) -> Result<(), CliError> {
        if self.trace
            && let Some(rec) = &outcome.trace
        {
            Self::write_record(out, rec, cpu)?;
        }
        Ok(())
    }

    fn finish(
        &mut self,
        out: &mut dyn Write,
        report: &RunReport,
        sim: &Simulator,
    ) -> Result<(), CliError> {
        let cpu = &sim.cpu;
        writeln!(out, "{}", report.stop)?;
        writeln!(out, "Simulation finished after {} steps (cycles).", report.steps)?;
        writeln!(out, "Final register and memory state:")?;
        write_registers(out, &cpu.registers())?;
        writeln!(out, "Memory first {MEM_WINDOW} bytes:")?;
        write_memory_window(out, 0, cpu.mem.window(0, MEM_WINDOW))?;
        match cpu.load_data_word(0) {
            Ok(value) => writeln!(
                out,
                "Value stored at memory[0] (word little-endian): {value} (0x{:08x})",
                value as u32
            )?,
            Err(e) => writeln!(out, "Value stored at memory[0] unavailable: {e}")?,
        }
        if self.stats {
            writeln!(out)?;
            writeln!(out, "{}", sim.stats)?;
        }
        Ok(())
    }
}

/// JSON-lines renderer.
#[derive(Debug)]
pub struct JsonRenderer {
    /// Emit a line for every step.
    pub trace: bool,
}

/// Final object emitted by [`JsonRenderer`].
#[derive(Debug, Serialize)]
struct Summary<'a> {
    steps: u64,
    stop: String,
    halt: Option<HaltReason>,
    pc: u32,
    registers: [u32; 32],
    memory_word0: Option<i32>,
    stats: &'a SimStats,
}

impl Renderer for JsonRenderer {
    fn start(&mut self, _out: &mut dyn Write, _source: &str, _words: usize) -> Result<(), CliError> {
        Ok(())
    }

    fn step(
        &mut self,
        out: &mut dyn Write,
        outcome: &StepOutcome,
        _cpu: &Cpu,
    ) -> Result<(), CliError> {
        if self.trace
            && let Some(rec) = &outcome.trace
        {
            serde_json::to_writer(&mut *out, rec)?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn finish(
        &mut self,
        out: &mut dyn Write,
        report: &RunReport,
        sim: &Simulator,
    ) -> Result<(), CliError> {
        let summary = Summary {
            steps: report.steps,
            stop: report.stop.to_string(),
            halt: sim.halted(),
            pc: sim.cpu.pc,
            registers: sim.cpu.registers(),
            memory_word0: sim.cpu.load_data_word(0).ok(),
            stats: &sim.stats,
        };
        serde_json::to_writer(&mut *out, &summary)?;
        writeln!(out)?;
        Ok(())
    }
}
