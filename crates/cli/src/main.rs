//! MIPS-like instruction-set simulator CLI.
//!
//! This binary drives the simulator core. It performs:
//! 1. **Run:** Load a built-in or file program, step it under the driver's stop policy, and
//!    print a per-cycle trace (text or JSON lines) with a final state summary.
//! 2. **Disasm:** Print an address / word / assembly listing of a program.
//! 3. **Programs:** List the built-in sample programs.
//!
//! Diagnostics go to stderr through `tracing`; set `RUST_LOG` (e.g. `RUST_LOG=mipsim_core=debug`)
//! to see loader, branch, and halt events.

mod driver;
mod error;
mod programs;
mod render;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use mipsim_core::Simulator;
use mipsim_core::config::Config;
use mipsim_core::isa::disasm::disassemble;
use tracing_subscriber::EnvFilter;

use crate::driver::StopPolicy;
use crate::error::CliError;
use crate::render::Format;

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "MIPS-like instruction-set simulator",
    long_about = "Run a program on a sequential MIPS-like CPU and trace every cycle.\n\nExamples:\n  sim run\n  sim run --program sum-to-ten --quiet\n  sim run --file prog.hex --format json\n  sim disasm --program countdown-sum"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program and print its trace.
    Run(RunArgs),

    /// Print a disassembly listing of a program.
    Disasm(SourceArgs),

    /// List the built-in programs.
    Programs,
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Built-in program to use (see `sim programs`).
    #[arg(short, long)]
    program: Option<String>,

    /// Program file: `.bin` raw big-endian image, anything else a hex listing.
    #[arg(short, long)]
    file: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RunArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Stop after this many steps (overrides the config file).
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Never stop because the PC left the program area.
    #[arg(long)]
    no_slack: bool,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Suppress the per-cycle trace; print only the summary.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => cmd_run(&args),
        Commands::Disasm(args) => cmd_disasm(&args),
        Commands::Programs => cmd_programs(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Builds the effective configuration from the file and command-line overrides.
fn load_config(args: &RunArgs) -> Result<Config, CliError> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(n) = args.max_cycles {
        config.general.max_cycles = n;
    }
    if args.no_slack {
        config.general.program_slack = None;
    }
    if args.quiet {
        config.general.trace_instructions = false;
    }
    Ok(config)
}

/// Loads the program, drives it to a stop, and renders the trace and summary.
fn cmd_run(args: &RunArgs) -> Result<(), CliError> {
    let config = load_config(args)?;
    let (source, words) =
        programs::resolve(args.source.program.as_deref(), args.source.file.as_deref())?;

    let mut sim = Simulator::with_program(&config, &words)?;
    let policy = StopPolicy::new(&config, words.len());
    let mut renderer = render::renderer(args.format, config.general.trace_instructions, true);

    let mut out = BufWriter::new(io::stdout().lock());
    renderer.start(&mut out, &source, words.len())?;
    let report = driver::run(&mut sim, &policy, |outcome, sim| {
        renderer.step(&mut out, outcome, &sim.cpu)
    })?;
    renderer.finish(&mut out, &report, &sim)?;
    out.flush()?;
    Ok(())
}

/// Prints `address: word  assembly` for every word of the program.
fn cmd_disasm(args: &SourceArgs) -> Result<(), CliError> {
    let (_, words) = programs::resolve(args.program.as_deref(), args.file.as_deref())?;
    let mut out = BufWriter::new(io::stdout().lock());
    for (i, word) in words.iter().enumerate() {
        writeln!(out, "0x{:08x}: {word:08x}  {}", i * 4, disassemble(*word))?;
    }
    out.flush()?;
    Ok(())
}

/// Lists the built-in programs.
fn cmd_programs() -> Result<(), CliError> {
    let mut out = io::stdout().lock();
    for sample in programs::SAMPLES {
        let marker = if sample.name == programs::DEFAULT_PROGRAM {
            " (default)"
        } else {
            ""
        };
        writeln!(out, "{:<16} {}{marker}", sample.name, sample.about)?;
    }
    Ok(())
}
