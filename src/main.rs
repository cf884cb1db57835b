//! table-robot CLI
//!
//! With no arguments, reads commands interactively from stdin until `EXIT`,
//! `QUIT` or end of input. With one or more files, runs each file as an
//! independent batch.
//!
//! # Environment Variables
//!
//! - `TABLE_ROBOT_WIDTH`: table width (default 5)
//! - `TABLE_ROBOT_HEIGHT`: table height (default 5)
//! - `RUST_LOG`: log filter when neither `--debug` nor `--verbose` is given

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use table_robot::{
    ConsoleWriter, FileInput, InteractiveInput, RecordingSink, Simulator, SimulatorConfig, Table,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Toy robot simulator on a square table
#[derive(Parser, Debug)]
#[command(name = "table-robot")]
#[command(version, about, long_about = None)]
struct Args {
    /// Command files to run in order (interactive mode when omitted)
    files: Vec<PathBuf>,

    /// Table width
    #[arg(long, env = "TABLE_ROBOT_WIDTH", default_value_t = Table::DEFAULT_SIZE)]
    width: u32,

    /// Table height
    #[arg(long, env = "TABLE_ROBOT_HEIGHT", default_value_t = Table::DEFAULT_SIZE)]
    height: u32,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Print one JSON result per command line (file mode only)
    #[arg(long, requires = "files")]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> SimulatorConfig {
        SimulatorConfig {
            table_width: self.width,
            table_height: self.height,
            color: !self.no_color,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Terminal filter: --debug > --verbose > RUST_LOG env > default "warn"
    let filter = if args.debug {
        EnvFilter::new("debug")
    } else if args.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!args.no_color)
        .with_writer(std::io::stderr)
        .init();

    let config = args.config();
    info!(?config, "starting");

    if args.files.is_empty() {
        run_interactive(&config)
    } else if args.json {
        run_json(&config, &args.files)
    } else {
        run_files(&config, &args.files)
    }
}

fn run_interactive(config: &SimulatorConfig) -> Result<()> {
    let mut sim = Simulator::new(config, ConsoleWriter::new(config.color))
        .context("Invalid table configuration")?;
    install_interrupt_handler(ConsoleWriter::new(config.color))?;
    let stdin = std::io::stdin();
    let mut input = InteractiveInput::new(stdin.lock());

    sim.run_interactive(&mut input, || prompt(&mut std::io::stdout()));
    println!();
    Ok(())
}

/// Writes the `> ` prompt. A broken terminal is logged, not fatal.
fn prompt(out: &mut impl Write) {
    if let Err(e) = out.write_all(b"> ").and_then(|()| out.flush()) {
        warn!(error = %e, "failed to write prompt");
    }
}

/// Ends the interactive session cleanly on Ctrl+C.
#[cfg(unix)]
fn install_interrupt_handler(mut console: ConsoleWriter) -> Result<()> {
    use signal_hook::consts::SIGINT;
    use signal_hook::iterator::Signals;
    use table_robot::OutputSink;

    let mut signals = Signals::new([SIGINT]).context("Failed to install SIGINT handler")?;
    std::thread::spawn(move || {
        if signals.forever().next().is_some() {
            info!("interrupted");
            console.write("");
            console.write_info("Shutting down...");
            std::process::exit(0);
        }
    });
    Ok(())
}

#[cfg(not(unix))]
fn install_interrupt_handler(_console: ConsoleWriter) -> Result<()> {
    Ok(())
}

fn run_files(config: &SimulatorConfig, files: &[PathBuf]) -> Result<()> {
    let mut sim = Simulator::new(config, ConsoleWriter::new(config.color))
        .context("Invalid table configuration")?;

    for (i, path) in files.iter().enumerate() {
        let mut input = FileInput::open(path)
            .with_context(|| format!("Failed to process file: {}", path.display()))?;
        if i > 0 {
            sim.reset();
        }
        sim.run_file(&mut input);
    }
    Ok(())
}

fn run_json(config: &SimulatorConfig, files: &[PathBuf]) -> Result<()> {
    let mut sim =
        Simulator::new(config, RecordingSink::new()).context("Invalid table configuration")?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for (i, path) in files.iter().enumerate() {
        let mut input = FileInput::open(path)
            .with_context(|| format!("Failed to process file: {}", path.display()))?;
        if i > 0 {
            sim.reset();
        }
        for entry in sim.run_file_transcript(&mut input) {
            serde_json::to_writer(&mut out, &entry)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
