//! Single-cycle RISC-V simulator CLI.
//!
//! This binary runs one boot image to completion in TTY mode. It performs:
//! 1. **Load:** Read a `0xADDR: HEXBYTES` image from a file or stdin.
//! 2. **Run:** Step the machine until it halts, faults or hits the instruction limit.
//! 3. **Report:** Print the final status and every register and memory word the run changed.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use rvseq_core::common::SimError;
use rvseq_core::common::constants::BIG_MEM_SIZE;
use rvseq_core::stats::STATS_SECTIONS;
use rvseq_core::{Config, Simulator};
use tracing_subscriber::EnvFilter;

/// Name printed before anything else.
const SIM_NAME: &str = "Risc-v Processor: seq";

#[derive(Parser, Debug)]
#[command(
    name = "ssim",
    author,
    version,
    about = "Single-cycle RISC-V simulator",
    long_about = "Run a boot image on the single-cycle core and report the state it changed.\n\nThe image is read from FILE, or from stdin when no file is given.\n\nExamples:\n  ssim prog.yo\n  ssim -l 500 -v 1 < prog.yo\n  ssim --config machine.json --stats prog.yo"
)]
struct Cli {
    /// Boot image to load (default: stdin).
    file: Option<PathBuf>,

    /// Instruction limit (default: from the configuration, 10000).
    #[arg(short = 'l', long = "limit")]
    limit: Option<u64>,

    /// Verbosity: 0 prints nothing, 1 prints the result, 2 also traces each instruction.
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=2))]
    verbosity: u8,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use a 64 KiB memory instead of the configured size.
    #[arg(long)]
    big_mem: bool,

    /// Dump the final registers and every non-zero memory row.
    #[arg(long)]
    dump: bool,

    /// Print statistics sections after the run (summary, instruction_mix, branch); all when none are named.
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    stats: Option<Vec<String>>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path).unwrap_or_else(|e| fail(&e)),
        None => Config::default(),
    };
    if cli.big_mem {
        config.memory.size = BIG_MEM_SIZE;
    }
    if let Some(limit) = cli.limit {
        config.general.instruction_limit = limit;
    }
    config.general.trace_instructions |= cli.verbosity >= 2;
    tracing::debug!("Using configuration {config:?}");

    let mut sim = Simulator::new(config);
    println!("{SIM_NAME}");

    let loaded = match &cli.file {
        Some(path) => sim.load_file(path),
        None => sim.load(io::stdin().lock()).map_err(SimError::from),
    };
    let byte_cnt = loaded.unwrap_or_else(|e| fail(&e));
    if cli.verbosity >= 2 {
        println!("{byte_cnt} bytes of code read");
    }

    let before = sim.snapshot();
    let result = sim.run_to_limit();
    let diff = before.diff(&sim.snapshot());

    if cli.verbosity > 0 {
        println!("{} instructions executed", result.executed);
        println!("Status = {}", result.status);
        print!("{diff}");
    }

    if cli.dump {
        sim.cpu.dump_state();
        if let Err(e) = sim.snapshot().dump_memory(&mut io::stdout().lock()) {
            fail(&e);
        }
    }

    if let Some(sections) = &cli.stats {
        let wanted: Vec<&str> = sections.iter().map(String::as_str).collect();
        if let Some(bad) = wanted.iter().find(|s| !STATS_SECTIONS.contains(*s)) {
            eprintln!("Unknown stats section '{bad}'; expected one of {STATS_SECTIONS:?}");
            process::exit(1);
        }
        let printed = if wanted.is_empty() {
            sim.cpu.stats.print()
        } else {
            sim.cpu.stats.write_sections(&mut io::stdout().lock(), &wanted)
        };
        if let Err(e) = printed {
            fail(&e);
        }
    }
}

/// Installs the log subscriber; `RUST_LOG` overrides the verbosity-derived level.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "error",
        1 => "warn",
        _ => "info",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

fn fail(err: &dyn std::error::Error) -> ! {
    eprintln!("{err}");
    process::exit(1);
}
