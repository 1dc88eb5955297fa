//! Simulator: owns the CPU together with the configuration that built it.
//!
//! The simulator is the entry point drivers use. It loads a boot image, runs
//! the CPU for a bounded number of instructions and exposes snapshots of the
//! resulting state.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::common::error::{LoadError, SimError};
use crate::common::status::Status;
use crate::config::Config;
use crate::core::Cpu;
use crate::sim::loader;
use crate::sim::snapshot::Snapshot;

/// Outcome of [`Simulator::run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunResult {
    /// Number of cycles stepped, including the one that stopped the run.
    pub executed: u64,
    /// Status of the last cycle, or AOK if the budget ran out first.
    pub status: Status,
}

/// Top-level simulator: CPU state plus its configuration.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU architectural and cycle state.
    pub cpu: Cpu,
    /// Configuration the CPU was built from.
    pub config: Config,
}

impl Simulator {
    /// Creates a simulator with zero-filled memory.
    pub fn new(config: Config) -> Self {
        let cpu = Cpu::from_config(&config);
        Self { cpu, config }
    }

    /// Loads a boot image from a reader.
    ///
    /// # Returns
    ///
    /// The number of bytes loaded, or [`LoadError::Empty`] if the image held none.
    pub fn load<R: BufRead>(&mut self, reader: R) -> Result<usize, LoadError> {
        match loader::load_image(reader, &mut self.cpu.mem)? {
            0 => Err(LoadError::Empty),
            n => Ok(n),
        }
    }

    /// Loads a boot image file.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize, SimError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SimError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(self.load(BufReader::new(file))?)
    }

    /// Executes a single cycle.
    pub fn step(&mut self) -> Status {
        self.cpu.step()
    }

    /// Runs until a cycle stops the machine or `max_instr` cycles have been stepped.
    ///
    /// When the budget runs out the last cycle's writes are committed, so the
    /// state reflects every instruction that was executed.
    pub fn run(&mut self, max_instr: u64) -> RunResult {
        let mut executed = 0;
        let mut status = Status::Aok;
        while executed < max_instr {
            status = self.cpu.step();
            executed += 1;
            if status.is_terminal() {
                break;
            }
        }
        if !status.is_terminal() {
            self.cpu.commit_pending();
        }
        tracing::debug!("{executed} instructions executed, status {status}");
        RunResult { executed, status }
    }

    /// Runs with the instruction budget from the configuration.
    pub fn run_to_limit(&mut self) -> RunResult {
        self.run(self.config.general.instruction_limit)
    }

    /// Captures the current architectural state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.cpu)
    }

    /// Resets registers, PC and condition code; memory keeps its contents.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }
}
