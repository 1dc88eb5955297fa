//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the single live machine
//! state of a simulation. It holds:
//! 1. **Architectural State:** Program counter, register file, memory and condition code.
//! 2. **Cycle State:** Intermediate values of the current cycle and the writes it defers.
//! 3. **Observability:** Statistics and the per-instruction trace switch.

/// Cycle stepping and deferred commit.
pub mod execution;

use crate::common::RegisterFile;
use crate::config::Config;
use crate::core::arch::cc::ConditionCode;
use crate::core::pipeline::latches::{CycleValues, PendingCommit};
use crate::soc::Memory;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// Address of the instruction fetched by the most recent cycle.
    pub pc: u32,
    /// Integer register file.
    pub regs: RegisterFile,
    /// Instruction and data memory.
    pub mem: Memory,
    /// Condition-code flags.
    pub cc: ConditionCode,
    /// Intermediate values of the most recent cycle.
    pub cycle: CycleValues,
    /// Writes of the most recent cycle, applied at the start of the next.
    pub pending: Option<PendingCommit>,
    /// Execution statistics.
    pub stats: SimStats,
    /// Log every fetched instruction and committed store.
    pub trace: bool,
}

impl Cpu {
    /// Creates a CPU over the given memory.
    ///
    /// # Arguments
    ///
    /// * `mem` - Memory, typically already holding the boot image.
    /// * `config` - The simulator configuration parameters.
    ///
    /// # Returns
    ///
    /// A CPU in the reset state.
    pub fn new(mem: Memory, config: &Config) -> Self {
        Self {
            pc: 0,
            regs: RegisterFile::new(),
            mem,
            cc: ConditionCode::DEFAULT,
            cycle: CycleValues::default(),
            pending: None,
            stats: SimStats::default(),
            trace: cfg!(feature = "always-trace") || config.general.trace_instructions,
        }
    }

    /// Creates a CPU with a zero-filled memory sized by `config`.
    pub fn from_config(config: &Config) -> Self {
        let mem = Memory::with_block_size(config.memory.size, config.memory.block_size);
        Self::new(mem, config)
    }

    /// Resets the architectural and cycle state.
    ///
    /// Registers and cycle values are zeroed, the PC returns to 0, the condition
    /// code returns to its default and any pending commit is dropped. Memory
    /// contents are left untouched.
    pub fn reset(&mut self) {
        self.pc = 0;
        self.regs.clear();
        self.cc = ConditionCode::DEFAULT;
        self.cycle = CycleValues::default();
        self.pending = None;
        self.stats = SimStats::default();
    }

    /// Dumps the register state to stdout.
    pub fn dump_state(&self) {
        println!("pc={:#010x} cc={}", self.pc, self.cc);
        self.regs.dump();
    }
}
