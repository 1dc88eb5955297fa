//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the simulator. It provides:
//! 1. **Cycles:** Total cycles and retired instructions.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump, system).
//! 3. **Control flow:** Conditional branches executed and taken.

use std::io::{self, Write};
use std::time::Instant;

use crate::common::status::Status;
use crate::isa::class::InstClass;

/// Simulation statistics tracking execution metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total cycles stepped, including the final halting or faulting cycle.
    pub cycles: u64,
    /// Number of instructions that completed with status AOK.
    pub instructions_retired: u64,

    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of conditional branch instructions retired.
    pub inst_branch: u64,
    /// Count of JAL/JALR instructions retired.
    pub inst_jump: u64,
    /// Count of ALU instructions (LUI, AUIPC, OP-IMM, OP) retired.
    pub inst_alu: u64,
    /// Count of SYSTEM instructions retired.
    pub inst_system: u64,

    /// Number of conditional branches that were taken.
    pub branches_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            inst_alu: 0,
            inst_system: 0,
            branches_taken: 0,
        }
    }
}

/// Section names for selective stats output.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "branch"];

impl SimStats {
    /// Records one completed cycle.
    ///
    /// # Arguments
    ///
    /// * `class` - Class of the instruction executed in the cycle.
    /// * `status` - Status the cycle produced.
    /// * `branch_taken` - Whether a conditional branch was taken.
    pub fn record(&mut self, class: InstClass, status: Status, branch_taken: bool) {
        self.cycles += 1;
        if status != Status::Aok {
            return;
        }
        self.instructions_retired += 1;
        match class {
            InstClass::Load => self.inst_load += 1,
            InstClass::Store => self.inst_store += 1,
            InstClass::Branch => {
                self.inst_branch += 1;
                if branch_taken {
                    self.branches_taken += 1;
                }
            }
            InstClass::Jal | InstClass::Jalr => self.inst_jump += 1,
            InstClass::Lui | InstClass::Auipc | InstClass::OpImm | InstClass::Op => {
                self.inst_alu += 1;
            }
            InstClass::System => self.inst_system += 1,
            InstClass::Halt | InstClass::Unknown(_) => {}
        }
    }

    /// Writes the requested statistics sections.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. Pass an
    /// empty slice to write all sections.
    ///
    /// # Arguments
    ///
    /// * `out` - Destination of the report.
    /// * `sections` - Section names to write, or empty for all.
    pub fn write_sections<W: Write>(&self, out: &mut W, sections: &[&str]) -> io::Result<()> {
        let want = |s: &str| sections.is_empty() || sections.contains(&s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1) as f64;

        writeln!(out, "==========================================================")?;
        if want("summary") {
            let khz = if seconds > 0.0 {
                (self.cycles as f64 / seconds) / 1000.0
            } else {
                0.0
            };
            writeln!(out, "SIMULATION STATISTICS")?;
            writeln!(out, "host_seconds             {seconds:.4} s")?;
            writeln!(out, "sim_cycles               {}", self.cycles)?;
            writeln!(out, "sim_freq                 {khz:.2} kHz")?;
            writeln!(out, "sim_insts                {}", self.instructions_retired)?;
            writeln!(out, "----------------------------------------------------------")?;
        }
        if want("instruction_mix") {
            writeln!(out, "INSTRUCTION MIX")?;
            for (name, count) in [
                ("op.alu", self.inst_alu),
                ("op.load", self.inst_load),
                ("op.store", self.inst_store),
                ("op.branch", self.inst_branch),
                ("op.jump", self.inst_jump),
                ("op.system", self.inst_system),
            ] {
                writeln!(
                    out,
                    "  {name:<22} {count} ({:.2}%)",
                    (count as f64 / instr) * 100.0
                )?;
            }
            writeln!(out, "----------------------------------------------------------")?;
        }
        if want("branch") {
            let rate = if self.inst_branch > 0 {
                100.0 * (self.branches_taken as f64 / self.inst_branch as f64)
            } else {
                0.0
            };
            writeln!(out, "BRANCHES")?;
            writeln!(out, "  branch.executed        {}", self.inst_branch)?;
            writeln!(out, "  branch.taken           {}", self.branches_taken)?;
            writeln!(out, "  branch.taken_rate      {rate:.2}%")?;
        }
        writeln!(out, "==========================================================")
    }

    /// Prints all statistics sections to stdout.
    pub fn print(&self) -> io::Result<()> {
        self.write_sections(&mut io::stdout().lock(), &[])
    }
}
