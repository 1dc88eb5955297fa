//! Machine State Snapshots.
//!
//! A [`Snapshot`] is an owned copy of the architectural state: PC, condition
//! code, registers and memory. Two snapshots can be compared to report what a
//! run changed, word by word for memory and by name for registers.

use std::fmt;
use std::io::{self, Write};

use crate::common::constants::{BLOCK_SIZE, NUM_GPRS, WORD_SIZE};
use crate::core::Cpu;
use crate::core::arch::cc::ConditionCode;
use crate::isa::abi;
use crate::soc::Memory;

/// Copy of the architectural state at one point in time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// Program counter.
    pub pc: u32,
    /// Condition code.
    pub cc: ConditionCode,
    /// Values of `x0`-`x31`.
    pub regs: [u32; NUM_GPRS],
    /// Full memory image.
    pub mem: Memory,
}

impl Snapshot {
    /// Captures the state of a CPU.
    ///
    /// Writes still pending from the last cycle are not included; run the
    /// CPU to a stop (or call [`Cpu::commit_pending`]) first.
    pub fn capture(cpu: &Cpu) -> Self {
        Self {
            pc: cpu.pc,
            cc: cpu.cc,
            regs: cpu.regs.to_array(),
            mem: cpu.mem.clone(),
        }
    }

    /// Compares this (older) snapshot against a newer one.
    pub fn diff(&self, newer: &Self) -> StateDiff {
        let regs = self
            .regs
            .iter()
            .zip(newer.regs.iter())
            .enumerate()
            .filter(|(_, (old, new))| old != new)
            .map(|(reg, (&old, &new))| RegDiff { reg, old, new })
            .collect();

        StateDiff {
            pc: (self.pc != newer.pc).then_some((self.pc, newer.pc)),
            cc: (self.cc != newer.cc).then_some((self.cc, newer.cc)),
            regs,
            mem: diff_memory(&self.mem, &newer.mem),
        }
    }

    /// Writes the non-zero rows of memory, one row of [`BLOCK_SIZE`] bytes per line.
    pub fn dump_memory<W: Write>(&self, out: &mut W) -> io::Result<()> {
        dump_memory(&self.mem, out)
    }
}

/// A register whose value changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegDiff {
    /// Register index.
    pub reg: usize,
    /// Value before.
    pub old: u32,
    /// Value after.
    pub new: u32,
}

impl fmt::Display for RegDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:\t{:#010x}\t{:#010x}",
            abi::reg_name(self.reg),
            self.old,
            self.new
        )
    }
}

/// A memory word whose value changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordDiff {
    /// Byte address of the word.
    pub addr: u32,
    /// Little-endian value before.
    pub old: u32,
    /// Little-endian value after.
    pub new: u32,
}

impl fmt::Display for WordDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}:\t{:#010x}\t{:#010x}", self.addr, self.old, self.new)
    }
}

/// Everything that differs between two snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateDiff {
    /// Old and new PC, if it changed.
    pub pc: Option<(u32, u32)>,
    /// Old and new condition code, if it changed.
    pub cc: Option<(ConditionCode, ConditionCode)>,
    /// Changed registers in index order.
    pub regs: Vec<RegDiff>,
    /// Changed memory words in address order.
    pub mem: Vec<WordDiff>,
}

impl StateDiff {
    /// Returns true if the two snapshots were identical.
    pub fn is_empty(&self) -> bool {
        self.pc.is_none() && self.cc.is_none() && self.regs.is_empty() && self.mem.is_empty()
    }
}

impl fmt::Display for StateDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Changed Register State:")?;
        if let Some((old, new)) = self.pc {
            writeln!(f, "{}:\t{old:#010x}\t{new:#010x}", abi::PC_NAME)?;
        }
        for reg in &self.regs {
            writeln!(f, "{reg}")?;
        }
        if let Some((old, new)) = self.cc {
            writeln!(f, "Changed Condition Codes: {old} -> {new}")?;
        }
        writeln!(f, "Changed Memory State:")?;
        for word in &self.mem {
            writeln!(f, "{word}")?;
        }
        Ok(())
    }
}

/// Compares two memories word by word.
///
/// Only whole words present in both memories are compared.
pub fn diff_memory(old: &Memory, new: &Memory) -> Vec<WordDiff> {
    old.as_bytes()
        .chunks_exact(WORD_SIZE)
        .zip(new.as_bytes().chunks_exact(WORD_SIZE))
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(idx, (a, b))| WordDiff {
            addr: (idx * WORD_SIZE) as u32,
            old: u32::from_le_bytes([a[0], a[1], a[2], a[3]]),
            new: u32::from_le_bytes([b[0], b[1], b[2], b[3]]),
        })
        .collect()
}

/// Writes every row of memory that holds a non-zero byte.
pub fn dump_memory<W: Write>(mem: &Memory, out: &mut W) -> io::Result<()> {
    for (row, bytes) in mem.as_bytes().chunks(BLOCK_SIZE).enumerate() {
        if bytes.iter().all(|&b| b == 0) {
            continue;
        }
        write!(out, "{:#06x}:", row * BLOCK_SIZE)?;
        for (i, b) in bytes.iter().enumerate() {
            let sep = if i % WORD_SIZE == 0 { "  " } else { " " };
            write!(out, "{sep}{b:02x}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
