//! Per-cycle value structures.
//!
//! This module defines the values carried between the steps of one cycle and
//! the writes carried from one cycle into the next:
//! 1. **Cycle Values:** Every intermediate value of the current cycle, written once.
//! 2. **Pending Commit:** Register, memory and flag writes applied at the start of
//!    the following cycle.

use crate::common::constants::REG_NONE;
use crate::common::status::Status;
use crate::core::arch::cc::ConditionCode;
use crate::core::pipeline::signals::ControlSignals;
use crate::isa::instruction::Decoded;

/// Intermediate values of the cycle in flight.
///
/// Cleared at the start of every cycle and on reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleValues {
    /// Fields of the fetched instruction.
    pub decoded: Decoded,
    /// Control signals of the instruction class.
    pub signals: ControlSignals,
    /// Address of the sequentially next instruction (fetch address + 4).
    pub val_p: u32,
    /// Value read from `rs1`.
    pub val_a: u32,
    /// Value read from `rs2`.
    pub val_b: u32,
    /// ALU operand A.
    pub alu_a: u32,
    /// ALU operand B.
    pub alu_b: u32,
    /// ALU result (the link value for jumps).
    pub val_e: u32,
    /// Flags to install at commit, if the operation defines them.
    pub cc: Option<ConditionCode>,
    /// Destination register of the ALU result.
    pub dst_e: usize,
    /// Destination register of the loaded value.
    pub dst_m: usize,
    /// Data memory address.
    pub mem_addr: u32,
    /// Data to store.
    pub mem_data: u32,
    /// Loaded value.
    pub val_m: u32,
    /// The data access failed.
    pub dmem_error: bool,
    /// The branch condition held.
    pub branch_taken: bool,
    /// Address of the next instruction.
    pub next_pc: u32,
    /// Status of the cycle.
    pub status: Status,
}

impl Default for CycleValues {
    fn default() -> Self {
        Self {
            decoded: Decoded::default(),
            signals: ControlSignals::default(),
            val_p: 0,
            val_a: 0,
            val_b: 0,
            alu_a: 0,
            alu_b: 0,
            val_e: 0,
            cc: None,
            dst_e: REG_NONE,
            dst_m: REG_NONE,
            mem_addr: 0,
            mem_data: 0,
            val_m: 0,
            dmem_error: false,
            branch_taken: false,
            next_pc: 0,
            status: Status::Aok,
        }
    }
}

/// A store scheduled for the next commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingStore {
    /// Byte address, already bounds-checked.
    pub addr: u32,
    /// Word to write.
    pub data: u32,
}

/// Writes produced by one cycle, applied at the start of the next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingCommit {
    /// Destination of the ALU result.
    pub dst_e: usize,
    /// ALU result.
    pub val_e: u32,
    /// Destination of the loaded value.
    pub dst_m: usize,
    /// Loaded value.
    pub val_m: u32,
    /// Store to perform, if any.
    pub store: Option<PendingStore>,
    /// Flags to install, if any.
    pub cc: Option<ConditionCode>,
    /// Program counter of the next instruction.
    pub next_pc: u32,
}

impl PendingCommit {
    /// Collects the writes of a completed cycle.
    pub fn from_cycle(cycle: &CycleValues) -> Self {
        Self {
            dst_e: cycle.dst_e,
            val_e: cycle.val_e,
            dst_m: cycle.dst_m,
            val_m: cycle.val_m,
            store: cycle.signals.mem_write.then_some(PendingStore {
                addr: cycle.mem_addr,
                data: cycle.mem_data,
            }),
            cc: cycle.cc,
            next_pc: cycle.next_pc,
        }
    }
}
