//! Register File.
//!
//! This module provides the `RegisterFile` struct, the architectural integer register
//! state of the core. It provides:
//! 1. **Storage:** A [`Memory`] of one word slot per register plus the "none" slot.
//! 2. **Invariant Enforcement:** Register `x0` and the "none" slot always read as zero.
//! 3. **Observability:** Whole-file copies for snapshots and a debug dump.

use crate::common::constants::{NUM_GPRS, REG_NONE, REG_SLOTS, WORD_SIZE};
use crate::isa::abi;
use crate::soc::memory::Memory;

/// Integer register file holding `x0`-`x31` and the "none" slot.
///
/// The file is a specialization of [`Memory`]: register `i` lives in the word
/// at byte offset `4 * i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    slots: Memory,
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            slots: Memory::new(REG_SLOTS * WORD_SIZE),
        }
    }

    /// Reads a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index. `x0`, the "none" slot and any index past it read as 0.
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the register.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 || idx >= REG_NONE {
            return 0;
        }
        self.slots.read_u32(Self::offset(idx)).unwrap_or(0)
    }

    /// Writes a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index. Writes to `x0` and the "none" slot are discarded.
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx == 0 || idx >= REG_NONE {
            return;
        }
        // Offsets below REG_NONE always fall inside the slot memory.
        let _ = self.slots.write_u32(Self::offset(idx), val);
    }

    /// Sets every register back to zero.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Returns the values of `x0`-`x31` in index order.
    pub fn to_array(&self) -> [u32; NUM_GPRS] {
        std::array::from_fn(|i| self.read(i))
    }

    /// Dumps the contents of all general-purpose registers to stdout.
    ///
    /// Registers are printed in pairs using their conventional names.
    pub fn dump(&self) {
        for i in (0..NUM_GPRS).step_by(2) {
            println!(
                "{:<3}={:#010x} {:<3}={:#010x}",
                abi::reg_name(i),
                self.read(i),
                abi::reg_name(i + 1),
                self.read(i + 1)
            );
        }
    }

    #[inline]
    fn offset(idx: usize) -> u32 {
        (idx * WORD_SIZE) as u32
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
