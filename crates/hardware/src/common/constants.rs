//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Memory Constants:** Default and large memory sizes, block granularity.
//! 2. **Instruction Constants:** Instruction width and the word size of the datapath.
//! 3. **Register Constants:** Register-file geometry and the "none" sentinel.

/// Default memory capacity in bytes (8 KiB).
pub const MEM_SIZE: usize = 1 << 13;

/// Memory capacity used when a large memory is requested (64 KiB).
pub const BIG_MEM_SIZE: usize = 1 << 16;

/// Granularity, in bytes, to which every memory capacity is rounded up.
///
/// This is also the row width used when dumping memory.
pub const BLOCK_SIZE: usize = 32;

/// Size of a standard (32-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Width of a machine word (register, address, data) in bytes.
pub const WORD_SIZE: usize = 4;

/// Width of a double word in bytes.
pub const DOUBLE_SIZE: usize = 8;

/// Number of architectural general-purpose registers (`x0`-`x31`).
pub const NUM_GPRS: usize = 32;

/// Register index used when an instruction does not name a register.
///
/// Reads from this index yield zero and writes are discarded.
pub const REG_NONE: usize = NUM_GPRS;

/// Number of word slots held by the register file: 32 GPRs plus the "none" slot.
pub const REG_SLOTS: usize = NUM_GPRS + 1;

/// Default instruction budget for a single run.
pub const DEFAULT_INSTRUCTION_LIMIT: u64 = 10_000;
