//! System-on-Chip (SoC) Components.
//!
//! The simulated system has a single component outside the core: one
//! byte-addressable memory holding both instructions and data.

/// Byte-addressable instruction and data memory.
pub mod memory;

pub use memory::Memory;
