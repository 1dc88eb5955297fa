//! Core processor implementation.
//!
//! This module contains the CPU state, the single-cycle datapath, the
//! execution units, and the architectural flag state.

/// Architectural flag state (condition code).
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Single-cycle datapath (latches, signals, stages).
pub mod pipeline;

/// Execution units (ALU, branch comparator).
pub mod units;

pub use self::cpu::Cpu;
