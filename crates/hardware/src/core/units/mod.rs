//! Execution units.
//!
//! This module contains the functional units used by the Execute stage: the
//! integer ALU with its condition-code logic, and the branch comparator.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit.
pub mod bru;
