//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used throughout the simulator.
//! These types are used for the following:
//! 1. **Fault Reporting:** Distinguishing an instruction-memory error from a data-memory error.
//! 2. **Diagnostics:** Labelling rejected accesses in error messages and trace output.

use std::fmt;

/// Type of memory access operation.
///
/// Used to distinguish between instruction fetches, data loads, and data stores
/// when a bounds check fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch access.
    ///
    /// Occurs in the Fetch stage. A failure raises the instruction-memory error.
    Fetch,

    /// Data read access.
    ///
    /// Occurs during load instructions and the validating read of a store.
    Read,

    /// Data write access.
    ///
    /// Occurs when a store is committed at the start of the following cycle.
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch => write!(f, "fetch"),
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}
