//! Instruction cycle implementation.
//!
//! This module contains the single-cycle datapath. It includes the following components:
//! 1. **Latches:** The intermediate values of a cycle and the writes it defers to the next.
//! 2. **Signals:** Control signals and the pure selector functions derived from them.
//! 3. **Stages:** Fetch, Decode, Execute, Memory and Writeback steps.

/// Cycle values and pending commits.
pub mod latches;

/// Control signals and selectors.
pub mod signals;

/// Cycle step implementations (fetch, decode, execute, memory, writeback).
pub mod stages;
