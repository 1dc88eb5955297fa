//! Architectural state beyond the register file.
//!
//! The register file itself lives in [`common::reg`](crate::common::reg); this
//! module holds the remaining programmer-visible flag state.

/// Condition-code flags (zero, sign, overflow).
pub mod cc;

pub use cc::ConditionCode;
