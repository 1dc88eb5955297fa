//! Simulation driver, boot image loading and state snapshots.

pub mod loader;
pub mod simulator;
pub mod snapshot;

pub use simulator::{RunResult, Simulator};
pub use snapshot::{Snapshot, StateDiff};
