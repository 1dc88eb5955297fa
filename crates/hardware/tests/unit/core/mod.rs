pub mod bru;
pub mod control_signals;
pub mod execution;
