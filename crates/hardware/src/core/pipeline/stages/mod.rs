//! Cycle step implementations.
//!
//! This module contains the individual steps of one instruction cycle. It includes:
//! 1. **Fetch:** Reads the instruction word at the PC and classifies it.
//! 2. **Decode:** Extracts fields, derives control signals and reads registers.
//! 3. **Execute:** Performs the ALU operation and resolves branches and jumps.
//! 4. **Memory:** Performs the load or validates the store address.
//! 5. **Writeback:** Commits the previous cycle's writes at the start of a cycle.

/// Instruction decode step.
pub mod decode;

/// Instruction execute step.
pub mod execute;

/// Instruction fetch step.
pub mod fetch;

/// Memory access step.
pub mod memory;

/// Commit of the previous cycle's writes.
pub mod writeback;

/// Decode step entry point.
pub use decode::decode_stage;
/// Execute step entry point.
pub use execute::execute_stage;
/// Fetch step entry point.
pub use fetch::fetch_stage;
/// Memory step entry point.
pub use memory::mem_stage;
/// Commit entry point.
pub use writeback::wb_stage;
