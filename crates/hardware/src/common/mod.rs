//! Common utilities and types used throughout the simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** System-wide constants for memory, instructions, and registers.
//! 2. **Memory Access:** Definitions for categorizing memory operations (Fetch/Read/Write).
//! 3. **Error Handling:** Memory, loader and top-level simulator errors.
//! 4. **Register Management:** The integer register file.
//! 5. **Status:** The per-cycle outcome code.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types.
pub mod error;

/// Register file implementation.
pub mod reg;

/// Cycle status codes.
pub mod status;

pub use data::AccessType;
pub use error::{LoadError, MemoryError, SimError};
pub use reg::RegisterFile;
pub use status::Status;
