//! Single-cycle RISC-V simulator library.
//!
//! This crate implements an instruction-level simulator for a reduced RV32
//! integer subset with the following:
//! 1. **Core:** One fetch, decode, execute, memory and commit pass per instruction.
//! 2. **Memory:** A single flat, bounds-checked byte array for code and data.
//! 3. **ISA:** Instruction classes, immediate decoding, mnemonics and disassembly.
//! 4. **Simulation:** Boot image loading, bounded runs and state snapshots.
//!
//! # Examples
//!
//! ```
//! use rvseq_core::{Config, Simulator, Status};
//!
//! let image = "0x000: 00a00513 | addi a0, x0, 10\n0x004: 00000000 | halt\n";
//! let mut sim = Simulator::new(Config::default());
//! assert_eq!(sim.load(image.as_bytes()).unwrap(), 8);
//! let before = sim.snapshot();
//!
//! let result = sim.run(100);
//! assert_eq!(result.executed, 2);
//! assert_eq!(result.status, Status::Halted);
//! assert_eq!(sim.cpu.regs.read(10), 10);
//! let diff = before.diff(&sim.snapshot());
//! assert_eq!(diff.regs.len(), 1);
//! assert!(diff.mem.is_empty());
//! ```

/// Common types and constants (errors, register file, status codes).
pub mod common;
/// Simulator configuration (defaults and JSON loading).
pub mod config;
/// CPU core (arch state, cycle stages, functional units).
pub mod core;
/// Instruction set (classes, decoding, ABI names, mnemonics).
pub mod isa;
/// Simulation driver, image loader and snapshots.
pub mod sim;
/// Memory subsystem.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory and cycle state.
pub use crate::core::Cpu;
/// Cycle outcome.
pub use crate::common::Status;
/// Top-level driver; construct with `Simulator::new`.
pub use crate::sim::{RunResult, Simulator};
