//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, and decoding logic for
//! the reduced RV32 integer subset executed by the core.
//!
//! # Supported classes
//!
//! LUI, AUIPC, JAL, JALR, conditional branches, LW, SW, register-immediate and
//! register-register arithmetic, SYSTEM (retired without effect) and HALT.

/// Register name mappings.
pub mod abi;

/// Instruction class derived from the major opcode.
pub mod class;

/// Immediate reconstruction for all instruction formats.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Base integer encodings (opcodes and function codes).
pub mod rv32i;

/// Mnemonic table.
pub mod table;

pub use class::InstClass;
pub use instruction::{Decoded, InstructionBits};
