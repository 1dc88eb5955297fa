//! Reduced RISC-V Base Integer Instruction Set (RV32 subset).
//!
//! Defines the encodings understood by the simulated core.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes (bits 6-0) that select the instruction class.
//! - `funct3`: Minor opcodes distinguishing instructions within a class.
//! - `funct7`: Additional opcode bits for R-type and shift instructions.

/// Function code 3 definitions for base integer operations.
pub mod funct3;

/// Function code 7 definitions for base integer operations.
pub mod funct7;

/// Base integer instruction set opcodes.
pub mod opcodes;
