//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions and the structure holding the fields of
//! the instruction decoded in the current cycle.

use crate::common::constants::REG_NONE;
use crate::isa::class::InstClass;

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the first source register field (bits 15-19).
pub const RS1_MASK: u32 = 0x1F;
/// Bit mask for extracting the second source register field (bits 20-24).
pub const RS2_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6), which selects the instruction class.
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    ///
    /// Distinguishes alternate encodings that share a funct3 (e.g., ADD vs SUB).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & RD_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & RS1_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & RS2_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }
}

/// Fields of the instruction fetched in the current cycle.
///
/// Fields the instruction class does not use are zero (function codes and
/// immediate) or [`REG_NONE`] (register indices).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Address the instruction was fetched from.
    pub fetch_addr: u32,
    /// Raw 32-bit instruction encoding (0 after a failed fetch).
    pub raw: u32,
    /// Instruction class.
    pub class: InstClass,
    /// Function code field 3.
    pub funct3: u32,
    /// Function code field 7.
    pub funct7: u32,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Destination register index.
    pub rd: usize,
    /// Sign-extended immediate value.
    pub imm: i32,
    /// Set when the fetch itself failed.
    pub imem_error: bool,
    /// Whether the class is part of the supported subset.
    pub valid: bool,
}

impl Default for Decoded {
    fn default() -> Self {
        Self {
            fetch_addr: 0,
            raw: 0,
            class: InstClass::Halt,
            funct3: 0,
            funct7: 0,
            rs1: REG_NONE,
            rs2: REG_NONE,
            rd: REG_NONE,
            imm: 0,
            imem_error: false,
            valid: true,
        }
    }
}
