//! Branch Resolution Unit (BRU).
//!
//! Resolves conditional branches by comparing the two source operands
//! directly; the condition code is never consulted. The comparison is
//! selected by funct3:
//!
//! | funct3 | condition          |
//! |--------|--------------------|
//! | 0      | `a == b`           |
//! | 1      | `a != b`           |
//! | 4      | `a < b` (signed)   |
//! | 5      | `a > b` (signed)   |
//! | 6      | `a < b` (unsigned) |
//! | 7      | `a >= b` (unsigned)|
//!
//! Funct3 values 2 and 3 are never taken. Funct3 5 tests strictly greater,
//! not greater-or-equal as canonical RISC-V does.

use crate::isa::rv32i::funct3;

/// Branch comparator.
#[derive(Clone, Copy, Debug)]
pub struct Bru;

impl Bru {
    /// Decides whether a branch is taken.
    ///
    /// # Arguments
    ///
    /// * `f3` - The branch funct3.
    /// * `a`  - Value of `rs1`.
    /// * `b`  - Value of `rs2`.
    pub fn taken(f3: u32, a: u32, b: u32) -> bool {
        match f3 {
            funct3::BEQ => a == b,
            funct3::BNE => a != b,
            funct3::BLT => (a as i32) < (b as i32),
            funct3::BGT => (a as i32) > (b as i32),
            funct3::BLTU => a < b,
            funct3::BGEU => a >= b,
            _ => false,
        }
    }
}
