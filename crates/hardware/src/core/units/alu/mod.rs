//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 32-bit integer ALU used in the Execute stage.
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      And, Xor, Or, Slt, Sltu, Sgtu
//! - [`shifts`]:     Sll, Srl, Sra
//! - [`flags`]:      Condition-code derivation for add, subtract and logic results

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Condition-code derivation.
pub mod flags;

/// Bitwise logical and comparison operations.
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::core::arch::cc::ConditionCode;
use crate::core::pipeline::signals::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Clone, Copy, Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand (also the shift amount for shifts)
    ///
    /// # Returns
    ///
    /// The 32-bit result. [`AluOp::Nop`] yields 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvseq_core::core::units::alu::Alu;
    /// use rvseq_core::core::pipeline::signals::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 42, 8), 50);
    /// // Subtraction takes the second operand minus the first.
    /// assert_eq!(Alu::execute(AluOp::Sub, 8, 42), 34);
    /// assert_eq!(Alu::execute(AluOp::Sll, 0x1, 4), 0x10);
    /// assert_eq!(Alu::execute(AluOp::Slt, -5_i32 as u32, 10), 1);
    /// assert_eq!(Alu::execute(AluOp::Nop, 1, 2), 0);
    /// ```
    pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Xor | AluOp::Or | AluOp::Slt | AluOp::Sltu | AluOp::Sgtu => {
                logic::execute(op, a, b)
            }
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b),
            AluOp::Nop => 0,
        }
    }

    /// Derives the condition code of an operation.
    ///
    /// # Returns
    ///
    /// `Some` flags for add, subtract and logic operations; `None` for
    /// operations that leave the condition code untouched.
    pub fn condition_code(op: AluOp, a: u32, b: u32) -> Option<ConditionCode> {
        flags::compute(op, a, b)
    }
}
