//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL), and
//! shift-right arithmetic (SRA) on 32-bit values.
//!
//! Register shifts mask the amount to 5 bits before it reaches the ALU.
//! Immediate shifts carry a 6-bit amount: logical shifts by 32 or more give 0
//! and arithmetic shifts saturate at 31, filling the word with the sign bit.

use crate::core::pipeline::signals::AluOp;

/// Bit mask for the shift amount of register shifts (5 bits: 0-31).
pub const SHAMT_MASK_REG: u32 = 0x1f;

/// Largest arithmetic shift that still changes the result.
const MAX_SRA: u32 = 31;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount.
///
/// # Returns
///
/// The 32-bit result. Returns `0` for non-shift opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Sll => a.checked_shl(b).unwrap_or(0),
        AluOp::Srl => a.checked_shr(b).unwrap_or(0),
        AluOp::Sra => ((a as i32) >> b.min(MAX_SRA)) as u32,
        _ => 0,
    }
}
