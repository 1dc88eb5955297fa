//! Condition-code derivation.
//!
//! Computes the zero, sign and signed-overflow flags of an ALU operation.
//! Only add, subtract and the bitwise logic operations define flags; logic
//! operations always clear overflow.

use super::arithmetic;
use super::logic;
use crate::core::arch::cc::ConditionCode;
use crate::core::pipeline::signals::AluOp;

/// Computes the flags produced by `op` on `a` and `b`.
///
/// # Arguments
///
/// * `op` - The ALU operation.
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The packed flags, or `None` if `op` does not define a condition code.
pub fn compute(op: AluOp, a: u32, b: u32) -> Option<ConditionCode> {
    let (val, overflow) = match op {
        AluOp::Add => {
            let val = arithmetic::execute(op, a, b) as i32;
            let (a, b) = (a as i32, b as i32);
            (val, (a < 0) == (b < 0) && (val < 0) != (a < 0))
        }
        AluOp::Sub => {
            let val = arithmetic::execute(op, a, b) as i32;
            let (a, b) = (a as i32, b as i32);
            (val, (a > 0) == (b < 0) && (val < 0) != (b < 0))
        }
        AluOp::And | AluOp::Xor | AluOp::Or => (logic::execute(op, a, b) as i32, false),
        _ => return None,
    };
    Some(ConditionCode::pack(val == 0, val < 0, overflow))
}
