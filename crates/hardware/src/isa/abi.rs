//! Register names.
//!
//! Defines the printable names of the integer registers and lookup in both
//! directions. Registers `x10`-`x17` carry their argument names (`a0`-`a7`);
//! every other register is named by its index.

use crate::common::constants::NUM_GPRS;

/// Register x0 (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register x1 (return address).
pub const REG_RA: usize = 1;
/// Register x10 (first argument/return value, a0).
pub const REG_A0: usize = 10;
/// Register x17 (last argument register, a7).
pub const REG_A7: usize = 17;

/// Printable names for x0-x31.
const REG_NAMES: [&str; NUM_GPRS] = [
    "x0", "x1", "x2", "x3", "x4", "x5", "x6", "x7", "x8", "x9", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "x18", "x19", "x20", "x21", "x22", "x23", "x24", "x25", "x26", "x27",
    "x28", "x29", "x30", "x31",
];

/// Name printed for the "none" register and any out-of-range index.
pub const NONE_NAME: &str = "----";

/// Name of the program counter in state diffs.
pub const PC_NAME: &str = "pc";

/// Returns the printable name of register `idx`.
///
/// Indices outside `x0`-`x31` (including [`REG_NONE`](crate::common::constants::REG_NONE)) print as `"----"`.
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or(NONE_NAME)
}

/// Looks up a register by its printable name.
///
/// # Returns
///
/// The register index, or `None` if `name` does not name one of `x0`-`x31`.
pub fn find_register(name: &str) -> Option<usize> {
    REG_NAMES.iter().position(|&n| n == name)
}
