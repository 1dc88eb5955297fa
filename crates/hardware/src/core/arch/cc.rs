//! Condition Code.
//!
//! The condition code packs three flags into the low bits of a byte as
//! `Z << 2 | S << 1 | O`. It is updated from add, subtract and logic results
//! and is visible in state snapshots; branch resolution never reads it.

use std::fmt;

/// Bit position of the zero flag.
const ZF_SHIFT: u8 = 2;
/// Bit position of the sign flag.
const SF_SHIFT: u8 = 1;
/// Bit position of the overflow flag.
const OF_SHIFT: u8 = 0;
/// Mask covering all three flags.
const CC_MASK: u8 = 0b111;

/// Zero, sign and overflow flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConditionCode(u8);

impl ConditionCode {
    /// Flags after reset: `Z=1 S=0 O=0`.
    pub const DEFAULT: Self = Self::pack(true, false, false);

    /// Packs the three flags.
    pub const fn pack(zero: bool, sign: bool, overflow: bool) -> Self {
        Self(
            ((zero as u8) << ZF_SHIFT)
                | ((sign as u8) << SF_SHIFT)
                | ((overflow as u8) << OF_SHIFT),
        )
    }

    /// Builds a condition code from its packed byte; bits above the flags are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & CC_MASK)
    }

    /// Returns the packed byte.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Zero flag.
    pub const fn zero(self) -> bool {
        (self.0 >> ZF_SHIFT) & 1 != 0
    }

    /// Sign flag.
    pub const fn sign(self) -> bool {
        (self.0 >> SF_SHIFT) & 1 != 0
    }

    /// Signed-overflow flag.
    pub const fn overflow(self) -> bool {
        (self.0 >> OF_SHIFT) & 1 != 0
    }
}

impl Default for ConditionCode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ConditionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Z={} S={} O={}",
            u8::from(self.zero()),
            u8::from(self.sign()),
            u8::from(self.overflow())
        )
    }
}
