//! Instruction Classes.
//!
//! The low seven bits of every instruction word select its class. The set of
//! classes is closed: any other opcode maps to [`InstClass::Unknown`], which the
//! control logic treats as an invalid instruction.

use std::fmt;

use crate::isa::rv32i::opcodes;

/// Architectural class of an instruction, selected by its major opcode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InstClass {
    /// Stop the machine (opcode `0x00`). Also forced after a failed fetch.
    #[default]
    Halt,
    /// Load upper immediate.
    Lui,
    /// Add upper immediate to PC.
    Auipc,
    /// Jump and link.
    Jal,
    /// Jump and link register.
    Jalr,
    /// Conditional branch.
    Branch,
    /// Store word.
    Store,
    /// Load word.
    Load,
    /// Register-immediate arithmetic.
    OpImm,
    /// Register-register arithmetic.
    Op,
    /// System instruction; retired without effect.
    System,
    /// Any opcode outside the supported subset.
    Unknown(u32),
}

impl InstClass {
    /// Classifies a major opcode.
    ///
    /// # Arguments
    ///
    /// * `opcode` - The low seven bits of an instruction word.
    pub const fn from_opcode(opcode: u32) -> Self {
        match opcode {
            opcodes::OP_HALT => Self::Halt,
            opcodes::OP_LUI => Self::Lui,
            opcodes::OP_AUIPC => Self::Auipc,
            opcodes::OP_JAL => Self::Jal,
            opcodes::OP_JALR => Self::Jalr,
            opcodes::OP_BRANCH => Self::Branch,
            opcodes::OP_STORE => Self::Store,
            opcodes::OP_LOAD => Self::Load,
            opcodes::OP_IMM => Self::OpImm,
            opcodes::OP_REG => Self::Op,
            opcodes::OP_SYSTEM => Self::System,
            other => Self::Unknown(other),
        }
    }

    /// Returns the major opcode that selects this class.
    pub const fn opcode(self) -> u32 {
        match self {
            Self::Halt => opcodes::OP_HALT,
            Self::Lui => opcodes::OP_LUI,
            Self::Auipc => opcodes::OP_AUIPC,
            Self::Jal => opcodes::OP_JAL,
            Self::Jalr => opcodes::OP_JALR,
            Self::Branch => opcodes::OP_BRANCH,
            Self::Store => opcodes::OP_STORE,
            Self::Load => opcodes::OP_LOAD,
            Self::OpImm => opcodes::OP_IMM,
            Self::Op => opcodes::OP_REG,
            Self::System => opcodes::OP_SYSTEM,
            Self::Unknown(op) => op,
        }
    }

    /// Returns true for the two unconditional jump classes.
    #[inline]
    pub const fn is_jump(self) -> bool {
        matches!(self, Self::Jal | Self::Jalr)
    }
}

impl fmt::Display for InstClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Halt => f.write_str("HALT"),
            Self::Lui => f.write_str("LUI"),
            Self::Auipc => f.write_str("AUIPC"),
            Self::Jal => f.write_str("JAL"),
            Self::Jalr => f.write_str("JALR"),
            Self::Branch => f.write_str("BRANCH"),
            Self::Store => f.write_str("STORE"),
            Self::Load => f.write_str("LOAD"),
            Self::OpImm => f.write_str("OP-IMM"),
            Self::Op => f.write_str("OP"),
            Self::System => f.write_str("SYSTEM"),
            Self::Unknown(op) => write!(f, "UNKNOWN({op:#04x})"),
        }
    }
}
