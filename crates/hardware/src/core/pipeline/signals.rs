//! Control signals and selector logic.
//!
//! This module derives every per-cycle control decision from the decoded
//! instruction class. It performs:
//! 1. **Field Selection:** Which function codes, registers and immediate a class uses.
//! 2. **Operand Selection:** Sources for ALU inputs (registers, PC, immediate or zero).
//! 3. **Destination Selection:** Which register receives the ALU or memory result.
//! 4. **Memory Control:** Read/write enables, address and write data.
//! 5. **Sequencing:** The cycle status and the next program counter.
//!
//! Every function here is pure: inputs are passed explicitly and nothing is
//! read from or written to machine state.

use crate::common::constants::{INSTRUCTION_SIZE, REG_NONE};
use crate::common::status::Status;
use crate::isa::class::InstClass;

/// ALU operation types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Integer addition.
    #[default]
    Add,

    /// Integer subtraction, computed as `b - a`.
    Sub,

    /// Bitwise AND.
    And,

    /// Bitwise XOR.
    Xor,

    /// Bitwise OR.
    Or,

    /// Shift left logical.
    Sll,

    /// Shift right logical.
    Srl,

    /// Shift right arithmetic.
    Sra,

    /// Set less than (signed).
    Slt,

    /// Set less than unsigned.
    Sltu,

    /// Set greater than unsigned.
    Sgtu,

    /// No operation; the result is always zero.
    Nop,
}

/// Source for ALU operand A.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpASrc {
    /// Use `rs1` register value.
    Reg1,

    /// Use the fetch address.
    Pc,

    /// Use zero.
    #[default]
    Zero,
}

/// Source for ALU operand B.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    /// Use `rs2` register value.
    Reg2,

    /// Use sign-extended immediate value.
    Imm,

    /// Use zero.
    #[default]
    Zero,
}

/// Class-level control signals.
///
/// One value exists per instruction class; see [`ControlSignals::for_class`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Instruction uses funct3 (bits 14-12).
    pub need_funct3: bool,
    /// Instruction uses funct7 (bits 31-25).
    pub need_funct7: bool,
    /// Class belongs to the supported subset.
    pub valid: bool,
    /// Instruction reads `rs1`.
    pub need_rs1: bool,
    /// Instruction reads `rs2`.
    pub need_rs2: bool,
    /// Instruction names a destination register.
    pub need_rd: bool,
    /// Instruction carries an immediate.
    pub need_imm: bool,
    /// Source selection for ALU operand A.
    pub a_src: OpASrc,
    /// Source selection for ALU operand B.
    pub b_src: OpBSrc,
    /// The ALU result is written to `rd`.
    pub write_e: bool,
    /// The loaded value is written to `rd`.
    pub write_m: bool,
    /// Enable memory read operation (load).
    pub mem_read: bool,
    /// Enable memory write operation (store).
    pub mem_write: bool,
}

impl ControlSignals {
    /// Returns the control signals of an instruction class.
    ///
    /// Unknown classes get all-clear signals with `valid` unset.
    pub const fn for_class(class: InstClass) -> Self {
        const NONE: ControlSignals = ControlSignals {
            need_funct3: false,
            need_funct7: false,
            valid: false,
            need_rs1: false,
            need_rs2: false,
            need_rd: false,
            need_imm: false,
            a_src: OpASrc::Zero,
            b_src: OpBSrc::Zero,
            write_e: false,
            write_m: false,
            mem_read: false,
            mem_write: false,
        };

        match class {
            InstClass::Halt => Self {
                valid: true,
                ..NONE
            },
            InstClass::Lui => Self {
                valid: true,
                need_rd: true,
                need_imm: true,
                b_src: OpBSrc::Imm,
                write_e: true,
                ..NONE
            },
            InstClass::Auipc => Self {
                valid: true,
                need_rd: true,
                need_imm: true,
                a_src: OpASrc::Pc,
                b_src: OpBSrc::Imm,
                write_e: true,
                ..NONE
            },
            // The jump target is the immediate itself, not pc-relative.
            InstClass::Jal => Self {
                valid: true,
                need_rd: true,
                need_imm: true,
                b_src: OpBSrc::Imm,
                write_e: true,
                ..NONE
            },
            InstClass::Jalr => Self {
                need_funct3: true,
                valid: true,
                need_rs1: true,
                need_rd: true,
                need_imm: true,
                a_src: OpASrc::Reg1,
                b_src: OpBSrc::Imm,
                write_e: true,
                ..NONE
            },
            InstClass::Branch => Self {
                need_funct3: true,
                valid: true,
                need_rs1: true,
                need_rs2: true,
                need_imm: true,
                a_src: OpASrc::Reg1,
                b_src: OpBSrc::Reg2,
                ..NONE
            },
            InstClass::Store => Self {
                need_funct3: true,
                valid: true,
                need_rs1: true,
                need_rs2: true,
                need_imm: true,
                a_src: OpASrc::Reg1,
                b_src: OpBSrc::Imm,
                mem_write: true,
                ..NONE
            },
            InstClass::Load => Self {
                need_funct3: true,
                valid: true,
                need_rs1: true,
                need_rd: true,
                need_imm: true,
                a_src: OpASrc::Reg1,
                b_src: OpBSrc::Imm,
                write_m: true,
                mem_read: true,
                ..NONE
            },
            InstClass::OpImm => Self {
                need_funct3: true,
                need_funct7: true,
                valid: true,
                need_rs1: true,
                need_rd: true,
                need_imm: true,
                a_src: OpASrc::Reg1,
                b_src: OpBSrc::Imm,
                write_e: true,
                ..NONE
            },
            InstClass::Op => Self {
                need_funct3: true,
                need_funct7: true,
                valid: true,
                need_rs1: true,
                need_rs2: true,
                need_rd: true,
                a_src: OpASrc::Reg1,
                b_src: OpBSrc::Reg2,
                write_e: true,
                ..NONE
            },
            InstClass::System => Self {
                need_funct3: true,
                valid: true,
                need_rs1: true,
                need_rd: true,
                ..NONE
            },
            InstClass::Unknown(_) => NONE,
        }
    }
}

/// Selects ALU operand A.
///
/// # Arguments
///
/// * `src` - Operand source from the control signals.
/// * `rv1` - Value read from `rs1`.
/// * `fetch_addr` - Address of the current instruction.
pub const fn operand_a(src: OpASrc, rv1: u32, fetch_addr: u32) -> u32 {
    match src {
        OpASrc::Reg1 => rv1,
        OpASrc::Pc => fetch_addr,
        OpASrc::Zero => 0,
    }
}

/// Selects ALU operand B.
///
/// # Arguments
///
/// * `src` - Operand source from the control signals.
/// * `rv2` - Value read from `rs2`.
/// * `imm` - Sign-extended immediate.
pub const fn operand_b(src: OpBSrc, rv2: u32, imm: i32) -> u32 {
    match src {
        OpBSrc::Reg2 => rv2,
        OpBSrc::Imm => imm as u32,
        OpBSrc::Zero => 0,
    }
}

/// Destination for the ALU result: `rd` when the class writes it, else [`REG_NONE`].
pub const fn dst_e(signals: &ControlSignals, rd: usize) -> usize {
    if signals.write_e { rd } else { REG_NONE }
}

/// Destination for the memory result: `rd` for loads, else [`REG_NONE`].
pub const fn dst_m(signals: &ControlSignals, rd: usize) -> usize {
    if signals.write_m { rd } else { REG_NONE }
}

/// Memory address: the ALU result for loads and stores, else 0.
pub const fn mem_addr(class: InstClass, val_e: u32) -> u32 {
    match class {
        InstClass::Load | InstClass::Store => val_e,
        _ => 0,
    }
}

/// Memory write data: the `rs2` value for stores, else 0.
pub const fn mem_data(class: InstClass, rv2: u32) -> u32 {
    match class {
        InstClass::Store => rv2,
        _ => 0,
    }
}

/// Inputs to [`next_status`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusInputs {
    /// Instruction class after fetch.
    pub class: InstClass,
    /// The instruction fetch failed.
    pub imem_error: bool,
    /// The data access failed.
    pub dmem_error: bool,
    /// The class is valid.
    pub valid: bool,
}

/// Derives the status of the cycle.
///
/// Address faults take priority over invalid instructions, which take
/// priority over halting.
pub const fn next_status(inputs: StatusInputs) -> Status {
    if inputs.imem_error || inputs.dmem_error {
        Status::AddressFault
    } else if !inputs.valid {
        Status::InvalidInstruction
    } else if matches!(inputs.class, InstClass::Halt) {
        Status::Halted
    } else {
        Status::Aok
    }
}

/// Inputs to [`next_pc`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PcInputs {
    /// Instruction class.
    pub class: InstClass,
    /// Branch condition held.
    pub branch_taken: bool,
    /// Address of the current instruction.
    pub fetch_addr: u32,
    /// Sign-extended immediate.
    pub imm: i32,
    /// ALU result before the link value replaces it.
    pub target: u32,
}

/// Computes the address of the next instruction.
///
/// # Returns
///
/// `fetch_addr + imm` for a taken branch, the ALU target for jumps, and
/// `fetch_addr + 4` otherwise.
pub const fn next_pc(inputs: PcInputs) -> u32 {
    match inputs.class {
        InstClass::Branch if inputs.branch_taken => {
            inputs.fetch_addr.wrapping_add(inputs.imm as u32)
        }
        InstClass::Jal | InstClass::Jalr => inputs.target,
        _ => inputs.fetch_addr.wrapping_add(INSTRUCTION_SIZE),
    }
}
