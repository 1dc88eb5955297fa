//! Immediate Decoder.
//!
//! This module reconstructs the immediate operand of an instruction word. The
//! immediate bits are scattered across the word differently for each format
//! (I, S, B, U, J), and each format sign-extends from a different bit:
//! 1. **I-Type:** bits 31-20, sign-extended from bit 11 (6-bit shift amount for shifts).
//! 2. **S-Type:** bits 31-25 and 11-7, sign-extended from bit 11.
//! 3. **B-Type:** a 13-bit even offset, sign-extended from bit 12.
//! 4. **U-Type:** bits 31-12 shifted into place; the low 12 bits are zero.
//! 5. **J-Type:** a 21-bit even offset, sign-extended from bit 20.

use crate::isa::class::InstClass;
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::funct3;

/// Total width of a RISC-V instruction in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Bit shift for extracting I-Type immediate field (bits 20-31).
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
const I_IMM_SHIFT: u32 = 20;

/// Bit mask for the I-Type shift amount (6 bits: imm[5:0]).
const SHAMT_MASK: u32 = 0x3F;

/// Bit shift for extracting S-Type immediate low field (bits 7-11).
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
const S_IMM_LOW_SHIFT: u32 = 7;

/// Bit mask for S-Type immediate low field (5 bits: imm[4:0]).
const S_IMM_LOW_MASK: u32 = 0x1F;

/// Bit shift for extracting S-Type immediate high field (bits 25-31).
const S_IMM_HIGH_SHIFT: u32 = 25;

/// Bit mask for S-Type immediate high field (7 bits: imm[11:5]).
const S_IMM_HIGH_MASK: u32 = 0x7F;

/// Bit shift for combining S-Type immediate fields after extraction.
const S_IMM_COMBINED_SHIFT: u32 = 5;

/// Total number of bits in S-Type immediate (12 bits).
const S_IMM_BITS: u32 = 12;

/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
const B_IMM_11_SHIFT: u32 = 7;
const B_IMM_4_1_SHIFT: u32 = 8;
const B_IMM_4_1_MASK: u32 = 0xF;
const B_IMM_10_5_SHIFT: u32 = 25;
const B_IMM_10_5_MASK: u32 = 0x3F;
const B_IMM_12_SHIFT: u32 = 31;

/// Total number of bits in B-Type immediate (13 bits, sign-extended).
const B_IMM_BITS: u32 = 13;

/// Bit mask for extracting U-Type immediate field (bits 12-31).
///
/// U-Type format: `imm[31:12] | rd | opcode`
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
const J_IMM_19_12_SHIFT: u32 = 12;
const J_IMM_19_12_MASK: u32 = 0xFF;
const J_IMM_11_SHIFT: u32 = 20;
const J_IMM_10_1_SHIFT: u32 = 21;
const J_IMM_10_1_MASK: u32 = 0x3FF;
const J_IMM_20_SHIFT: u32 = 31;

/// Total number of bits in J-Type immediate (21 bits, sign-extended).
const J_IMM_BITS: u32 = 21;

/// Reconstructs the immediate of `inst` according to its class.
///
/// Classes that carry no immediate yield 0.
///
/// # Arguments
///
/// * `class` - The class the instruction was decoded as.
/// * `inst` - The raw 32-bit instruction encoding.
///
/// # Returns
///
/// The sign-extended immediate.
pub fn immediate(class: InstClass, inst: u32) -> i32 {
    match class {
        InstClass::Lui | InstClass::Auipc => decode_u_type_imm(inst),
        InstClass::Jal => decode_j_type_imm(inst),
        InstClass::OpImm if matches!(inst.funct3(), funct3::SLL | funct3::SRL_SRA) => {
            decode_shamt(inst)
        }
        InstClass::OpImm | InstClass::Jalr | InstClass::Load => decode_i_type_imm(inst),
        InstClass::Branch => decode_b_type_imm(inst),
        InstClass::Store => decode_s_type_imm(inst),
        InstClass::Halt | InstClass::Op | InstClass::System | InstClass::Unknown(_) => 0,
    }
}

/// Decodes the immediate value for I-Type instructions.
///
/// Used for Load, JALR, and Immediate Arithmetic instructions.
pub fn decode_i_type_imm(inst: u32) -> i32 {
    (inst as i32) >> I_IMM_SHIFT
}

/// Decodes the unsigned 6-bit shift amount of an immediate shift.
pub fn decode_shamt(inst: u32) -> i32 {
    ((inst >> I_IMM_SHIFT) & SHAMT_MASK) as i32
}

/// Decodes the immediate value for S-Type instructions.
pub fn decode_s_type_imm(inst: u32) -> i32 {
    let low = (inst >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
    let high = (inst >> S_IMM_HIGH_SHIFT) & S_IMM_HIGH_MASK;
    let combined = (high << S_IMM_COMBINED_SHIFT) | low;
    sign_extend(combined, S_IMM_BITS)
}

/// Decodes the immediate value for B-Type instructions.
///
/// The immediate is an even byte offset relative to the fetch address.
pub fn decode_b_type_imm(inst: u32) -> i32 {
    let bit_11 = (inst >> B_IMM_11_SHIFT) & 1;
    let bits_4_1 = (inst >> B_IMM_4_1_SHIFT) & B_IMM_4_1_MASK;
    let bits_10_5 = (inst >> B_IMM_10_5_SHIFT) & B_IMM_10_5_MASK;
    let bit_12 = (inst >> B_IMM_12_SHIFT) & 1;

    let combined = (bit_12 << 12) | (bit_11 << 11) | (bits_10_5 << 5) | (bits_4_1 << 1);
    sign_extend(combined, B_IMM_BITS)
}

/// Decodes the immediate value for U-Type instructions (LUI and AUIPC).
pub fn decode_u_type_imm(inst: u32) -> i32 {
    (inst & U_IMM_MASK) as i32
}

/// Decodes the immediate value for J-Type instructions.
pub fn decode_j_type_imm(inst: u32) -> i32 {
    let bits_19_12 = (inst >> J_IMM_19_12_SHIFT) & J_IMM_19_12_MASK;
    let bit_11 = (inst >> J_IMM_11_SHIFT) & 1;
    let bits_10_1 = (inst >> J_IMM_10_1_SHIFT) & J_IMM_10_1_MASK;
    let bit_20 = (inst >> J_IMM_20_SHIFT) & 1;

    let combined = (bit_20 << 20) | (bits_19_12 << 12) | (bit_11 << 11) | (bits_10_1 << 1);
    sign_extend(combined, J_IMM_BITS)
}

/// Sign extends a value of `bits` width to a 32-bit signed integer.
///
/// # Arguments
///
/// * `val` - The value to extend.
/// * `bits` - The number of valid bits in `val`.
fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = INSTRUCTION_WIDTH - bits;
    ((val << shift) as i32) >> shift
}
