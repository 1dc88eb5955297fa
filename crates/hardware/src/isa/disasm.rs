//! Instruction Disassembler.
//!
//! Converts a 32-bit instruction encoding into a human-readable string for
//! debug tracing, logging, and test diagnostics. Register operands use the
//! names from [`abi`](crate::isa::abi).
//!
//! # Usage
//!
//! ```
//! use rvseq_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x00a0_0513), "addi a0, x0, 10");
//! ```

use crate::isa::abi::reg_name;
use crate::isa::class::InstClass;
use crate::isa::decode::immediate;
use crate::isa::instruction::InstructionBits;
use crate::isa::table::{BAD_NAME, iname};

/// Disassembles a 32-bit instruction into a human-readable string.
///
/// Unrecognised encodings render as `"<bad>"`.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    let class = InstClass::from_opcode(inst.opcode());
    let f3 = inst.funct3();
    let f7 = inst.funct7();
    let mn = iname(class, f3, f7);
    if mn == BAD_NAME {
        return mn.to_string();
    }

    let rd = reg_name(inst.rd());
    let rs1 = reg_name(inst.rs1());
    let rs2 = reg_name(inst.rs2());
    let imm = immediate(class, inst);

    match class {
        InstClass::Lui | InstClass::Auipc => {
            format!("{mn} {rd}, {:#x}", (imm as u32) >> 12)
        }
        InstClass::Jal => format!("{mn} {rd}, {imm}"),
        InstClass::Jalr | InstClass::Load => format!("{mn} {rd}, {imm}({rs1})"),
        InstClass::Branch => format!("{mn} {rs1}, {rs2}, {imm}"),
        InstClass::Store => format!("{mn} {rs2}, {imm}({rs1})"),
        InstClass::OpImm => format!("{mn} {rd}, {rs1}, {imm}"),
        InstClass::Op => format!("{mn} {rd}, {rs1}, {rs2}"),
        InstClass::System | InstClass::Halt | InstClass::Unknown(_) => mn.to_string(),
    }
}
