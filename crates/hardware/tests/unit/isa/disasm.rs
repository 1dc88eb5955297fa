//! Disassembler output for every supported form.

use rstest::rstest;
use rvseq_core::isa::disasm::disassemble;
use rvseq_core::isa::table::BAD_NAME;

use crate::common::builder::instruction::inst;

#[rstest]
#[case::add(inst().add(10, 11, 12).build(), "add a0, a1, a2")]
#[case::sub(inst().sub(5, 6, 7).build(), "sub x5, x6, x7")]
#[case::sra(inst().sra(10, 10, 11).build(), "sra a0, a0, a1")]
#[case::addi_negative(inst().addi(10, 0, -1).build(), "addi a0, x0, -1")]
#[case::srai(inst().srai(10, 10, 3).build(), "srai a0, a0, 3")]
#[case::srli(inst().srli(10, 10, 3).build(), "srli a0, a0, 3")]
#[case::lw(inst().lw(12, 10, -4).build(), "lw a2, -4(a0)")]
#[case::sw(inst().sw(10, 11, 8).build(), "sw a1, 8(a0)")]
#[case::beq(inst().beq(10, 0, 16).build(), "beq a0, x0, 16")]
#[case::jal(inst().jal(1, -8).build(), "jal x1, -8")]
#[case::jalr(inst().jalr(0, 1, 0).build(), "jalr x0, 0(x1)")]
#[case::auipc(inst().auipc(10, 0xabc).build(), "auipc a0, 0xabc")]
#[case::system(inst().ecall().build(), "system")]
#[case::halt(0, "halt")]
fn test_disassemble(#[case] raw: u32, #[case] expected: &str) {
    assert_eq!(disassemble(raw), expected);
}

#[test]
fn test_unsupported_encodings_are_bad() {
    // Unknown opcode.
    assert_eq!(disassemble(0x0000_007f), BAD_NAME);
    // OP with a funct7 that names neither add nor sub.
    assert_eq!(disassemble(inst().add(1, 2, 3).funct7(0x01).build()), BAD_NAME);
    // Branch funct3 2 is reserved.
    assert_eq!(disassemble(inst().branch(0b010, 1, 2, 8).build()), BAD_NAME);
}
