//! Single-Cycle Execution Tests.
//!
//! Whole cycles run through the harness: deferred commit, register and memory
//! effects of each class, and what a halting or faulting cycle leaves behind.

use pretty_assertions::assert_eq;
use rvseq_core::Status;
use rvseq_core::core::arch::ConditionCode;
use rvseq_core::isa::abi::{REG_A0, REG_RA};

use crate::common::builder::instruction::{InstructionBuilder, inst};
use crate::common::harness::TestContext;

const A1: usize = 11;
const A2: usize = 12;

#[test]
fn test_writes_are_deferred_to_next_cycle() {
    let mut ctx = TestContext::new().load_program(0, &[inst().addi(10, 0, 7).build()]);

    assert_eq!(ctx.cpu_mut().step(), Status::Aok);
    assert_eq!(ctx.get_reg(REG_A0), 0);
    assert_eq!(ctx.cpu().pc, 0);
    assert!(ctx.cpu().has_pending());

    ctx.cpu_mut().commit_pending();
    assert_eq!(ctx.get_reg(REG_A0), 7);
    assert_eq!(ctx.cpu().pc, 4);
    assert!(!ctx.cpu().has_pending());
}

#[test]
fn test_register_arithmetic() {
    let program = [
        inst().addi(11, 0, 20).build(),
        inst().addi(12, 0, 6).build(),
        inst().sub(10, 11, 12).build(),
        inst().and(13, 11, 12).build(),
        inst().or(14, 11, 12).build(),
        inst().xor(15, 11, 12).build(),
        inst().slt(16, 12, 11).build(),
        inst().sltu(17, 11, 12).build(),
        InstructionBuilder::halt(),
    ];
    let mut ctx = TestContext::new().load_program(0, &program);
    let result = ctx.run(100);

    assert_eq!(result.status, Status::Halted);
    assert_eq!(result.executed, 9);
    assert_eq!(ctx.get_reg(REG_A0), 14);
    assert_eq!(ctx.get_reg(13), 20 & 6);
    assert_eq!(ctx.get_reg(14), 20 | 6);
    assert_eq!(ctx.get_reg(15), 20 ^ 6);
    assert_eq!(ctx.get_reg(16), 1);
    assert_eq!(ctx.get_reg(17), 0);
}

#[test]
fn test_shifts() {
    let program = [
        inst().addi(11, 0, -16).build(),
        inst().srai(12, 11, 2).build(),
        inst().srli(13, 11, 28).build(),
        inst().slli(14, 11, 1).build(),
        inst().addi(15, 0, 33).build(),
        inst().sll(16, 15, 15).build(),
        inst().sra(17, 11, 15).build(),
        InstructionBuilder::halt(),
    ];
    let mut ctx = TestContext::new().load_program(0, &program);
    let _ = ctx.run(100);

    assert_eq!(ctx.get_reg(12), -4i32 as u32);
    assert_eq!(ctx.get_reg(13), 0xf);
    assert_eq!(ctx.get_reg(14), -32i32 as u32);
    // Register shift amounts keep the low five bits: 33 shifts by one.
    assert_eq!(ctx.get_reg(16), 66);
    assert_eq!(ctx.get_reg(17), -8i32 as u32);
}

#[test]
fn test_immediate_funct3_3_compares_greater_unsigned() {
    let program = [
        inst().addi(11, 0, 9).build(),
        inst().imm(5).rd(12).rs1(11).funct3(0b011).opcode(0x13).build(),
        inst().imm(50).rd(13).rs1(11).funct3(0b011).opcode(0x13).build(),
        InstructionBuilder::halt(),
    ];
    let mut ctx = TestContext::new().load_program(0, &program);
    let _ = ctx.run(100);

    assert_eq!(ctx.get_reg(12), 1);
    assert_eq!(ctx.get_reg(13), 0);
}

#[test]
fn test_lui_and_auipc() {
    let program = [
        inst().lui(10, 0x12345).build(),
        inst().auipc(11, 1).build(),
        InstructionBuilder::halt(),
    ];
    let mut ctx = TestContext::new().load_program(0, &program);
    let _ = ctx.run(10);

    assert_eq!(ctx.get_reg(REG_A0), 0x1234_5000);
    assert_eq!(ctx.get_reg(A1), 0x1004);
}

#[test]
fn test_store_then_load_word() {
    let program = [
        inst().lui(11, 0x12345).build(),
        inst().addi(11, 11, 0x678).build(),
        inst().addi(12, 0, 0x100).build(),
        inst().sw(12, 11, 4).build(),
        inst().lw(10, 12, 4).build(),
        InstructionBuilder::halt(),
    ];
    let mut ctx = TestContext::new().load_program(0, &program);
    let result = ctx.run(100);

    assert_eq!(result.status, Status::Halted);
    assert_eq!(ctx.word(0x104), 0x1234_5678);
    assert_eq!(ctx.get_reg(REG_A0), 0x1234_5678);
    assert_eq!(ctx.cpu().mem.as_bytes()[0x104], 0x78);
}

#[test]
fn test_load_reads_preloaded_data() {
    let mut ctx = TestContext::new()
        .load_program(0, &[inst().lw(10, 0, 0x200).build(), InstructionBuilder::halt()])
        .with_word(0x200, 0xcafe_f00d);
    let _ = ctx.run(10);
    assert_eq!(ctx.get_reg(REG_A0), 0xcafe_f00d);
}

#[test]
fn test_jal_links_and_jumps() {
    let program = [
        inst().jal(1, 8).build(),
        inst().addi(10, 0, 1).build(),
        InstructionBuilder::halt(),
    ];
    let mut ctx = TestContext::new().load_program(0, &program);
    let result = ctx.run(10);

    assert_eq!(result.executed, 2);
    assert_eq!(ctx.get_reg(REG_RA), 4);
    assert_eq!(ctx.get_reg(REG_A0), 0);
    assert_eq!(ctx.cpu().pc, 8);
}

#[test]
fn test_jal_target_is_absolute() {
    let mut ctx = TestContext::new().load_program(0x100, &[inst().jal(1, 8).build()]);
    let result = ctx.run(1);

    assert_eq!(result.status, Status::Aok);
    assert_eq!(ctx.get_reg(REG_RA), 0x104);
    assert_eq!(ctx.cpu().pc, 8);
}

#[test]
fn test_jalr_target_keeps_low_bit() {
    let program = [inst().jalr(1, 11, 1).build()];
    let mut ctx = TestContext::new().load_program(0, &program);
    ctx.set_reg(A1, 0x20);

    assert_eq!(ctx.cpu_mut().step(), Status::Aok);
    ctx.cpu_mut().commit_pending();
    assert_eq!(ctx.get_reg(REG_RA), 4);
    assert_eq!(ctx.cpu().pc, 0x21);
}

#[test]
fn test_misaligned_fetch_is_address_fault() {
    let program = [inst().jalr(0, 11, 2).build()];
    let mut ctx = TestContext::new().load_program(0, &program);
    let result = ctx.run(10);

    assert_eq!(result.status, Status::AddressFault);
    assert_eq!(result.executed, 2);
    assert_eq!(ctx.cpu().pc, 2);
}

#[test]
fn test_branch_taken_and_not_taken() {
    let program = [
        inst().addi(11, 0, 1).build(),
        inst().bne(11, 0, 8).build(),
        inst().addi(10, 0, 99).build(),
        inst().beq(11, 0, 8).build(),
        inst().addi(12, 0, 5).build(),
        InstructionBuilder::halt(),
    ];
    let mut ctx = TestContext::new().load_program(0, &program);
    let result = ctx.run(100);

    assert_eq!(result.status, Status::Halted);
    assert_eq!(result.executed, 5);
    assert_eq!(ctx.get_reg(REG_A0), 0);
    assert_eq!(ctx.get_reg(A2), 5);
    assert_eq!(ctx.cpu().stats.inst_branch, 2);
    assert_eq!(ctx.cpu().stats.branches_taken, 1);
}

#[test]
fn test_backward_branch_loop() {
    // a0 counts down from 5 to 0.
    let program = [
        inst().addi(10, 0, 5).build(),
        inst().addi(10, 10, -1).build(),
        inst().bne(10, 0, -4).build(),
        InstructionBuilder::halt(),
    ];
    let mut ctx = TestContext::new().load_program(0, &program);
    let result = ctx.run(100);

    assert_eq!(result.status, Status::Halted);
    assert_eq!(result.executed, 1 + 5 * 2 + 1);
    assert_eq!(ctx.get_reg(REG_A0), 0);
}

#[test]
fn test_writes_to_x0_are_discarded() {
    let program = [
        inst().addi(0, 0, 55).build(),
        inst().add(10, 0, 0).build(),
        InstructionBuilder::halt(),
    ];
    let mut ctx = TestContext::new().load_program(0, &program);
    let _ = ctx.run(10);
    assert_eq!(ctx.get_reg(0), 0);
    assert_eq!(ctx.get_reg(REG_A0), 0);
}

#[test]
fn test_condition_code_committed_with_instruction() {
    let program = [
        inst().addi(11, 0, -3).build(),
        inst().slli(12, 11, 1).build(),
        InstructionBuilder::halt(),
    ];
    let mut ctx = TestContext::new().load_program(0, &program);
    assert_eq!(ctx.cpu().cc, ConditionCode::DEFAULT);

    let _ = ctx.run(10);
    // The shift leaves the flags of the add in place.
    assert_eq!(ctx.cpu().cc, ConditionCode::pack(false, true, false));
}

#[test]
fn test_system_is_a_no_op() {
    let program = [inst().ecall().build(), InstructionBuilder::halt()];
    let mut ctx = TestContext::new().load_program(0, &program);
    let before = ctx.snapshot();
    let result = ctx.run(10);

    assert_eq!(result.status, Status::Halted);
    assert_eq!(result.executed, 2);
    let diff = before.diff(&ctx.snapshot());
    assert!(diff.regs.is_empty());
    assert!(diff.mem.is_empty());
    assert_eq!(diff.pc, Some((0, 4)));
}

#[test]
fn test_unknown_opcode_is_invalid() {
    let mut ctx = TestContext::new().load_program(0, &[0x0000_000b]);
    let result = ctx.run(10);
    assert_eq!(result.status, Status::InvalidInstruction);
    assert_eq!(result.executed, 1);
    assert_eq!(ctx.cpu().pc, 0);
}

#[test]
fn test_store_out_of_range_faults_without_side_effects() {
    let program = [
        inst().addi(11, 0, 0x7ff).build(),
        inst().addi(11, 11, 0x7ff).build(),
        inst().addi(11, 11, 0x7ff).build(),
        inst().addi(11, 11, 0x7ff).build(),
        inst().addi(11, 11, 4).build(),
        inst().sw(11, 11, 0).build(),
        InstructionBuilder::halt(),
    ];
    let mut ctx = TestContext::new().load_program(0, &program);
    let result = ctx.run(100);

    // 4 * 0x7ff + 4 = 8192: one past the last byte of the default memory.
    assert_eq!(ctx.get_reg(A1), 8192);
    assert_eq!(result.status, Status::AddressFault);
    assert_eq!(result.executed, 6);
    assert_eq!(ctx.cpu().pc, 20);
    assert_eq!(ctx.cpu().stats.inst_store, 0);
}

#[test]
fn test_load_straddling_end_faults() {
    let program = [inst().lw(10, 11, 0).build()];
    let mut ctx = TestContext::new().load_program(0, &program);
    ctx.set_reg(A1, 8190);
    let result = ctx.run(10);

    assert_eq!(result.status, Status::AddressFault);
    assert_eq!(ctx.get_reg(REG_A0), 0);
}

#[test]
fn test_running_off_the_end_of_memory() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().pc = 8188;
    ctx.cpu_mut().mem.write_inst_u32(8188, inst().addi(10, 0, 1).build()).unwrap();
    let result = ctx.run(10);

    assert_eq!(result.status, Status::AddressFault);
    assert_eq!(result.executed, 2);
    assert_eq!(ctx.get_reg(REG_A0), 1);
    assert_eq!(ctx.cpu().pc, 8192);
}

#[test]
fn test_reset_is_idempotent_and_keeps_memory() {
    let program = [inst().addi(10, 0, 3).build(), InstructionBuilder::halt()];
    let mut ctx = TestContext::new().load_program(0, &program);
    let _ = ctx.run(10);

    ctx.sim.reset();
    let once = ctx.snapshot();
    ctx.sim.reset();
    let twice = ctx.snapshot();

    assert_eq!(once, twice);
    assert_eq!(once.pc, 0);
    assert_eq!(once.regs, [0; 32]);
    assert_eq!(once.cc, ConditionCode::DEFAULT);
    assert_eq!(ctx.cpu().mem.fetch_u32(0).unwrap(), program[0]);

    let result = ctx.run(10);
    assert_eq!(result.status, Status::Halted);
    assert_eq!(ctx.get_reg(REG_A0), 3);
}
