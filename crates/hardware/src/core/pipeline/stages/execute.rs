//! Execute (EX) Step.
//!
//! This module implements the execute step of the cycle. It performs the following:
//! 1. **Operand Selection:** Chooses ALU inputs from registers, the PC, the immediate or zero.
//! 2. **Arithmetic Execution:** Runs the class-specific ALU operation and derives flags.
//! 3. **Branch Resolution:** Compares the source operands of conditional branches.
//! 4. **Next PC:** Computes the following PC, then replaces a jump's result with its
//!    return address.

use crate::core::Cpu;
use crate::core::pipeline::signals::{self, AluOp, PcInputs};
use crate::core::units::alu::Alu;
use crate::core::units::alu::shifts::SHAMT_MASK_REG;
use crate::core::units::bru::Bru;
use crate::isa::class::InstClass;
use crate::isa::rv32i::{funct3, funct7};

/// Executes the instruction execute step.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
pub fn execute_stage(cpu: &mut Cpu) {
    let cycle = &mut cpu.cycle;
    let d = cycle.decoded;
    let sig = cycle.signals;

    let a = signals::operand_a(sig.a_src, cycle.val_a, d.fetch_addr);
    let b = signals::operand_b(sig.b_src, cycle.val_b, d.imm);
    cycle.alu_a = a;
    cycle.alu_b = b;

    match d.class {
        InstClass::Branch => {
            cycle.branch_taken = Bru::taken(d.funct3, a, b);
        }
        InstClass::Load => {
            cycle.val_e = Alu::execute(AluOp::Add, a, d.imm as u32);
        }
        InstClass::OpImm | InstClass::Op => {
            let (op, x, y) = if d.class == InstClass::OpImm {
                op_imm(d.funct3, d.funct7, a, b)
            } else {
                op_reg(d.funct3, d.funct7, a, b)
            };
            cycle.val_e = Alu::execute(op, x, y);
            cycle.cc = Alu::condition_code(op, x, y);
        }
        InstClass::Halt
        | InstClass::Lui
        | InstClass::Auipc
        | InstClass::Jal
        | InstClass::Jalr
        | InstClass::Store
        | InstClass::System
        | InstClass::Unknown(_) => {
            cycle.val_e = Alu::execute(AluOp::Add, a, b);
        }
    }

    cycle.next_pc = signals::next_pc(PcInputs {
        class: d.class,
        branch_taken: cycle.branch_taken,
        fetch_addr: d.fetch_addr,
        imm: d.imm,
        target: cycle.val_e,
    });
    if d.class.is_jump() {
        cycle.val_e = cycle.val_p;
    }

    cycle.mem_addr = signals::mem_addr(d.class, cycle.val_e);
    cycle.mem_data = signals::mem_data(d.class, cycle.val_b);
}

/// Selects the ALU operation and argument order of a register-immediate instruction.
///
/// Funct3 3 compares unsigned greater-than, where canonical RISC-V has sltiu.
fn op_imm(f3: u32, f7: u32, a: u32, b: u32) -> (AluOp, u32, u32) {
    let op = match f3 {
        funct3::ADD_SUB => AluOp::Add,
        funct3::SLL => AluOp::Sll,
        funct3::SLT => AluOp::Slt,
        funct3::SLTU => AluOp::Sgtu,
        funct3::XOR => AluOp::Xor,
        funct3::SRL_SRA if f7 == funct7::SRA => AluOp::Sra,
        funct3::SRL_SRA => AluOp::Srl,
        funct3::OR => AluOp::Or,
        funct3::AND => AluOp::And,
        _ => AluOp::Nop,
    };
    (op, a, b)
}

/// Selects the ALU operation and argument order of a register-register instruction.
///
/// The ALU subtracts its first argument from its second, so `sub` passes the
/// operands swapped. Shift amounts use the low five bits of `rs2`.
fn op_reg(f3: u32, f7: u32, a: u32, b: u32) -> (AluOp, u32, u32) {
    match f3 {
        funct3::ADD_SUB if f7 != funct7::DEFAULT => (AluOp::Sub, b, a),
        funct3::ADD_SUB => (AluOp::Add, a, b),
        funct3::SLL => (AluOp::Sll, a, b & SHAMT_MASK_REG),
        funct3::SLT => (AluOp::Slt, a, b),
        funct3::SLTU => (AluOp::Sltu, a, b),
        funct3::XOR => (AluOp::Xor, a, b),
        funct3::SRL_SRA if f7 != funct7::DEFAULT => (AluOp::Sra, a, b & SHAMT_MASK_REG),
        funct3::SRL_SRA => (AluOp::Srl, a, b & SHAMT_MASK_REG),
        funct3::OR => (AluOp::Or, a, b),
        funct3::AND => (AluOp::And, a, b),
        _ => (AluOp::Nop, a, b),
    }
}
