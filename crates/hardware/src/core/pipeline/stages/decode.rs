//! Instruction Decode (ID) Step.
//!
//! This module implements the decode step of the cycle. It performs the following:
//! 1. **Signal Generation:** Looks up the control signals of the instruction class.
//! 2. **Field Extraction:** Keeps only the fields the class uses; the rest read as
//!    zero or the "none" register.
//! 3. **Immediate Reconstruction:** Rebuilds the class-specific immediate.
//! 4. **Register Read:** Reads the selected source registers.

use crate::common::constants::REG_NONE;
use crate::core::Cpu;
use crate::core::pipeline::signals::{self, ControlSignals};
use crate::isa::abi::reg_name;
use crate::isa::decode::immediate;
use crate::isa::instruction::InstructionBits;
use crate::isa::table::iname;

/// Executes the instruction decode step.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
pub fn decode_stage(cpu: &mut Cpu) {
    let cycle = &mut cpu.cycle;
    let raw = cycle.decoded.raw;
    let class = cycle.decoded.class;
    let sig = ControlSignals::for_class(class);

    let d = &mut cycle.decoded;
    d.valid = sig.valid;
    d.funct3 = if sig.need_funct3 { raw.funct3() } else { 0 };
    d.funct7 = if sig.need_funct7 { raw.funct7() } else { 0 };
    d.rs1 = if sig.need_rs1 { raw.rs1() } else { REG_NONE };
    d.rs2 = if sig.need_rs2 { raw.rs2() } else { REG_NONE };
    d.rd = if sig.need_rd { raw.rd() } else { REG_NONE };
    d.imm = if sig.need_imm { immediate(class, raw) } else { 0 };

    cycle.signals = sig;
    cycle.val_a = cpu.regs.read(d.rs1);
    cycle.val_b = cpu.regs.read(d.rs2);
    cycle.dst_e = signals::dst_e(&sig, d.rd);
    cycle.dst_m = signals::dst_m(&sig, d.rd);

    if cpu.trace {
        tracing::info!(
            "IF: Fetched {} at {:#x}.  rs1={}, rs2={}, rd={}, Imm = {:#x}",
            iname(class, d.funct3, d.funct7),
            d.fetch_addr,
            reg_name(d.rs1),
            reg_name(d.rs2),
            reg_name(d.rd),
            d.imm
        );
    }
}
