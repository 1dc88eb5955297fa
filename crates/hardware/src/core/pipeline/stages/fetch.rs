//! Instruction Fetch (IF) Step.
//!
//! Reads the instruction word at the current program counter and classifies
//! it by its major opcode. A failed fetch (address outside memory or not a
//! multiple of four) raises the instruction-memory error and forces the class
//! to the all-zero placeholder.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::Cpu;
use crate::isa::class::InstClass;
use crate::isa::instruction::InstructionBits;

/// Executes the instruction fetch step.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
pub fn fetch_stage(cpu: &mut Cpu) {
    let pc = cpu.pc;
    let decoded = &mut cpu.cycle.decoded;
    decoded.fetch_addr = pc;

    match cpu.mem.fetch_u32(pc) {
        Ok(raw) => {
            decoded.raw = raw;
            decoded.class = InstClass::from_opcode(raw.opcode());
        }
        Err(e) => {
            decoded.raw = 0;
            decoded.class = InstClass::Halt;
            decoded.imem_error = true;
            tracing::debug!("Couldn't fetch at address {pc:#x}: {e}");
        }
    }

    cpu.cycle.val_p = pc.wrapping_add(INSTRUCTION_SIZE);
}
