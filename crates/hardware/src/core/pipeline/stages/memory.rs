//! Memory Access (MEM) Step.
//!
//! Performs the data access of loads and stores. A load reads the word at the
//! effective address. A store only reads the address to prove it is in range;
//! the write itself is deferred to the next cycle's commit. Either failure
//! raises the data-memory error.

use crate::core::Cpu;

/// Executes the memory access step.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
pub fn mem_stage(cpu: &mut Cpu) {
    let cycle = &mut cpu.cycle;
    let addr = cycle.mem_addr;

    if cycle.signals.mem_read {
        match cpu.mem.read_u32(addr) {
            Ok(val) => cycle.val_m = val,
            Err(e) => {
                cycle.dmem_error = true;
                tracing::debug!("Couldn't read at address {addr:#x}: {e}");
            }
        }
    }

    if cycle.signals.mem_write {
        let probe = cpu.mem.read_u32(addr);
        if let Err(e) = probe {
            cycle.dmem_error = true;
            tracing::debug!("Couldn't write at address {addr:#x}: {e}");
        }
    }
}
