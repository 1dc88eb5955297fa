//! Writeback (WB) Step.
//!
//! Applies the writes scheduled by the previous cycle: the ALU result, the
//! loaded value, the store and the condition code. It then advances the PC to
//! the previously computed next PC. The step runs at the start of every cycle
//! and once more when a run ends on its instruction budget.

use crate::core::Cpu;

/// Commits the pending writes of the previous cycle, if any.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
pub fn wb_stage(cpu: &mut Cpu) {
    let Some(commit) = cpu.pending.take() else {
        return;
    };

    cpu.regs.write(commit.dst_e, commit.val_e);
    cpu.regs.write(commit.dst_m, commit.val_m);

    if let Some(store) = commit.store {
        match cpu.mem.write_u32(store.addr, store.data) {
            Ok(()) => {
                if cpu.trace {
                    tracing::info!("Wrote {:#x} to address {:#x}", store.data, store.addr);
                }
            }
            Err(e) => tracing::warn!("Store to validated address {:#x} failed: {e}", store.addr),
        }
    }

    if let Some(cc) = commit.cc {
        cpu.cc = cc;
    }
    cpu.pc = commit.next_pc;
}
