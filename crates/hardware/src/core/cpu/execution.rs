//! Main Execution Cycle.
//!
//! This module implements one instruction cycle of the single-cycle core. A
//! cycle runs these steps strictly in order:
//! 1. **Commit:** Apply the writes deferred by the previous cycle and advance the PC.
//! 2. **Fetch/Decode:** Read and classify the instruction, read its registers.
//! 3. **Execute/Memory:** Compute the result, resolve control flow, access data memory.
//! 4. **Status:** Derive the cycle's status and defer its writes to the next cycle.
//!
//! A cycle whose status is not AOK defers nothing, so a halting or faulting
//! instruction never changes registers, memory or the PC.

use super::Cpu;
use crate::common::status::Status;
use crate::core::pipeline::latches::{CycleValues, PendingCommit};
use crate::core::pipeline::signals::{self, StatusInputs};
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};

impl Cpu {
    /// Executes one instruction cycle.
    ///
    /// # Returns
    ///
    /// The status of the cycle. Anything other than [`Status::Aok`] is terminal.
    pub fn step(&mut self) -> Status {
        wb_stage(self);

        self.cycle = CycleValues::default();
        fetch_stage(self);
        decode_stage(self);
        execute_stage(self);
        mem_stage(self);

        let decoded = &self.cycle.decoded;
        let status = signals::next_status(StatusInputs {
            class: decoded.class,
            imem_error: decoded.imem_error,
            dmem_error: self.cycle.dmem_error,
            valid: decoded.valid,
        });
        self.cycle.status = status;
        self.stats
            .record(decoded.class, status, self.cycle.branch_taken);

        if status == Status::Aok {
            self.pending = Some(PendingCommit::from_cycle(&self.cycle));
        } else {
            tracing::debug!(
                "Cycle at {:#x} ended with status {status}",
                decoded.fetch_addr
            );
        }
        status
    }

    /// Applies the writes deferred by the most recent cycle, if any.
    ///
    /// Called when a run stops on its instruction budget so the state
    /// reflects every executed instruction.
    pub fn commit_pending(&mut self) {
        wb_stage(self);
    }

    /// Returns true if a cycle's writes are still waiting to be committed.
    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
