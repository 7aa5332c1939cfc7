//! Issue: scans each reservation-station class for an operand-ready slot and
//! hands it straight to execute in the same cycle.

use crate::core::pipeline::engine::Core;
use crate::core::pipeline::micro_op::MicroOp;
use crate::core::pipeline::reservation_station::FunctionalUnit;
use crate::mem::{MemoryPort, SyscallMemory};

impl<Mem: MemoryPort + SyscallMemory> Core<Mem> {
    pub(crate) fn issue_and_execute(&mut self) {
        for unit in [FunctionalUnit::Alu, FunctionalUnit::Ls] {
            let rob = &self.rob;
            let ready = self
                .rs
                .take_ready(unit, |tag| rob.micro_op(tag).is_some_and(MicroOp::operands_ready));
            if let Some(tag) = ready {
                tracing::trace!(?unit, ?tag, "issue: dispatching to execute");
                self.execute(tag);
            }
        }
    }
}
