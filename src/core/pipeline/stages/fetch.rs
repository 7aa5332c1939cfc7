//! Fetch: issues one instruction-memory read per cycle and advances the PC.

use crate::core::pipeline::engine::Core;
use crate::mem::{MemOp, MemoryPort, Request, SyscallMemory};

impl<Mem: MemoryPort + SyscallMemory> Core<Mem> {
    pub(crate) fn fetch(&mut self) {
        if self.rob.is_full() {
            tracing::trace!("fetch: stall, ROB full");
            return;
        }
        if self.fetch_buffer.is_occupied() {
            tracing::trace!("fetch: stall, fetch buffer occupied");
            return;
        }
        if !self.memory.can_req() {
            tracing::trace!("fetch: stall, I-memory port refuses request");
            return;
        }

        let pc = self.pc();
        self.memory.send_req(Request {
            op: MemOp::Read,
            addr: pc,
            size: 4,
        });
        let next_pc = pc.wrapping_add(4);
        self.fetch_buffer.fill(pc, next_pc);
        self.set_pc(next_pc);
        tracing::trace!(pc, next_pc, "fetch: issued request");
    }
}
