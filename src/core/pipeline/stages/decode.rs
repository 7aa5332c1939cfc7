//! Decode, rename and dispatch: consumes one instruction-memory response,
//! decodes it, renames its operands against the RAT, allocates a ROB entry
//! and places it into a reservation station.

use crate::common::operand::Operand;
use crate::core::pipeline::engine::Core;
use crate::core::pipeline::micro_op::MicroOp;
use crate::core::pipeline::reservation_station::FunctionalUnit;
use crate::isa::decode::{assemble_word, decode};
use crate::mem::{MemoryPort, SyscallMemory};

impl<Mem: MemoryPort + SyscallMemory> Core<Mem> {
    pub(crate) fn decode(&mut self) {
        if let Some((tag, unit)) = self.pending_dispatch {
            if self.rs.dispatch(unit, tag) {
                self.pending_dispatch = None;
                tracing::trace!(?unit, "decode: pending dispatch placed in RS");
            } else {
                tracing::trace!(?unit, "decode: stall, pending dispatch still has no RS slot");
            }
            return;
        }

        let Some(entry) = self.fetch_buffer.entry() else {
            // A response arriving with no matching fetch-buffer entry is a
            // squash/recovery leftover; drop it.
            if self.memory.has_resp() {
                let _ = self.memory.recv_resp();
                tracing::trace!("decode: dropped stale I-memory response");
            }
            return;
        };

        if self.rob.is_full() {
            tracing::trace!("decode: stall, ROB full");
            return;
        }

        if !self.memory.has_resp() {
            return;
        }

        let resp = self.memory.recv_resp();
        let inst = assemble_word(resp.data);
        let decoded = decode(inst);

        let src1 = self.resolve_operand(decoded.uses_rs, decoded.rs);
        let src2 = self.resolve_operand(decoded.uses_rt, decoded.rt);

        let micro_op = MicroOp {
            mnemonic: decoded.mnemonic,
            category: decoded.category,
            pc: entry.pc,
            inst,
            imm16: decoded.imm16,
            imm26: decoded.imm26,
            dest: decoded.dest,
            src1,
            src2,
        };
        let unit = if micro_op.is_memory() {
            FunctionalUnit::Ls
        } else {
            FunctionalUnit::Alu
        };

        let Some(tag) = self.rob.allocate(micro_op) else {
            // ROB-full was just checked; nothing committed in between within
            // this stage, so this path is unreachable in practice. Treat it
            // as a stall rather than losing the fetched instruction.
            return;
        };

        if let Some(dest) = decoded.dest {
            self.rat.set_producer(dest, tag);
        }

        if self.rs.dispatch(unit, tag) {
            tracing::trace!(pc = entry.pc, ?unit, "decode: dispatched");
        } else {
            self.pending_dispatch = Some((tag, unit));
            tracing::trace!(pc = entry.pc, ?unit, "decode: RS full, deferring dispatch");
        }

        self.fetch_buffer.clear();
    }

    fn resolve_operand(&self, uses: bool, reg: usize) -> Operand {
        if !uses {
            return Operand::Ready(0);
        }
        match self.rat.producer_of(reg) {
            None => Operand::Ready(self.regs().read(reg)),
            Some(tag) => match self.rob.value_of(tag) {
                Some(value) => Operand::Ready(value),
                None => Operand::Pending(tag),
            },
        }
    }
}
