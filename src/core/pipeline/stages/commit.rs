//! Commit: in-order retirement of the ROB head, architectural writeback and
//! the exit-syscall check.

use crate::core::pipeline::engine::Core;
use crate::isa::decode::Mnemonic;

impl<Mem> Core<Mem> {
    pub(crate) fn commit(&mut self) {
        let Some((tag, micro_op, ready)) = self.rob.peek_head().map(|(t, m, r)| (t, *m, r)) else {
            return;
        };
        if !ready {
            tracing::trace!(?tag, "commit: stall, head not ready");
            return;
        }

        if micro_op.mnemonic == Mnemonic::Syscall && self.regs().read(2) == 10 {
            let status = self.regs().read(4);
            tracing::debug!(status, "commit: program exit via syscall");
            self.mark_exited(status);
        }

        let (retired_tag, value) = self.rob.retire_head();
        debug_assert_eq!(retired_tag, tag, "retirement left the ring out of order");

        if let Some(dest) = micro_op.dest {
            if dest != 0 {
                self.regs_mut().write(dest, value);
                self.rat.clear_if_match(dest, tag);
            }
        }

        self.mark_instruction_completed();
        tracing::trace!(pc = micro_op.pc, value, "commit: retired");
    }
}
