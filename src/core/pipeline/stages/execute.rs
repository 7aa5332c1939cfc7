//! Execute: ALU/address computation, control-transfer resolution and the
//! CDB broadcast.

use crate::core::pipeline::engine::Core;
use crate::core::pipeline::rob::RobTag;
use crate::isa::decode::{Category, Mnemonic};
use crate::mem::{MemoryPort, SyscallMemory};

impl<Mem: MemoryPort + SyscallMemory> Core<Mem> {
    pub(crate) fn execute(&mut self, tag: RobTag) {
        debug_assert!(
            self.rob.is_occupied(tag),
            "execute dispatched on an unoccupied ROB slot"
        );
        let Some(micro_op) = self.rob.micro_op(tag).copied() else {
            return;
        };

        let rs_data = micro_op.src1.value().unwrap_or(0);
        let rt_data = micro_op.src2.value().unwrap_or(0);
        let next_pc = micro_op.pc.wrapping_add(4);

        let value = match micro_op.category {
            Category::Alu => match micro_op.mnemonic {
                Mnemonic::Sub => rs_data.wrapping_sub(rt_data),
                _ => rs_data.wrapping_add(rt_data),
            },
            Category::AluImm => rs_data.wrapping_add(micro_op.imm16 as u32),
            Category::Load => {
                let addr = rs_data.wrapping_add(micro_op.imm16 as u32);
                u32::from_le_bytes(self.memory.mem_read(addr, 4))
            }
            Category::Store => {
                let addr = rs_data.wrapping_add(micro_op.imm16 as u32);
                self.memory.mem_write(addr, rt_data.to_le_bytes(), 4);
                0
            }
            Category::Branch => {
                let taken = match micro_op.mnemonic {
                    Mnemonic::Beq => rs_data == rt_data,
                    Mnemonic::Bne => rs_data != rt_data,
                    _ => false,
                };
                if taken {
                    let target = next_pc.wrapping_add((micro_op.imm16 << 2) as u32);
                    self.squash.set(target);
                }
                0
            }
            Category::Jump => {
                self.squash.set(jump_target(micro_op.pc, micro_op.imm26));
                0
            }
            Category::JumpLink => {
                self.squash.set(jump_target(micro_op.pc, micro_op.imm26));
                next_pc
            }
            Category::IndirectJump => {
                self.squash.set(rs_data);
                0
            }
            Category::Syscall | Category::Unknown => 0,
        };

        self.rob.complete(tag, value);
        self.rob.broadcast(tag, value);
        tracing::trace!(pc = micro_op.pc, value, "execute: completed");
    }
}

fn jump_target(pc: u32, imm26: u32) -> u32 {
    (pc & 0xF000_0000) | (imm26 << 2)
}
