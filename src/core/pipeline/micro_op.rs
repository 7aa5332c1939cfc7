//! The decoded, renamed micro-op carried inside a ROB/RS slot.

use crate::common::operand::Operand;
use crate::isa::decode::{Category, Mnemonic};

/// A decoded, renamed instruction in flight through the backend.
///
/// Immutable once dispatched except for `src1`/`src2`, which are rewritten in
/// place by the CDB broadcast as producers complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MicroOp {
    /// Decoded mnemonic.
    pub mnemonic: Mnemonic,
    /// Functional-unit category.
    pub category: Category,
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw instruction word.
    pub inst: u32,
    /// Sign-extended 16-bit immediate.
    pub imm16: i32,
    /// 26-bit jump immediate.
    pub imm26: u32,
    /// Destination architectural register index, if any.
    pub dest: Option<usize>,
    /// First source operand (`rs`, or unused).
    pub src1: Operand,
    /// Second source operand (`rt`, or unused).
    pub src2: Operand,
}

impl MicroOp {
    /// `true` once both source operands have resolved values.
    #[must_use]
    pub fn operands_ready(&self) -> bool {
        !self.src1.is_pending() && !self.src2.is_pending()
    }

    /// `true` if this micro-op belongs to the load/store reservation class.
    #[must_use]
    pub fn is_memory(&self) -> bool {
        self.category.is_memory()
    }
}
