//! Reorder Buffer (ROB): the in-order retirement ring.
//!
//! A bounded ring of `capacity` slots addressed by a monotonic `head`/`tail`
//! modulo `capacity`. One slot is always reserved so that empty and full are
//! distinguishable. The slot index itself serves as the rename tag.

use crate::core::pipeline::micro_op::MicroOp;

/// Rename tag: the ROB slot index holding a given micro-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct RobTag(pub usize);

/// A single ROB slot.
#[derive(Clone, Copy, Debug)]
struct RobEntry {
    busy: bool,
    ready: bool,
    micro_op: Option<MicroOp>,
    value: u32,
}

impl Default for RobEntry {
    fn default() -> Self {
        Self {
            busy: false,
            ready: false,
            micro_op: None,
            value: 0,
        }
    }
}

/// The reorder buffer.
#[derive(Debug)]
pub struct Rob {
    entries: Vec<RobEntry>,
    head: usize,
    tail: usize,
}

impl Rob {
    /// Creates a ROB with `capacity` slots (one of which is always reserved
    /// to disambiguate empty from full).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 2, "ROB needs at least 2 slots to distinguish empty/full");
        Self {
            entries: vec![RobEntry::default(); capacity],
            head: 0,
            tail: 0,
        }
    }

    /// Total number of slots, including the one always reserved.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Index of the oldest occupied slot (next to retire).
    #[must_use]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Index one past the youngest occupied slot (next to allocate).
    #[must_use]
    pub fn tail(&self) -> usize {
        self.tail
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupancy(&self) -> usize {
        (self.tail + self.capacity() - self.head) % self.capacity()
    }

    /// `true` if no slot may be allocated without first retiring one.
    #[must_use]
    pub fn is_full(&self) -> bool {
        (self.tail + 1) % self.capacity() == self.head
    }

    /// `true` if no slot is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Allocates a new entry at the tail. Returns the assigned tag, or `None`
    /// if the ROB is full.
    pub fn allocate(&mut self, micro_op: MicroOp) -> Option<RobTag> {
        if self.is_full() {
            return None;
        }
        let tag = RobTag(self.tail);
        self.entries[self.tail] = RobEntry {
            busy: true,
            ready: false,
            micro_op: Some(micro_op),
            value: 0,
        };
        self.tail = (self.tail + 1) % self.capacity();
        Some(tag)
    }

    /// Returns the micro-op at `tag`, if the slot is occupied.
    #[must_use]
    pub fn micro_op(&self, tag: RobTag) -> Option<&MicroOp> {
        self.entries[tag.0].micro_op.as_ref()
    }

    /// Mutably borrows the micro-op at `tag` (for writing CDB-resolved
    /// operands via [`crate::common::operand::Operand::resolve_if_pending_on`]).
    pub fn micro_op_mut(&mut self, tag: RobTag) -> Option<&mut MicroOp> {
        self.entries[tag.0].micro_op.as_mut()
    }

    /// `true` if `tag` refers to an occupied, not-yet-retired slot.
    #[must_use]
    pub fn is_occupied(&self, tag: RobTag) -> bool {
        self.entries[tag.0].busy
    }

    /// `true` if the slot at `tag` has completed execution.
    #[must_use]
    pub fn is_ready(&self, tag: RobTag) -> bool {
        self.entries[tag.0].ready
    }

    /// Marks `tag`'s entry complete with its computed value. Does not itself
    /// fire the CDB — callers invoke this then immediately call
    /// [`Rob::broadcast`] (see `stages::execute`).
    pub fn complete(&mut self, tag: RobTag, value: u32) {
        let entry = &mut self.entries[tag.0];
        entry.ready = true;
        entry.value = value;
    }

    /// Reads back the value of a completed entry. `None` if not yet ready.
    #[must_use]
    pub fn value_of(&self, tag: RobTag) -> Option<u32> {
        let entry = &self.entries[tag.0];
        entry.ready.then_some(entry.value)
    }

    /// Fans `value` out to every occupied slot's operands pending on `tag`.
    /// Every reservation station indexes into this same storage rather than
    /// holding its own copy of the micro-op, so scanning the whole ring is
    /// equivalent to, and simpler than, scanning each RS bank.
    pub fn broadcast(&mut self, tag: RobTag, value: u32) {
        for entry in &mut self.entries {
            if entry.busy {
                if let Some(mop) = entry.micro_op.as_mut() {
                    mop.src1.resolve_if_pending_on(tag, value);
                    mop.src2.resolve_if_pending_on(tag, value);
                }
            }
        }
    }

    /// Returns the head slot's tag and micro-op, if occupied.
    #[must_use]
    pub fn peek_head(&self) -> Option<(RobTag, &MicroOp, bool)> {
        if self.is_empty() {
            return None;
        }
        let entry = &self.entries[self.head];
        entry
            .micro_op
            .as_ref()
            .map(|mop| (RobTag(self.head), mop, entry.ready))
    }

    /// Retires the head slot. Caller must have already confirmed it is ready.
    /// Returns the retired tag and its resolved value.
    pub fn retire_head(&mut self) -> (RobTag, u32) {
        let tag = RobTag(self.head);
        let value = self.entries[self.head].value;
        self.entries[self.head] = RobEntry::default();
        self.head = (self.head + 1) % self.capacity();
        (tag, value)
    }

    /// Flushes every slot (squash/recovery).
    pub fn flush(&mut self) {
        for entry in &mut self.entries {
            *entry = RobEntry::default();
        }
        self.head = 0;
        self.tail = 0;
    }
}
