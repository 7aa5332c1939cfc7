//! Reservation stations: per-functional-unit holding pens for dispatched,
//! not-yet-issued micro-ops.

use crate::core::pipeline::rob::RobTag;

/// Functional-unit class. Indexes a fixed-size array rather than a
/// string-keyed map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FunctionalUnit {
    /// ALU class: everything that is not a memory op.
    Alu,
    /// Load/store class.
    Ls,
}

/// A single occupied RS slot: a reference to the ROB tag whose micro-op is
/// waiting here for its operands to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Slot {
    tag: RobTag,
}

/// One functional-unit class's reservation stations.
#[derive(Debug)]
struct Bank {
    slots: Vec<Option<Slot>>,
}

impl Bank {
    fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    fn free_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    fn occupy(&mut self, idx: usize, tag: RobTag) {
        self.slots[idx] = Some(Slot { tag });
    }

    fn remove(&mut self, idx: usize) -> Option<RobTag> {
        self.slots[idx].take().map(|slot| slot.tag)
    }

    fn flush(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }
}

/// The two independent reservation-station banks.
#[derive(Debug)]
pub struct ReservationStations {
    alu: Bank,
    ls: Bank,
}

impl ReservationStations {
    /// Creates both banks with `capacity` slots each.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            alu: Bank::new(capacity),
            ls: Bank::new(capacity),
        }
    }

    fn bank(&self, unit: FunctionalUnit) -> &Bank {
        match unit {
            FunctionalUnit::Alu => &self.alu,
            FunctionalUnit::Ls => &self.ls,
        }
    }

    fn bank_mut(&mut self, unit: FunctionalUnit) -> &mut Bank {
        match unit {
            FunctionalUnit::Alu => &mut self.alu,
            FunctionalUnit::Ls => &mut self.ls,
        }
    }

    /// `true` if `unit`'s bank has at least one free slot.
    #[must_use]
    pub fn has_free_slot(&self, unit: FunctionalUnit) -> bool {
        self.bank(unit).free_slot().is_some()
    }

    /// Places `tag` into the first free slot of `unit`'s bank. Returns
    /// `false` without effect if no slot is free — the caller is responsible
    /// for having checked [`has_free_slot`] first; dispatch must stall
    /// rather than lose the op if none is free.
    ///
    /// [`has_free_slot`]: Self::has_free_slot
    pub fn dispatch(&mut self, unit: FunctionalUnit, tag: RobTag) -> bool {
        let bank = self.bank_mut(unit);
        let Some(idx) = bank.free_slot() else {
            return false;
        };
        bank.occupy(idx, tag);
        true
    }

    /// Removes and returns the tag of the first operand-ready slot in
    /// `unit`'s bank, given a predicate telling whether a tag's micro-op has
    /// both operands resolved. Selection policy beyond "first ready slot
    /// found" is unconstrained.
    pub fn take_ready(
        &mut self,
        unit: FunctionalUnit,
        mut is_ready: impl FnMut(RobTag) -> bool,
    ) -> Option<RobTag> {
        let bank = self.bank_mut(unit);
        let idx = bank
            .slots
            .iter()
            .position(|slot| slot.is_some_and(|s| is_ready(s.tag)))?;
        bank.remove(idx)
    }

    /// Clears every slot of both banks (squash/recovery).
    pub fn flush(&mut self) {
        self.alu.flush();
        self.ls.flush();
    }
}
