//! Register Alias Table (RAT).
//!
//! Maps each of the 32 architectural registers to either "architectural"
//! (`None` — read from the register file) or the ROB tag of its youngest
//! in-flight producer.

use crate::core::pipeline::rob::RobTag;

/// The register alias table.
#[derive(Debug)]
pub struct Rat {
    producer: [Option<RobTag>; 32],
}

impl Default for Rat {
    fn default() -> Self {
        Self::new()
    }
}

impl Rat {
    /// Creates a RAT with every register architectural.
    #[must_use]
    pub fn new() -> Self {
        Self {
            producer: [None; 32],
        }
    }

    /// Records `tag` as the youngest producer for `reg`. No-op for `$0`.
    pub fn set_producer(&mut self, reg: usize, tag: RobTag) {
        if reg != 0 {
            self.producer[reg] = Some(tag);
        }
    }

    /// Returns the youngest in-flight producer for `reg`, if any.
    #[must_use]
    pub fn producer_of(&self, reg: usize) -> Option<RobTag> {
        self.producer[reg]
    }

    /// Clears `reg`'s RAT entry only if it still points at `tag`.
    ///
    /// Guards against an intervening rename having since overwritten it:
    /// only the youngest producer may hold the tag for a register.
    pub fn clear_if_match(&mut self, reg: usize, tag: RobTag) {
        if self.producer[reg] == Some(tag) {
            self.producer[reg] = None;
        }
    }

    /// Resets every entry to architectural (squash/recovery).
    pub fn flush(&mut self) {
        self.producer = [None; 32];
    }
}
