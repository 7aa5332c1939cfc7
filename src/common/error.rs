//! Core error taxonomy.
//!
//! The core never raises recoverable errors for ordinary execution; it fails
//! only by programmer contract violation (an interface not wired) or by a
//! detected structural invariant violation (debug builds only). Program-level
//! exit via `syscall` is not an error — it is latched into exit status and
//! polled by the driver.

use thiserror::Error;

/// Fatal errors surfaced by the core.
///
/// These fall into two classes: contract violations (an interface not wired)
/// and structural invariant violations (a debug-only consistency check
/// failed). Neither is expected in a correctly wired simulation; both abort
/// rather than attempt recovery.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The reorder buffer reported an occupancy outside `[0, rob_size - 1]`.
    #[error("ROB occupancy {occupancy} exceeds capacity {capacity}")]
    RobOverflow {
        /// Observed occupancy.
        occupancy: usize,
        /// Configured capacity.
        capacity: usize,
    },

    /// A RAT entry pointed at a ROB slot that was not occupied.
    #[error("RAT entry for register {reg} points at unoccupied ROB slot {tag}")]
    DanglingRatEntry {
        /// Architectural register index.
        reg: usize,
        /// The stale tag.
        tag: u32,
    },
}
