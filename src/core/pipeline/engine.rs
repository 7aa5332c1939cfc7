//! The pipeline driver: ties the ROB/RAT/RS/fetch-buffer/squash-latch state
//! together and advances them one cycle per [`Core::tick`].

use crate::common::error::CoreError;
use crate::config::Config;
use crate::core::pipeline::fetch_buffer::FetchBuffer;
use crate::core::pipeline::rat::Rat;
use crate::core::pipeline::reservation_station::{FunctionalUnit, ReservationStations};
use crate::core::pipeline::rob::{Rob, RobTag};
use crate::core::pipeline::squash::SquashLatch;
use crate::core::regfile::RegisterFile;
use crate::mem::{MemoryPort, SyscallMemory};

/// The out-of-order core, generic over its memory collaborator: a single
/// unified address space reached two ways, an asynchronous [`MemoryPort`]
/// for instruction fetch and synchronous [`SyscallMemory`] hooks for loads
/// and stores.
///
/// `tick()` runs the five stages in reverse program order — commit, issue
/// (coupled with execute), decode/rename/dispatch, fetch — so that within one
/// cycle a stage only ever observes the prior cycle's output of a later
/// stage.
pub struct Core<Mem> {
    config: Config,
    pc: u32,
    regs: RegisterFile,
    pub(crate) rob: Rob,
    pub(crate) rat: Rat,
    pub(crate) rs: ReservationStations,
    pub(crate) fetch_buffer: FetchBuffer,
    /// A ROB entry that was renamed and allocated but could not be placed in
    /// a reservation station because its class's bank was full. Retried on
    /// every subsequent decode call until a slot frees up; the stall must
    /// not lose the op or duplicate-allocate a second ROB entry for it.
    pub(crate) pending_dispatch: Option<(RobTag, FunctionalUnit)>,
    pub(crate) squash: SquashLatch,
    pub(crate) memory: Mem,
    instruction_completed: bool,
    exited: bool,
    exit_status: u32,
    cycle: u64,
}

impl<Mem> Core<Mem> {
    /// Builds a core at `config.entry_pc` with empty ROB/RAT/RS over the
    /// given memory collaborator.
    pub fn new(config: Config, memory: Mem) -> Self {
        Self {
            pc: config.entry_pc,
            regs: RegisterFile::new(),
            rob: Rob::new(config.rob_size),
            rat: Rat::new(),
            rs: ReservationStations::new(config.rs_size),
            fetch_buffer: FetchBuffer::new(),
            pending_dispatch: None,
            squash: SquashLatch::new(),
            memory,
            instruction_completed: false,
            exited: false,
            exit_status: 0,
            cycle: 0,
            config,
        }
    }

    /// Current program counter. Exposed for tests and line-tracing.
    #[must_use]
    pub fn pc(&self) -> u32 {
        self.pc
    }

    pub(crate) fn set_pc(&mut self, pc: u32) {
        self.pc = pc;
    }

    pub(crate) fn regs(&self) -> &RegisterFile {
        &self.regs
    }

    pub(crate) fn regs_mut(&mut self) -> &mut RegisterFile {
        &mut self.regs
    }

    /// Reads architectural register `idx`. Exposed for embedders and tests.
    #[must_use]
    pub fn register(&self, idx: usize) -> u32 {
        self.regs.read(idx)
    }

    /// Mutably borrows the memory collaborator (image loading before the
    /// first tick).
    pub fn memory_mut(&mut self) -> &mut Mem {
        &mut self.memory
    }

    pub(crate) fn mark_exited(&mut self, status: u32) {
        self.exited = true;
        self.exit_status = status;
    }

    pub(crate) fn mark_instruction_completed(&mut self) {
        self.instruction_completed = true;
    }

    /// One-shot flag: `true` iff the just-finished tick retired an
    /// instruction. Cleared at the start of every `tick()`.
    #[must_use]
    pub fn instruction_completed(&self) -> bool {
        self.instruction_completed
    }

    /// Always `false` — reserved for ROI markers in richer cores.
    #[must_use]
    pub fn roi_flag(&self) -> bool {
        false
    }

    /// `(exited, status)`. `status` is only meaningful once `exited` is true.
    #[must_use]
    pub fn exit_status(&self) -> (bool, u32) {
        (self.exited, self.exit_status)
    }

    /// Short one-line state summary, `"OOO: PC=<pc> ROB=[head->tail]"`.
    #[must_use]
    pub fn linetrace(&self) -> String {
        format!(
            "OOO: PC={:#010x} ROB=[{}->{}]",
            self.pc,
            self.rob.head(),
            self.rob.tail()
        )
    }

    fn recover(&mut self, redirect_pc: u32) {
        tracing::debug!(redirect_pc, cycle = self.cycle, "squash/recovery");
        self.pc = redirect_pc;
        self.fetch_buffer.clear();
        self.rob.flush();
        self.rat.flush();
        self.rs.flush();
        self.pending_dispatch = None;
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) -> Result<(), CoreError> {
        if self.rob.occupancy() >= self.rob.capacity() {
            return Err(CoreError::RobOverflow {
                occupancy: self.rob.occupancy(),
                capacity: self.rob.capacity(),
            });
        }
        for reg in 0..32 {
            if let Some(tag) = self.rat.producer_of(reg) {
                if !self.rob.is_occupied(tag) {
                    return Err(CoreError::DanglingRatEntry {
                        reg,
                        tag: tag.0 as u32,
                    });
                }
            }
        }
        Ok(())
    }
}

impl<Mem: MemoryPort + SyscallMemory> Core<Mem> {
    /// Advances the core by exactly one clock cycle.
    pub fn tick(&mut self) -> Result<(), CoreError> {
        self.cycle += 1;
        self.instruction_completed = false;
        tracing::trace!(cycle = self.cycle, pc = self.pc, "tick");

        if let Some(redirect_pc) = self.squash.take() {
            self.recover(redirect_pc);
        }

        self.commit();
        self.issue_and_execute();
        self.decode();
        self.fetch();

        #[cfg(debug_assertions)]
        self.check_invariants()?;

        Ok(())
    }
}

impl<Mem> std::fmt::Debug for Core<Mem> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Core")
            .field("pc", &self.pc)
            .field("rob_occupancy", &self.rob.occupancy())
            .field("exited", &self.exited)
            .field("exit_status", &self.exit_status)
            .finish()
    }
}
