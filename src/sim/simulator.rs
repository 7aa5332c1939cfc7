//! Top-level driver: owns a [`Core`] over a [`FlatMemory`] and ticks it to
//! completion, owning the CPU plus its backing store and looping `tick()`.

use crate::common::error::CoreError;
use crate::config::Config;
use crate::core::pipeline::engine::Core;
use crate::sim::memory::FlatMemory;

/// Drives a [`Core`] backed by a [`FlatMemory`] one cycle at a time.
#[derive(Debug)]
pub struct Simulator {
    core: Core<FlatMemory>,
}

impl Simulator {
    /// Builds a simulator with `memory_size` bytes of flat memory based at
    /// `memory_base`, the core entry PC coming from `config`.
    #[must_use]
    pub fn new(config: Config, memory_size: usize, memory_base: u32) -> Self {
        let memory = FlatMemory::new(memory_size, memory_base);
        Self {
            core: Core::new(config, memory),
        }
    }

    /// Loads a raw instruction image at `addr` before the first tick.
    pub fn load_image(&mut self, addr: u32, image: &[u8]) {
        self.core.memory_mut().load_image(addr, image);
    }

    /// Advances the simulator by one clock cycle.
    pub fn tick(&mut self) -> Result<(), CoreError> {
        self.core.tick()
    }

    /// Ticks until the program exits via `syscall` or `max_cycles` is
    /// reached, returning `Some(status)` on exit or `None` on timeout.
    pub fn run(&mut self, max_cycles: u64) -> Result<Option<u32>, CoreError> {
        for _ in 0..max_cycles {
            self.core.tick()?;
            let (exited, status) = self.core.exit_status();
            if exited {
                return Ok(Some(status));
            }
        }
        Ok(None)
    }

    /// Borrows the underlying core (line-tracing, register inspection in
    /// tests and embedders).
    #[must_use]
    pub fn core(&self) -> &Core<FlatMemory> {
        &self.core
    }
}
