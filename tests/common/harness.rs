//! Shared test fixture: a `Core` over a `MockMemory`, a program loader and a
//! run-to-exit loop.

use mips_ooo_core::{Config, Core};

use crate::common::asm::words_to_bytes;
use crate::common::mocks::memory::MockMemory;

const MEMORY_SIZE: usize = 4096;

pub struct TestContext {
    pub core: Core<MockMemory>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let memory = MockMemory::new(MEMORY_SIZE, config.entry_pc);
        Self {
            core: Core::new(config, memory),
        }
    }

    pub fn with_latency(config: Config, latency: u32) -> Self {
        let memory = MockMemory::new(MEMORY_SIZE, config.entry_pc).with_latency(latency);
        Self {
            core: Core::new(config, memory),
        }
    }

    /// Loads `instructions` at the core's entry PC.
    pub fn load_program(&mut self, instructions: &[u32]) {
        let pc = self.core.pc();
        let bytes = words_to_bytes(instructions);
        self.core.memory_mut().load_image(pc, &bytes);
    }

    /// Ticks until the program exits via `syscall` or `max_cycles` elapses.
    /// Returns `(exited, status)`.
    pub fn run_until_exit(&mut self, max_cycles: u64) -> (bool, u32) {
        for _ in 0..max_cycles {
            self.core.tick().expect("core invariant violated");
            let (exited, status) = self.core.exit_status();
            if exited {
                return (true, status);
            }
        }
        (false, 0)
    }
}
