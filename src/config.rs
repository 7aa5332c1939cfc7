//! Core configuration.
//!
//! Configuration is supplied in-process via `Config::default()` (overridden
//! as needed) or deserialized from JSON with `serde_json`. There is no CLI
//! or file-based config surface: no env vars, no on-disk persisted state.
//!
//! # Examples
//!
//! ```
//! use mips_ooo_core::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.rob_size, 32);
//! assert_eq!(config.rs_size, 16);
//! ```
//!
//! Deserializing from JSON:
//!
//! ```
//! use mips_ooo_core::Config;
//!
//! let json = r#"{"rob_size": 8, "rs_size": 4, "entry_pc": 67108864}"#;
//! let config: Config = serde_json::from_str(json).unwrap();
//! assert_eq!(config.rob_size, 8);
//! assert_eq!(config.entry_pc, 0x0400_0000);
//! ```

use serde::Deserialize;

mod defaults {
    /// Default ROB capacity.
    pub const ROB_SIZE: usize = 32;
    /// Default per-class reservation station capacity.
    pub const RS_SIZE: usize = 16;
    /// Default entry program counter (conventional MIPS user text base).
    pub const ENTRY_PC: u32 = 0x0400_0000;
}

/// Core sizing and boot parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Reorder buffer capacity. One slot is always reserved to distinguish
    /// empty from full, so at most `rob_size - 1` instructions are in flight.
    #[serde(default = "Config::default_rob_size")]
    pub rob_size: usize,

    /// Per-functional-unit-class reservation station capacity.
    #[serde(default = "Config::default_rs_size")]
    pub rs_size: usize,

    /// Initial program counter.
    #[serde(default = "Config::default_entry_pc")]
    pub entry_pc: u32,
}

impl Config {
    fn default_rob_size() -> usize {
        defaults::ROB_SIZE
    }

    fn default_rs_size() -> usize {
        defaults::RS_SIZE
    }

    fn default_entry_pc() -> u32 {
        defaults::ENTRY_PC
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rob_size: defaults::ROB_SIZE,
            rs_size: defaults::RS_SIZE,
            entry_pc: defaults::ENTRY_PC,
        }
    }
}
