//! Simulation utilities: a reference flat memory, raw-image loading, and the
//! top-level [`simulator::Simulator`] driver.

/// Raw-bytes program-image loading (no ELF/object parsing).
pub mod loader;
/// Reference flat memory implementing both memory-access surfaces.
pub mod memory;
/// The top-level `tick()`-driving loop.
pub mod simulator;
