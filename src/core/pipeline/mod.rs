//! ROB/RAT/RS bookkeeping and the five-stage tick.

/// The pipeline driver: ties every structure below into `tick()`.
pub mod engine;
/// Capacity-one in-flight fetch holder.
pub mod fetch_buffer;
/// The decoded, renamed micro-op record.
pub mod micro_op;
/// Register Alias Table.
pub mod rat;
/// Reorder Buffer.
pub mod rob;
/// Per-class reservation stations.
pub mod reservation_station;
/// Per-tick stage functions.
pub mod stages;
/// The squash/redirect latch.
pub mod squash;

pub use rob::RobTag;
