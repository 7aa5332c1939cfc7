//! Common types shared across the core.
//!
//! 1. **Error handling:** [`error::CoreError`], the contract-violation and
//!    structural-invariant error taxonomy.
//! 2. **Operand values:** [`operand::Operand`], the two-variant tagged value
//!    replacing a dynamically-tagged `('TAG', rob_id) | int` field.

/// Error types for contract violations and structural invariants.
pub mod error;
/// Resolved-or-pending operand values.
pub mod operand;

pub use error::CoreError;
pub use operand::Operand;
