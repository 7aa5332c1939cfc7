//! MIPS32 instruction set: field decode for the covered subset.

/// Field decode and mnemonic classification.
pub mod decode;

pub use decode::{decode, Category, Mnemonic};
