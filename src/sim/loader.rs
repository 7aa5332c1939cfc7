//! Raw program-image loading. ELF/object-format parsing is not this crate's
//! job; this module is the minimal external-collaborator surface a
//! `Simulator` embedder needs — no ELF/object parsing, just bytes at an
//! address.

use crate::sim::memory::FlatMemory;
use std::io;
use std::path::Path;

/// Reads a raw binary image from disk.
pub fn read_image(path: impl AsRef<Path>) -> io::Result<Vec<u8>> {
    std::fs::read(path)
}

/// Writes `image` into `memory` starting at `addr`.
pub fn load_image(memory: &mut FlatMemory, addr: u32, image: &[u8]) {
    memory.load_image(addr, image);
}
