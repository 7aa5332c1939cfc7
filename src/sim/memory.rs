//! Reference flat memory: a single zeroed byte array reached two ways, the
//! asynchronous [`MemoryPort`] used by fetch and the synchronous
//! [`SyscallMemory`] hooks used by load/store execution. No MMU, no cache
//! hierarchy — just bytes at addresses.

use crate::mem::{MemOp, MemoryPort, Request, Response, SyscallMemory};

/// Zero-initialized byte-addressed memory backing a [`crate::sim::simulator::Simulator`].
///
/// Instruction reads complete with zero latency: a response is available as
/// soon as the request is sent. A request is legally allowed to take
/// arbitrarily many ticks to produce a response; this reference memory
/// simply chooses the fastest legal point in that range.
#[derive(Debug)]
pub struct FlatMemory {
    bytes: Vec<u8>,
    base: u32,
    pending: Option<Response>,
}

impl FlatMemory {
    /// Allocates `size` zeroed bytes addressed starting at `base`.
    #[must_use]
    pub fn new(size: usize, base: u32) -> Self {
        Self {
            bytes: vec![0; size],
            base,
            pending: None,
        }
    }

    /// Copies `image` into memory starting at `addr`. Bytes that fall
    /// outside the backing store are dropped with a warning rather than
    /// panicking — this is a test/embedding fixture, not a production MMU.
    pub fn load_image(&mut self, addr: u32, image: &[u8]) {
        let start = addr.wrapping_sub(self.base) as usize;
        let Some(end) = start.checked_add(image.len()) else {
            tracing::warn!(addr, "load_image: address range overflows");
            return;
        };
        let clamped_end = end.min(self.bytes.len());
        if end > self.bytes.len() {
            tracing::warn!(addr, len = image.len(), capacity = self.bytes.len(), "load_image: image truncated to backing store size");
        }
        if start < clamped_end {
            self.bytes[start..clamped_end].copy_from_slice(&image[..clamped_end - start]);
        }
    }

    fn read4(&self, addr: u32) -> [u8; 4] {
        let start = addr.wrapping_sub(self.base) as usize;
        let mut out = [0u8; 4];
        for (i, byte) in out.iter_mut().enumerate() {
            if let Some(b) = self.bytes.get(start + i) {
                *byte = *b;
            }
        }
        out
    }

    fn write_bytes(&mut self, addr: u32, data: &[u8]) {
        let start = addr.wrapping_sub(self.base) as usize;
        for (i, b) in data.iter().enumerate() {
            if let Some(slot) = self.bytes.get_mut(start + i) {
                *slot = *b;
            }
        }
    }
}

impl MemoryPort for FlatMemory {
    fn can_req(&self) -> bool {
        self.pending.is_none()
    }

    fn send_req(&mut self, request: Request) {
        debug_assert_eq!(
            request.op,
            MemOp::Read,
            "FlatMemory's instruction port only ever serves reads"
        );
        self.pending = Some(Response {
            data: self.read4(request.addr),
        });
    }

    fn has_resp(&self) -> bool {
        self.pending.is_some()
    }

    fn recv_resp(&mut self) -> Response {
        self.pending.take().unwrap_or(Response { data: [0; 4] })
    }
}

impl SyscallMemory for FlatMemory {
    fn mem_read(&mut self, addr: u32, size: u32) -> [u8; 4] {
        debug_assert!(size <= 4, "mem_read size {size} exceeds a word");
        self.read4(addr)
    }

    fn mem_write(&mut self, addr: u32, data: [u8; 4], size: u32) {
        let size = (size as usize).min(4);
        self.write_bytes(addr, &data[..size]);
    }
}
