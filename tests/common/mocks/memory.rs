//! A memory double with configurable instruction-fetch latency, for exercising
//! stall behaviour that `FlatMemory`'s zero-latency responses never trigger.

use std::cell::Cell;

use mips_ooo_core::mem::{MemOp, MemoryPort, Request, Response, SyscallMemory};

/// Backs both the asynchronous instruction port and the synchronous data
/// hooks with one flat byte array, same as `FlatMemory`, but holds a read
/// request for `latency` extra ticks before `has_resp` goes true.
#[derive(Debug)]
pub struct MockMemory {
    bytes: Vec<u8>,
    base: u32,
    latency: u32,
    countdown: Cell<u32>,
    pending_addr: Option<u32>,
}

impl MockMemory {
    #[must_use]
    pub fn new(size: usize, base: u32) -> Self {
        Self {
            bytes: vec![0; size],
            base,
            latency: 0,
            countdown: Cell::new(0),
            pending_addr: None,
        }
    }

    /// Returns `self` with instruction fetches taking `latency` extra ticks
    /// to produce a response after the request is sent.
    #[must_use]
    pub fn with_latency(mut self, latency: u32) -> Self {
        self.latency = latency;
        self
    }

    pub fn load_image(&mut self, addr: u32, image: &[u8]) {
        let start = addr.wrapping_sub(self.base) as usize;
        let end = (start + image.len()).min(self.bytes.len());
        if start < end {
            self.bytes[start..end].copy_from_slice(&image[..end - start]);
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

impl MemoryPort for MockMemory {
    fn can_req(&self) -> bool {
        self.pending_addr.is_none()
    }

    fn send_req(&mut self, request: Request) {
        debug_assert_eq!(request.op, MemOp::Read);
        self.pending_addr = Some(request.addr);
        self.countdown.set(self.latency);
    }

    /// Ticks the latency countdown on every poll: `has_resp` is called once
    /// per cycle by decode regardless of whether it returns true, so that
    /// poll doubles as this double's clock.
    fn has_resp(&self) -> bool {
        if self.pending_addr.is_none() {
            return false;
        }
        if self.countdown.get() == 0 {
            return true;
        }
        self.countdown.set(self.countdown.get() - 1);
        false
    }

    fn recv_resp(&mut self) -> Response {
        let addr = self.pending_addr.take().unwrap_or(self.base);
        Response {
            data: self.read4(addr),
        }
    }
}

impl SyscallMemory for MockMemory {
    fn mem_read(&mut self, addr: u32, _size: u32) -> [u8; 4] {
        self.read4(addr)
    }

    fn mem_write(&mut self, addr: u32, data: [u8; 4], size: u32) {
        let size = (size as usize).min(4);
        self.write_bytes(addr, &data[..size]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_resp_waits_out_the_configured_latency() {
        let mut mem = MockMemory::new(16, 0).with_latency(2);
        mem.send_req(Request {
            op: MemOp::Read,
            addr: 0,
            size: 4,
        });
        assert!(!mem.has_resp());
        assert!(!mem.has_resp());
        assert!(mem.has_resp());
        assert!(mem.has_resp(), "ready response stays ready until consumed");
    }
}
