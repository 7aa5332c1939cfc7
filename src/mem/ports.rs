//! Port trait definitions.

/// Memory operation requested over a [`MemoryPort`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemOp {
    /// A read request.
    Read,
}

/// A request submitted to a [`MemoryPort`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Request {
    /// The operation being requested.
    pub op: MemOp,
    /// Byte address of the access.
    pub addr: u32,
    /// Access size in bytes.
    pub size: u8,
}

/// A response consumed from a [`MemoryPort`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Response {
    /// The four bytes returned by the access.
    pub data: [u8; 4],
}

/// An asynchronous memory port: request-accept and response-available are
/// separate predicates, and a request may take arbitrarily many ticks to
/// produce a response.
pub trait MemoryPort {
    /// May a request be submitted this tick?
    fn can_req(&self) -> bool;
    /// Submit a read request.
    fn send_req(&mut self, request: Request);
    /// Is a response ready to consume?
    fn has_resp(&self) -> bool;
    /// Consume the ready response.
    fn recv_resp(&mut self) -> Response;
}

/// Synchronous, syscall-style memory access. Bypasses the port protocol;
/// used by the current execution model for loads and stores.
pub trait SyscallMemory {
    /// Reads `size` bytes (at most 4) from `addr`, little-endian.
    fn mem_read(&mut self, addr: u32, size: u32) -> [u8; 4];
    /// Writes `size` bytes (at most 4) of `data` to `addr`, little-endian.
    fn mem_write(&mut self, addr: u32, data: [u8; 4], size: u32);
}
