//! Memory interfaces: asynchronous ports and syscall-style hooks.
//!
//! The core never owns memory directly — it holds capability references to
//! a collaborator's port functions. The instruction port is asynchronous
//! (`can_req`/`send_req`/`has_resp`/`recv_resp`); the data port has the same
//! shape but is currently unused by the execution model (loads/stores are
//! routed through the synchronous [`SyscallMemory`] hooks instead).

pub mod ports;

pub use ports::{MemOp, MemoryPort, Request, Response, SyscallMemory};
