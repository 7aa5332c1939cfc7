//! Capacity-one holding cell for an in-flight instruction fetch.

/// An outstanding fetch: the instruction's own PC and the sequential
/// next-PC that was already committed to the PC register when the request
/// was sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchBufferEntry {
    /// PC of the instruction being fetched.
    pub pc: u32,
    /// Sequential next PC (`pc + 4`).
    pub next_pc: u32,
}

/// The fetch buffer: present iff a memory request has been sent and its
/// response has not yet been consumed by decode.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchBuffer {
    entry: Option<FetchBufferEntry>,
}

impl FetchBuffer {
    /// Creates an empty fetch buffer.
    #[must_use]
    pub fn new() -> Self {
        Self { entry: None }
    }

    /// `true` if a fetch is already outstanding.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.entry.is_some()
    }

    /// Records a newly-sent fetch request.
    pub fn fill(&mut self, pc: u32, next_pc: u32) {
        self.entry = Some(FetchBufferEntry { pc, next_pc });
    }

    /// Returns the outstanding entry, if any.
    #[must_use]
    pub fn entry(&self) -> Option<FetchBufferEntry> {
        self.entry
    }

    /// Clears the buffer: either decode consumed the response, or squash
    /// discarded it.
    pub fn clear(&mut self) {
        self.entry = None;
    }
}
