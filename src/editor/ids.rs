//! Client-local identifiers for nodes that have not been persisted yet.

use std::fmt;

/// Identifier assigned by the editor when a section or question is created
/// locally or hydrated from the backend. Stable for the lifetime of the
/// draft, never sent over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TempId(u64);

impl TempId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TempId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// Monotonic allocator for [`TempId`]s. One generator per draft, so ids are
/// unique within a draft without depending on node content.
#[derive(Debug, Clone, Default)]
pub struct TempIdGen {
    next: u64,
}

impl PartialEq for TempIdGen {
    fn eq(&self, _other: &Self) -> bool {
        // Generator state is bookkeeping, not document content.
        true
    }
}

impl TempIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> TempId {
        let id = TempId(self.next);
        self.next += 1;
        id
    }
}
