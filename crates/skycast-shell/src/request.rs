//! Sequence tokens for in-flight requests.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues monotonically increasing ids; only the newest is current.
///
/// A result is applied only if its id is still current when it arrives, so
/// a slow response to a superseded request can never overwrite fresher data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> RequestId {
        self.latest += 1;
        RequestId(self.latest)
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        id.0 == self.latest
    }

    /// Make every outstanding id stale without issuing a new one.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}
