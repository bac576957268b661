use std::fmt::{Debug, Formatter};

use crate::core::Timestamp;

/// Query interval over the event clock.
#[derive(Copy, Clone, Eq, PartialEq)]
#[must_use]
pub struct Interval {
    /// Inclusive.
    pub start: Timestamp,

    /// Inclusive.
    pub end: Timestamp,
}

impl Debug for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}..={:?}", self.start, self.end)
    }
}

impl Interval {
    pub const fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// An inverted interval contains no time at all.
    pub const fn is_inverted(self) -> bool {
        self.start > self.end
    }
}
