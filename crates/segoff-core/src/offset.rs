//! Signed distance between the entry routine and the global counter.

use std::fmt;

use crate::layout::{code_address, counter_address};

/// Byte offset of the entry routine relative to the global counter.
///
/// Negative when the counter sits above the entry routine, which is the
/// usual case when code is mapped below data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset(isize);

impl Offset {
    /// Offset from `counter` to `entry`, both read as pointer-width signed
    /// integers. Wraps on overflow.
    pub fn between(entry: usize, counter: usize) -> Self {
        Self((entry as isize).wrapping_sub(counter as isize))
    }

    /// Measure `entry` against the global counter of this process.
    pub fn measure(entry: *const ()) -> Self {
        Self::between(code_address(entry), counter_address())
    }

    pub fn value(self) -> isize {
        self.0
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
