// crates/shared-kernel/src/value_objects/counts.rs
use serde::Serialize;

/// Number of leading line pairs confirmed equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MatchCount(usize);

impl MatchCount {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Record one more matching pair.
    #[inline]
    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

impl Default for MatchCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<usize> for MatchCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<MatchCount> for usize {
    fn from(value: MatchCount) -> Self {
        value.0
    }
}

impl PartialEq<usize> for MatchCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl PartialEq<MatchCount> for usize {
    fn eq(&self, other: &MatchCount) -> bool {
        *self == other.0
    }
}

mod display {
    use std::fmt;

    use super::MatchCount;

    impl fmt::Display for MatchCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
