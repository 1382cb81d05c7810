use prefix_lines_shared_kernel::{MatchCount, SourcePath};
use serde::Serialize;

/// Why the lockstep scan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The first source had no more lines. The second source was not read again.
    FirstExhausted,
    /// The first source produced a line but the second had none left.
    SecondExhausted,
    /// Both sources produced a line and they differ.
    Mismatch,
}

impl StopReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstExhausted => "first_exhausted",
            Self::SecondExhausted => "second_exhausted",
            Self::Mismatch => "mismatch",
        }
    }
}

/// Outcome of scanning two line sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixScan {
    pub matched: MatchCount,
    pub stop: StopReason,
}

/// Result of comparing two named sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixReport {
    pub first: SourcePath,
    pub second: SourcePath,
    pub matched: MatchCount,
    pub stop: StopReason,
}
