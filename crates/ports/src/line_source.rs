// crates/ports/src/line_source.rs
use prefix_lines_shared_kernel::{Line, Result, SourcePath};

/// The two sources to compare, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonPlan {
    pub first: SourcePath,
    pub second: SourcePath,
}

impl ComparisonPlan {
    pub fn new(first: impl Into<SourcePath>, second: impl Into<SourcePath>) -> Self {
        Self { first: first.into(), second: second.into() }
    }
}

/// Forward-only reader over the lines of one source.
///
/// `Ok(None)` means the source is exhausted; every later call keeps
/// returning `Ok(None)`.
pub trait LineSource {
    fn next_line(&mut self) -> Result<Option<Line>>;
}

impl<S: LineSource + ?Sized> LineSource for Box<S> {
    fn next_line(&mut self) -> Result<Option<Line>> {
        (**self).next_line()
    }
}

/// Port for acquiring a [`LineSource`]. The source is released when the
/// returned value is dropped.
pub trait SourceOpener {
    fn open(&self, path: &SourcePath) -> Result<Box<dyn LineSource>>;
}
