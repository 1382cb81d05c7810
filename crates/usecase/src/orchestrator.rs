use log::debug;
use prefix_lines_ports::{ComparisonPlan, LineSource, SourceOpener};
use prefix_lines_shared_kernel::{ApplicationError, PrefixLinesError, Result, SourcePath};

use crate::{comparator::common_prefix, dto::PrefixReport};

/// Opens both sources of a [`ComparisonPlan`] and measures their common prefix.
pub struct CountCommonPrefix<'a> {
    opener: &'a dyn SourceOpener,
}

impl<'a> CountCommonPrefix<'a> {
    pub fn new(opener: &'a dyn SourceOpener) -> Self {
        Self { opener }
    }

    /// Both sources are opened before any line is compared, so an open
    /// failure never produces a partial result. Handles are released on return.
    pub fn run(&self, plan: &ComparisonPlan) -> Result<PrefixReport> {
        let mut first = self.open("first", &plan.first)?;
        let mut second = self.open("second", &plan.second)?;
        debug!("comparing {} with {}", plan.first, plan.second);

        let scan = common_prefix(&mut *first, &mut *second)?;
        Ok(PrefixReport {
            first: plan.first.clone(),
            second: plan.second.clone(),
            matched: scan.matched,
            stop: scan.stop,
        })
    }

    fn open(&self, role: &'static str, path: &SourcePath) -> Result<Box<dyn LineSource>> {
        self.opener.open(path).map_err(|err| source_unavailable(role, err))
    }
}

fn source_unavailable(role: &'static str, err: PrefixLinesError) -> PrefixLinesError {
    ApplicationError::SourceUnavailable { role, source: Box::new(err) }.into()
}
