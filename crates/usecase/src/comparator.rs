use log::{debug, trace};
use prefix_lines_ports::LineSource;
use prefix_lines_shared_kernel::{ApplicationError, MatchCount, PrefixLinesError, Result};

use crate::dto::{PrefixScan, StopReason};

/// Count the leading line pairs that are exactly equal.
///
/// Lines are read in lockstep. The scan ends at the first unequal pair or as
/// soon as `first` is exhausted; `second` is never read past that point. An
/// exhausted `second` never matches a line from `first`.
pub fn common_prefix<A, B>(first: &mut A, second: &mut B) -> Result<PrefixScan>
where
    A: LineSource + ?Sized,
    B: LineSource + ?Sized,
{
    let mut matched = MatchCount::zero();

    let stop = loop {
        let Some(left) = first.next_line().map_err(|e| aborted(matched, "first", e))? else {
            break StopReason::FirstExhausted;
        };
        let right = second.next_line().map_err(|e| aborted(matched, "second", e))?;

        match right {
            None => break StopReason::SecondExhausted,
            Some(right) if right != left => break StopReason::Mismatch,
            Some(_) => {
                matched.increment();
                trace!("line {matched} matches");
            }
        }
    };

    debug!("scan stopped after {matched} matching lines ({})", stop.as_str());
    Ok(PrefixScan { matched, stop })
}

fn aborted(matched: MatchCount, role: &'static str, err: PrefixLinesError) -> PrefixLinesError {
    ApplicationError::ComparisonAborted { matched: matched.value(), role, source: Box::new(err) }
    .into()
}
