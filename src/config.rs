// src/config.rs
use prefix_lines_ports::ComparisonPlan;

use crate::{args::Args, options::OutputFormat};

/// Immutable run configuration derived from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub plan: ComparisonPlan,
    pub format: OutputFormat,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            plan: ComparisonPlan::new(args.first, args.second),
            format: args.format,
        }
    }
}
