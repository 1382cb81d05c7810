// src/app.rs
use std::io;

use anyhow::{Context, Result};
use log::info;
use prefix_lines_infra::FsSourceOpener;
use prefix_lines_usecase::CountCommonPrefix;

use crate::{config::Config, presentation};

/// Compare the configured sources and print the report to stdout.
pub fn run(config: &Config) -> Result<()> {
    let opener = FsSourceOpener;
    let report = CountCommonPrefix::new(&opener)
        .run(&config.plan)
        .with_context(|| format!("cannot compare {} with {}", config.plan.first, config.plan.second))?;

    info!("{} leading lines match ({})", report.matched, report.stop.as_str());

    let stdout = io::stdout();
    presentation::emit(&mut stdout.lock(), &report, config.format).context("failed to emit output")?;
    Ok(())
}
