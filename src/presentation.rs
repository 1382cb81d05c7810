// src/presentation.rs
use std::io::Write;

use prefix_lines_shared_kernel::{InfrastructureError, Result};
use prefix_lines_usecase::PrefixReport;

use crate::options::OutputFormat;

/// Render the report in `format`, newline-terminated.
pub fn render(report: &PrefixReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{}\n", report.matched)),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(report)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Yaml => render_yaml(report),
    }
}

#[cfg(feature = "yaml")]
fn render_yaml(report: &PrefixReport) -> Result<String> {
    Ok(serde_yaml::to_string(report)?)
}

#[cfg(not(feature = "yaml"))]
fn render_yaml(_report: &PrefixReport) -> Result<String> {
    use prefix_lines_shared_kernel::PresentationError;

    Err(PresentationError::UnsupportedFormat { format: OutputFormat::Yaml.as_str().to_string() }.into())
}

/// Write the rendered report to `out` and flush it.
pub fn emit<W: Write>(out: &mut W, report: &PrefixReport, format: OutputFormat) -> Result<()> {
    let rendered = render(report, format)?;
    out.write_all(rendered.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|source| InfrastructureError::OutputError {
            message: format!("failed to write {} output", format.as_str()),
            source,
        })?;
    Ok(())
}
