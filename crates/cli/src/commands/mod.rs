//! Command implementations.

pub mod compute;
pub mod fetch;

pub use compute::run_compute;
pub use fetch::run_fetch;

use anyhow::Result;

use crate::cli::OutputFormat;
use crate::output::{format_report_detail, Report};

/// Print a report in the requested format
fn print_report(report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", format_report_detail(report));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report)?;
            println!("{}", json);
        }
    }
    Ok(())
}
