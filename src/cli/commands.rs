//! CLI command implementation.

use crate::cli::output::{OutputFormat, format_report};
use crate::cli::parser::Cli;
use crate::convert::Converter;
use crate::error::Result;
use tracing::warn;

/// Executes the conversion described by the CLI arguments.
///
/// # Returns
///
/// The formatted run summary.
///
/// # Errors
///
/// Returns an error if the output directory cannot be created, the input
/// directory cannot be listed, or the summary cannot be formatted.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    let report = Converter::new(&cli.input_dir, &cli.output_dir)
        .docs_base_url(&cli.docs_base_url)
        .run()?;

    if !report.is_clean() {
        warn!(
            skipped = report.skipped_files.len(),
            failed_writes = report.write_failures.len(),
            "conversion finished with errors"
        );
    }

    format_report(&report, format)
}
