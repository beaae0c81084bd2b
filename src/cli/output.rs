//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::convert::ConversionReport;
use crate::error::{CommandError, Error, Result};
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats a conversion report.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_report(report: &ConversionReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_report_text(report)),
        OutputFormat::Json => format_json(report),
    }
}

fn format_report_text(report: &ConversionReport) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "Converted {} file(s) from {} into {}",
        report.files_converted, report.input_dir, report.output_dir
    );
    let _ = writeln!(output, "  Sections written:  {}", report.sections_written.len());
    if report.sections_replaced > 0 {
        let _ = writeln!(output, "  Sections replaced: {}", report.sections_replaced);
    }

    if !report.skipped_files.is_empty() {
        let _ = writeln!(output, "  Files skipped:     {}", report.skipped_files.len());
        for skipped in &report.skipped_files {
            let _ = writeln!(output, "    {}: {}", skipped.path, skipped.reason);
        }
    }

    if !report.write_failures.is_empty() {
        let _ = writeln!(output, "  Write failures:    {}", report.write_failures.len());
        for failure in &report.write_failures {
            let _ = writeln!(output, "    {}: {}", failure.output_file, failure.reason);
        }
    }

    output
}

/// Formats an error for display.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorBody {
                error: String,
            }

            format_json(&ErrorBody {
                error: error.to_string(),
            })
            .unwrap_or_else(|_| "{}".to_string())
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| CommandError::from(e).into())
}
