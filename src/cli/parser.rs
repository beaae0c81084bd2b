//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros. Every argument has
//! a default, so running the binary bare converts the standard locations.

use crate::convert::{DEFAULT_DOCS_BASE_URL, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use clap::Parser;
use std::path::PathBuf;

/// md-sections: split markdown documents into per-section text files.
///
/// Every `.md` file in the input directory is cut before each level-1 or
/// level-2 header, rendered to plain text, and written to the output
/// directory as `<name>_section_<header>.txt`.
#[derive(Parser, Debug)]
#[command(name = "md-sections")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the markdown files.
    #[arg(env = "MD_SECTIONS_INPUT_DIR", default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Directory to write section files to (created if missing).
    #[arg(env = "MD_SECTIONS_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Base URL for documentation links in the JSON report.
    #[arg(long, env = "MD_SECTIONS_DOCS_BASE_URL", default_value = DEFAULT_DOCS_BASE_URL)]
    pub docs_base_url: String,

    /// Enable verbose (debug) logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format for the run summary (text, json).
    #[arg(long, default_value = "text")]
    pub format: String,
}
