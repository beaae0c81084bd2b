//! Directory-level conversion.
//!
//! - **naming**: header sanitization and output file names
//! - **batch**: the converter that reads, splits and writes a directory

pub mod batch;
pub mod naming;

pub use batch::{
    ConversionReport, Converter, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, SkippedFile,
    WriteFailure, WrittenSection, run,
};
pub use naming::{DEFAULT_DOCS_BASE_URL, docs_link, output_file_name, sanitize_header};
