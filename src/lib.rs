//! # md-sections
//!
//! Splits a directory of markdown documents into per-section plain-text
//! files.
//!
//! Each `.md` file is cut immediately before every level-1 or level-2
//! header line. Every resulting section is rendered to HTML by a
//! CommonMark renderer, stripped of tags, and written to
//! `<name>_section_<sanitized header>.txt` in the output directory.
//!
//! ```
//! use md_sections::{sanitize_header, split};
//!
//! let sections = split("# Title\nhello\n## Sub\nworld");
//! assert_eq!(sections.len(), 2);
//! assert_eq!(sanitize_header("Intro: Setup!"), "Intro--Setup-");
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]

pub mod cli;
pub mod convert;
pub mod core;
pub mod error;
pub mod io;
pub mod render;
pub mod splitting;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use crate::core::{NO_HEADER, Section};

// Re-export splitting and rendering
pub use render::{CommonMarkRenderer, Renderer, render_plain_text, strip_tags};
pub use splitting::{SectionSplitter, extract_header, split, split_boundaries, split_sections};

// Re-export conversion types
pub use convert::{
    ConversionReport, Converter, docs_link, output_file_name, run, sanitize_header,
};

// Re-export CLI types
pub use cli::{Cli, OutputFormat};
