//! I/O utilities.
//!
//! Directory listing, whole-file reads and artifact writes.

pub mod reader;

pub use reader::{ensure_dir, list_files_with_extension, read_file, write_file};
