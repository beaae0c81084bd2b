//! CLI layer.
//!
//! Provides the command-line interface using clap: argument parsing,
//! running the conversion and formatting its summary.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::Cli;
