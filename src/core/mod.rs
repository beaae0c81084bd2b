//! Core domain models.
//!
//! Pure data structures with no I/O dependencies.

pub mod section;

pub use section::{NO_HEADER, Section};
