//! Section representation for split markdown documents.
//!
//! A section is a contiguous slice of a document that starts at a header
//! line (or at the beginning of the document) and runs until the next
//! level-1 or level-2 header. Each section keeps its position in the
//! source so the split can be checked against the original text.

use serde::Serialize;
use std::ops::Range;

/// Header used for sections without any header line.
pub const NO_HEADER: &str = "no_header";

/// A header-delimited slice of a markdown document.
///
/// # Examples
///
/// ```
/// use md_sections::core::Section;
///
/// let section = Section::new(0, "Intro".to_string(), "Intro\n".to_string(), 0..8);
/// assert_eq!(section.len(), 8);
/// assert!(section.has_header());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Sequential index within the document (0-based).
    pub index: usize,

    /// Header text captured from the first header line, or [`NO_HEADER`].
    pub header: String,

    /// Rendered content with markup tags removed.
    pub plain_text: String,

    /// Byte range of the raw markdown slice in the source document.
    pub byte_range: Range<usize>,
}

impl Section {
    /// Creates a new section.
    #[must_use]
    pub const fn new(
        index: usize,
        header: String,
        plain_text: String,
        byte_range: Range<usize>,
    ) -> Self {
        Self {
            index,
            header,
            plain_text,
            byte_range,
        }
    }

    /// Returns the raw markdown slice this section covers in `document`.
    ///
    /// Returns an empty string if `document` is not the text the section
    /// was split from.
    #[must_use]
    pub fn source<'a>(&self, document: &'a str) -> &'a str {
        document.get(self.byte_range.clone()).unwrap_or_default()
    }

    /// Returns the size of the raw slice in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.byte_range.end - self.byte_range.start
    }

    /// Returns whether the raw slice is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether a header line was found in this section.
    #[must_use]
    pub fn has_header(&self) -> bool {
        self.header != NO_HEADER
    }
}
