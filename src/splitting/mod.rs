//! Header-based section splitting.
//!
//! A document is cut immediately before every level-1 or level-2 header
//! line, so each header stays attached to the section it introduces and
//! any text before the first such header forms a leading section of its
//! own. The cut points always tile the whole document.
//!
//! Section names are taken from the first header line of levels 1 through
//! 6 inside each section. Because only levels 1 and 2 split, a leading
//! section can be named after a level-3 or deeper header that did not
//! start it.

use crate::core::{NO_HEADER, Section};
use crate::render::{CommonMarkRenderer, Renderer, render_plain_text};
use regex::Regex;
use std::sync::OnceLock;

/// Splits documents into rendered sections with a shared renderer.
///
/// # Examples
///
/// ```
/// use md_sections::splitting::SectionSplitter;
///
/// let splitter = SectionSplitter::new();
/// let sections = splitter.split("# Title\nhello\n## Sub\nworld");
/// assert_eq!(sections.len(), 2);
/// assert_eq!(sections[0].header, "Title");
/// assert_eq!(sections[1].header, "Sub");
/// ```
#[derive(Debug, Clone)]
pub struct SectionSplitter<R: Renderer = CommonMarkRenderer> {
    renderer: R,
}

impl Default for SectionSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionSplitter {
    /// Creates a splitter using the CommonMark renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_renderer(CommonMarkRenderer::new())
    }
}

impl<R: Renderer> SectionSplitter<R> {
    /// Creates a splitter with a custom renderer.
    #[must_use]
    pub const fn with_renderer(renderer: R) -> Self {
        Self { renderer }
    }

    /// Returns the renderer used for plain-text conversion.
    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Splits `text` into sections in document order.
    ///
    /// Never fails: empty or header-less input yields a single section
    /// named [`NO_HEADER`].
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<Section> {
        split_sections(text, &self.renderer)
    }
}

#[allow(clippy::expect_used)]
fn boundary_regex() -> &'static Regex {
    static BOUNDARY: OnceLock<Regex> = OnceLock::new();
    BOUNDARY.get_or_init(|| Regex::new(r"\A#{1,2}\s").expect("valid regex"))
}

#[allow(clippy::expect_used)]
fn header_regex() -> &'static Regex {
    static HEADER: OnceLock<Regex> = OnceLock::new();
    HEADER.get_or_init(|| {
        Regex::new(r"\A#{1,6}\s([^\n\r\x{2028}\x{2029}]*)").expect("valid regex")
    })
}

/// Line terminators: LF, CR, LINE SEPARATOR and PARAGRAPH SEPARATOR.
const fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Byte offsets of every line start in `text`, beginning with `0`.
fn line_starts(text: &str) -> impl Iterator<Item = usize> + '_ {
    std::iter::once(0).chain(
        text.char_indices()
            .filter(|&(_, c)| is_line_terminator(c))
            .map(|(i, c)| i + c.len_utf8()),
    )
}

/// Returns the byte offsets at which sections start.
///
/// The first offset is always `0`. Every other offset is the start of a
/// line that begins with one or two `#` followed by whitespace. A line
/// starts after `\n`, `\r`, U+2028 or U+2029.
///
/// # Examples
///
/// ```
/// use md_sections::splitting::split_boundaries;
///
/// assert_eq!(split_boundaries("intro\n# A\n### deep\n## B"), vec![0, 6, 19]);
/// assert_eq!(split_boundaries(""), vec![0]);
/// ```
#[must_use]
pub fn split_boundaries(text: &str) -> Vec<usize> {
    let mut boundaries = vec![0];
    boundaries.extend(
        line_starts(text)
            .skip(1)
            .filter(|&start| boundary_regex().is_match(&text[start..])),
    );
    boundaries
}

/// Extracts the text of the first header line (levels 1 to 6).
///
/// The captured text runs to the end of the line and may be empty, e.g.
/// for a line holding only `# `.
///
/// # Examples
///
/// ```
/// use md_sections::splitting::extract_header;
///
/// assert_eq!(extract_header("intro\n### Deep dive\n"), Some("Deep dive"));
/// assert_eq!(extract_header("no headers here"), None);
/// ```
#[must_use]
pub fn extract_header(section: &str) -> Option<&str> {
    line_starts(section).find_map(|start| {
        header_regex()
            .captures(&section[start..])
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    })
}

/// Splits `text` and renders each section with `renderer`.
#[must_use]
pub fn split_sections(text: &str, renderer: &dyn Renderer) -> Vec<Section> {
    let boundaries = split_boundaries(text);

    boundaries
        .iter()
        .enumerate()
        .map(|(index, &start)| {
            let end = boundaries.get(index + 1).copied().unwrap_or(text.len());
            let raw = &text[start..end];
            let header = extract_header(raw).unwrap_or(NO_HEADER);
            Section::new(
                index,
                header.to_string(),
                render_plain_text(renderer, raw),
                start..end,
            )
        })
        .collect()
}

/// Splits `text` using the process-wide CommonMark renderer.
///
/// # Examples
///
/// ```
/// use md_sections::splitting::split;
///
/// let sections = split("");
/// assert_eq!(sections.len(), 1);
/// assert_eq!(sections[0].header, "no_header");
/// assert_eq!(sections[0].plain_text, "");
/// ```
#[must_use]
pub fn split(text: &str) -> Vec<Section> {
    static RENDERER: OnceLock<CommonMarkRenderer> = OnceLock::new();
    split_sections(text, RENDERER.get_or_init(CommonMarkRenderer::new))
}
