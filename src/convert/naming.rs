//! Output file naming.
//!
//! Section headers become part of output file names, so every character
//! outside `[A-Za-z0-9_-]` is replaced with `-`. Names built here are also
//! mapped back to documentation URLs for downstream consumers.

use crate::core::NO_HEADER;

/// Infix between the source stem and the sanitized header.
pub const SECTION_INFIX: &str = "_section_";

/// Extension of written artifacts.
pub const OUTPUT_EXTENSION: &str = "txt";

/// Default base URL for [`docs_link`].
pub const DEFAULT_DOCS_BASE_URL: &str = "https://docs.opensafely.org/";

/// Replaces every character outside `[A-Za-z0-9_-]` with `-`.
///
/// An empty header becomes [`NO_HEADER`]. Replacement is per UTF-16 code
/// unit, so runs of punctuation produce runs of dashes and a character
/// outside the Basic Multilingual Plane produces two.
///
/// # Examples
///
/// ```
/// use md_sections::convert::sanitize_header;
///
/// assert_eq!(sanitize_header("Intro: Setup!"), "Intro--Setup-");
/// assert_eq!(sanitize_header(""), "no_header");
/// ```
#[must_use]
pub fn sanitize_header(header: &str) -> String {
    if header.is_empty() {
        return NO_HEADER.to_string();
    }

    let mut sanitized = String::with_capacity(header.len());
    for c in header.chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            sanitized.push(c);
        } else {
            sanitized.extend(std::iter::repeat_n('-', c.len_utf16()));
        }
    }
    sanitized
}

/// Builds `<stem>_section_<sanitized header>.txt`.
///
/// # Examples
///
/// ```
/// use md_sections::convert::output_file_name;
///
/// assert_eq!(output_file_name("a", "X Y"), "a_section_X-Y.txt");
/// ```
#[must_use]
pub fn output_file_name(source_stem: &str, header: &str) -> String {
    format!(
        "{source_stem}{SECTION_INFIX}{}.{OUTPUT_EXTENSION}",
        sanitize_header(header)
    )
}

/// Maps an output file name to the documentation page it came from.
///
/// The section infix becomes a path separator, underscores become dashes,
/// the result is lowercased and the last path segment becomes an anchor.
/// An anchor starting with `no-header` is dropped together with the
/// `/#` before it, keeping whatever follows, so headerless sections link
/// to the page itself.
///
/// # Examples
///
/// ```
/// use md_sections::convert::docs_link;
///
/// assert_eq!(
///     docs_link("getting_started_section_Install-Python.txt", "https://docs.example.org/"),
///     "https://docs.example.org/getting-started/#install-python"
/// );
/// assert_eq!(
///     docs_link("index_section_no_header.txt", "https://docs.example.org/"),
///     "https://docs.example.org/index"
/// );
/// ```
#[must_use]
pub fn docs_link(output_file_name: &str, base_url: &str) -> String {
    let stem = output_file_name
        .strip_suffix(".txt")
        .unwrap_or(output_file_name);

    let path = stem.replace(SECTION_INFIX, "/").replace('_', "-").to_lowercase();

    let path = match path.rsplit_once('/') {
        Some((page, anchor)) => match anchor.strip_prefix("no-header") {
            Some(rest) => format!("{page}{rest}"),
            None => format!("{page}/#{anchor}"),
        },
        None => path,
    };

    format!("{base_url}{path}")
}
