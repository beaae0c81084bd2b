//! Markdown rendering to plain text.
//!
//! Rendering is delegated to a CommonMark renderer behind the [`Renderer`]
//! trait. The HTML it produces is reduced to plain text by removing every
//! tag-shaped substring; entities are left exactly as the renderer emits
//! them.

use pulldown_cmark::{Event, Options, Parser, html};
use regex::Regex;
use std::sync::OnceLock;

/// Trait for turning markdown into HTML.
///
/// Implementations must be `Send + Sync` so one instance can be shared by
/// every document in a conversion run.
///
/// # Examples
///
/// ```
/// use md_sections::render::{CommonMarkRenderer, Renderer};
///
/// let renderer = CommonMarkRenderer::new();
/// assert_eq!(renderer.render_html("# Title"), "<h1>Title</h1>\n");
/// ```
pub trait Renderer: Send + Sync {
    /// Renders markdown text to HTML.
    fn render_html(&self, markdown: &str) -> String;

    /// Returns the name of the renderer.
    fn name(&self) -> &'static str;
}

/// CommonMark renderer backed by `pulldown-cmark`.
///
/// Tables and strikethrough are enabled. Raw HTML in the source is escaped
/// and rendered as text instead of being passed through.
#[derive(Debug, Clone, Copy)]
pub struct CommonMarkRenderer {
    options: Options,
}

impl Default for CommonMarkRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CommonMarkRenderer {
    /// Creates a renderer with the default extension set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH,
        }
    }
}

impl Renderer for CommonMarkRenderer {
    fn render_html(&self, markdown: &str) -> String {
        let events = Parser::new_ext(markdown, self.options).map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            other => other,
        });

        let mut output = String::with_capacity(markdown.len() + markdown.len() / 2);
        html::push_html(&mut output, events);
        output
    }

    fn name(&self) -> &'static str {
        "commonmark"
    }
}

/// Removes every `<...>` tag from `html`.
///
/// A `<` followed by at least one non-`>` character is removed up to and
/// including the next `>`, or to the end of input when the tag is never
/// closed. `<>` is left alone.
///
/// # Examples
///
/// ```
/// use md_sections::render::strip_tags;
///
/// assert_eq!(strip_tags("<p>hello</p>\n"), "hello\n");
/// assert_eq!(strip_tags("a <b"), "a ");
/// ```
#[must_use]
pub fn strip_tags(html: &str) -> String {
    static TAG: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    let tag = TAG.get_or_init(|| Regex::new(r"</?[^>]+(?:>|$)").expect("valid regex"));
    tag.replace_all(html, "").into_owned()
}

/// Renders markdown and strips the resulting tags.
#[must_use]
pub fn render_plain_text(renderer: &dyn Renderer, markdown: &str) -> String {
    strip_tags(&renderer.render_html(markdown))
}
