//! mdline: line-oriented Markdown subset to HTML converter
//!
//! Every input line is stripped, classified on its own and turned into at
//! most one HTML line, plus the `<ul>`/`</ul>` wrappers around runs of list
//! items.
//!
//! # Supported syntax
//! - `# ` through `###### ` headings (text copied verbatim)
//! - `- ` list items, grouped into one `<ul>` per consecutive run
//! - `**bold**` → `<b>`, `__emphasis__` → `<em>` in list items and paragraphs
//! - `[[private]]` → fixed MD5 digest, `((x))` → `x` in paragraphs
//!
//! # Design Principles
//! - Streaming: one line in, fragments out, no document tree
//! - One piece of state: whether a list block is open
//! - No escaping: text passes through unchanged apart from the rules above

pub mod block;
pub mod cursor;
pub mod error;
pub mod inline;
pub mod lines;
pub mod range;
pub mod render;
pub mod stream;
pub mod transform;

// Re-export primary types
pub use block::{Fragment, LineKind, classify_line};
pub use error::Error;
pub use range::Range;
pub use render::HtmlWriter;
pub use stream::ConvertStats;
pub use transform::{BlockState, LineTransformer};

/// Convert Markdown to HTML.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = mdline::to_html("# Hello\n\nWorld");
/// assert_eq!(html, "<h1>Hello</h1>\n<p>World</p>\n");
/// ```
pub fn to_html(input: &str) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    render_to_writer(input, &mut writer);
    writer.into_string()
}

/// Convert Markdown to HTML, writing into a provided buffer.
///
/// The buffer is cleared first and rendered into in place, so its
/// allocation is reused across calls.
///
/// # Example
/// ```
/// let mut out = Vec::new();
/// mdline::to_html_into("- a", &mut out);
/// assert_eq!(out, b"<ul>\n<li>a</li>\n</ul>\n");
/// ```
pub fn to_html_into(input: &str, out: &mut Vec<u8>) {
    let mut buf = std::mem::take(out);
    buf.clear();
    // An empty Vec is always valid UTF-8.
    let buf = String::from_utf8(buf).unwrap_or_default();
    let mut writer = HtmlWriter::from_buffer(buf, input.len());
    render_to_writer(input, &mut writer);
    *out = writer.into_vec();
}

/// Transform a sequence of lines into fragments, closing any open list.
///
/// # Example
/// ```
/// use mdline::{to_fragments, Fragment};
///
/// let fragments = to_fragments(["- one", "- two", ""]);
/// assert_eq!(
///     fragments,
///     [
///         Fragment::ListOpen,
///         Fragment::ListItem("one".into()),
///         Fragment::ListItem("two".into()),
///         Fragment::ListClose,
///     ]
/// );
/// ```
pub fn to_fragments<'a, I>(lines: I) -> Vec<Fragment>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut transformer = LineTransformer::new();
    let mut fragments = Vec::new();
    for line in lines {
        fragments.extend(transformer.push_line(line));
    }
    fragments.extend(transformer.finish());
    fragments
}

/// Render every line of `input` into `writer`.
fn render_to_writer(input: &str, writer: &mut HtmlWriter) {
    let mut transformer = LineTransformer::new();
    for line in lines::split_lines(input) {
        transformer.render_line(line, writer);
    }
    transformer.render_finish(writer);
}
