//! HTML output writer with a reusable buffer.
//!
//! Every fragment is written on its own line. Content is copied verbatim:
//! the converter does not escape HTML.

use std::fmt::Write as _;

use crate::block::Fragment;

/// HTML output writer with pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use mdline::{Fragment, HtmlWriter};
///
/// let mut writer = HtmlWriter::with_capacity_for(16);
/// writer.write_fragment(&Fragment::Paragraph("Hello".into()));
///
/// assert_eq!(writer.into_string(), "<p>Hello</p>\n");
/// ```
#[derive(Debug)]
pub struct HtmlWriter {
    out: String,
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self::from_buffer(String::new(), input_len)
    }

    /// Write into an existing buffer, keeping its allocation.
    ///
    /// The buffer is cleared, then grown for `input_len` bytes of input.
    /// Tags add a few bytes per line; we reserve a quarter extra.
    #[inline]
    pub fn from_buffer(mut out: String, input_len: usize) -> Self {
        out.clear();
        out.reserve(input_len + input_len / 4);
        Self { out }
    }

    /// Write a fragment followed by a newline.
    #[inline]
    pub fn write_fragment(&mut self, fragment: &Fragment) {
        // Writing into a String cannot fail.
        let _ = writeln!(self.out, "{fragment}");
    }

    /// Get output as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    /// Take ownership of the output bytes.
    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.out.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragments_one_per_line() {
        let mut writer = HtmlWriter::new();
        writer.write_fragment(&Fragment::ListOpen);
        writer.write_fragment(&Fragment::ListItem("a".into()));
        writer.write_fragment(&Fragment::ListClose);
        assert_eq!(writer.as_str(), "<ul>\n<li>a</li>\n</ul>\n");
    }

    #[test]
    fn test_heading_fragment() {
        let mut writer = HtmlWriter::new();
        writer.write_fragment(&Fragment::Heading {
            level: 6,
            content: "**raw**".into(),
        });
        assert_eq!(writer.as_str(), "<h6>**raw**</h6>\n");
    }

    #[test]
    fn test_matches_display() {
        let fragments = [
            Fragment::ListOpen,
            Fragment::ListItem("x".into()),
            Fragment::ListClose,
            Fragment::Heading {
                level: 2,
                content: "t".into(),
            },
            Fragment::Paragraph("<b>p</b>".into()),
        ];
        for fragment in &fragments {
            let mut writer = HtmlWriter::new();
            writer.write_fragment(fragment);
            assert_eq!(writer.into_string(), format!("{fragment}\n"));
        }
    }

    #[test]
    fn test_from_buffer_keeps_allocation() {
        let mut buf = String::with_capacity(256);
        buf.push_str("stale");
        let ptr = buf.as_ptr();

        let mut writer = HtmlWriter::from_buffer(buf, 8);
        writer.write_fragment(&Fragment::ListOpen);
        let out = writer.into_string();
        assert_eq!(out, "<ul>\n");
        assert_eq!(out.as_ptr(), ptr);
        assert!(out.capacity() >= 256);
    }

    #[test]
    fn test_no_escaping() {
        let mut writer = HtmlWriter::new();
        writer.write_fragment(&Fragment::Paragraph("a < b & c".into()));
        assert_eq!(writer.into_vec(), b"<p>a < b & c</p>\n");
    }
}
