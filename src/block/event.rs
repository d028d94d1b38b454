//! Line classification results and emitted fragments.

use std::fmt;

use crate::Range;

/// Classification of one stripped input line.
///
/// Content ranges point into the stripped line that was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// ATX-style heading (`# text` through `###### text`).
    Heading {
        /// Heading level (1-6).
        level: u8,
        /// Text after the marker and its single separating space.
        content: Range,
    },
    /// Unordered list item (`- text`).
    ListItem {
        /// Text after the `- ` marker.
        content: Range,
    },
    /// Any other non-empty line.
    Paragraph,
    /// Empty after stripping.
    Blank,
}

impl LineKind {
    /// Whether this line keeps an open list block open.
    #[inline]
    pub fn is_list_item(&self) -> bool {
        matches!(self, Self::ListItem { .. })
    }
}

/// One emitted HTML line.
///
/// `Display` renders the markup without a trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// `<ul>`
    ListOpen,
    /// `</ul>`
    ListClose,
    /// `<li>..</li>` with inline substitution already applied.
    ListItem(String),
    /// `<hN>..</hN>` with the heading text verbatim.
    Heading {
        /// Heading level (1-6).
        level: u8,
        /// Heading text.
        content: String,
    },
    /// `<p>..</p>` with inline substitution already applied.
    Paragraph(String),
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ListOpen => f.write_str("<ul>"),
            Self::ListClose => f.write_str("</ul>"),
            Self::ListItem(content) => write!(f, "<li>{content}</li>"),
            Self::Heading { level, content } => write!(f, "<h{level}>{content}</h{level}>"),
            Self::Paragraph(content) => write!(f, "<p>{content}</p>"),
        }
    }
}
