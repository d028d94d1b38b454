//! Line classifier implementation.

use crate::Range;
use crate::cursor::Cursor;
use crate::lines::strip_line;

use super::event::LineKind;

/// Highest heading level recognized.
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Prefix that marks an unordered list item.
pub const LIST_ITEM_MARKER: &[u8] = b"- ";

/// Classify a line.
///
/// The line is stripped of surrounding whitespace first; returned ranges
/// point into [`strip_line`]`(line)`.
///
/// # Example
/// ```
/// use mdline::block::{classify_line, LineKind};
/// use mdline::lines::strip_line;
///
/// let line = "  ## Title  ";
/// match classify_line(line) {
///     LineKind::Heading { level, content } => {
///         assert_eq!(level, 2);
///         assert_eq!(content.slice_str(strip_line(line)), "Title");
///     }
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub fn classify_line(line: &str) -> LineKind {
    classify_stripped(strip_line(line))
}

/// Classify a line that is already stripped.
pub fn classify_stripped(line: &str) -> LineKind {
    let bytes = line.as_bytes();
    if bytes.is_empty() {
        return LineKind::Blank;
    }

    if let Some(kind) = try_atx_heading(bytes) {
        return kind;
    }

    if let Some(kind) = try_list_item(bytes) {
        return kind;
    }

    LineKind::Paragraph
}

/// Try to parse an ATX heading: 1-6 `#` followed by one space.
fn try_atx_heading(bytes: &[u8]) -> Option<LineKind> {
    let mut cursor = Cursor::new(bytes);
    if !cursor.at(b'#') {
        return None;
    }

    // A longer run can never match: the byte after any shorter prefix is
    // another `#`, not the required space.
    let run = cursor.skip_while(|b| b == b'#');
    if run > MAX_HEADING_LEVEL as usize {
        return None;
    }

    if !cursor.eat(b' ') {
        return None;
    }

    Some(LineKind::Heading {
        level: run as u8,
        content: Range::from_usize(cursor.offset(), bytes.len()),
    })
}

/// Try to parse an unordered list item.
fn try_list_item(bytes: &[u8]) -> Option<LineKind> {
    let mut cursor = Cursor::new(bytes);
    if !cursor.eat_prefix(LIST_ITEM_MARKER) {
        return None;
    }

    Some(LineKind::ListItem {
        content: Range::from_usize(cursor.offset(), bytes.len()),
    })
}
