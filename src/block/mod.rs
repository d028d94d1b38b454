//! Block-level line classification.
//!
//! Each input line is classified on its own, in this order:
//! - ATX headings
//! - Unordered list items
//! - Blank lines
//! - Paragraphs

mod event;
mod parser;

pub use event::{Fragment, LineKind};
pub use parser::{LIST_ITEM_MARKER, MAX_HEADING_LEVEL, classify_line, classify_stripped};
