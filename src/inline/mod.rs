//! Inline substitution for list-item and paragraph text.
//!
//! Text runs through an ordered pipeline of pure string transforms. Each
//! step sees the previous step's output:
//! 1. Bold: `**x**` → `<b>x</b>`
//! 2. Italic: `__x__` → `<em>x</em>`
//! 3. Private token: `[[private]]` → fixed MD5 hex digest (paragraphs only)
//! 4. Unwrap: `((x))` → `x` (paragraphs only)
//!
//! Heading text never goes through the pipeline.

mod delimited;
mod token;

pub use delimited::{BOLD, DelimitedSpan, ITALIC, PARENTHETICAL};
pub use token::{PRIVATE_TOKEN, private_digest, replace_private};

use std::borrow::Cow;

/// One step of the inline pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substitution {
    /// `**x**` → `<b>x</b>`
    Bold,
    /// `__x__` → `<em>x</em>`
    Italic,
    /// `[[private]]` → digest
    PrivateToken,
    /// `((x))` → `x`
    Unwrap,
}

impl Substitution {
    /// Apply this step to `text`, borrowing when nothing changed.
    pub fn apply<'a>(self, text: &'a str) -> Cow<'a, str> {
        match self {
            Self::Bold => BOLD.replace(text),
            Self::Italic => ITALIC.replace(text),
            Self::PrivateToken => replace_private(text),
            Self::Unwrap => PARENTHETICAL.replace(text),
        }
    }
}

/// Steps applied to list-item content.
pub const LIST_ITEM_PIPELINE: &[Substitution] = &[Substitution::Bold, Substitution::Italic];

/// Steps applied to paragraph content.
pub const PARAGRAPH_PIPELINE: &[Substitution] = &[
    Substitution::Bold,
    Substitution::Italic,
    Substitution::PrivateToken,
    Substitution::Unwrap,
];

/// Run `text` through `pipeline` in order.
///
/// # Example
/// ```
/// use mdline::inline::{apply_pipeline, PARAGRAPH_PIPELINE};
///
/// assert_eq!(apply_pipeline("**a** ((b))", PARAGRAPH_PIPELINE), "<b>a</b> b");
/// ```
pub fn apply_pipeline<'a>(text: &'a str, pipeline: &[Substitution]) -> Cow<'a, str> {
    let mut current = Cow::Borrowed(text);
    for step in pipeline {
        let next = match step.apply(&current) {
            Cow::Owned(changed) => Some(changed),
            Cow::Borrowed(_) => None,
        };
        if let Some(changed) = next {
            current = Cow::Owned(changed);
        }
    }
    current
}

/// Inline substitution for list-item content (bold, italic).
#[inline]
pub fn list_item_text(text: &str) -> Cow<'_, str> {
    apply_pipeline(text, LIST_ITEM_PIPELINE)
}

/// Inline substitution for paragraph content (all four steps).
#[inline]
pub fn paragraph_text(text: &str) -> Cow<'_, str> {
    apply_pipeline(text, PARAGRAPH_PIPELINE)
}
