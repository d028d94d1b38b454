//! Delimiter-pair replacement (`**x**`, `__x__`, `((x))`).
//!
//! Pairs are matched leftmost-first and non-greedily: an opener binds to the
//! nearest closer after it, and scanning resumes after that closer.
//! An opener without any closer after it is left as literal text.

use std::borrow::Cow;

use memchr::memmem;

/// A delimiter pair and the markup that replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimitedSpan {
    /// Opening delimiter.
    pub open: &'static str,
    /// Closing delimiter.
    pub close: &'static str,
    /// Written in place of the opener.
    pub before: &'static str,
    /// Written in place of the closer.
    pub after: &'static str,
}

/// `**x**` → `<b>x</b>`
pub const BOLD: DelimitedSpan = DelimitedSpan {
    open: "**",
    close: "**",
    before: "<b>",
    after: "</b>",
};

/// `__x__` → `<em>x</em>`
pub const ITALIC: DelimitedSpan = DelimitedSpan {
    open: "__",
    close: "__",
    before: "<em>",
    after: "</em>",
};

/// `((x))` → `x`
pub const PARENTHETICAL: DelimitedSpan = DelimitedSpan {
    open: "((",
    close: "))",
    before: "",
    after: "",
};

impl DelimitedSpan {
    /// Replace every matched pair in `text`.
    ///
    /// Returns the input unchanged (borrowed) when nothing matched.
    pub fn replace<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let bytes = text.as_bytes();
        let open = memmem::Finder::new(self.open);
        let close = memmem::Finder::new(self.close);

        let mut out: Option<String> = None;
        let mut copied = 0;

        while let Some(rel) = open.find(&bytes[copied..]) {
            let opener = copied + rel;
            let inner_start = opener + self.open.len();

            // Later openers only search a suffix of this window, so a miss
            // here ends the scan.
            let Some(rel) = close.find(&bytes[inner_start..]) else {
                break;
            };
            let closer = inner_start + rel;

            let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + 16));
            buf.push_str(&text[copied..opener]);
            buf.push_str(self.before);
            buf.push_str(&text[inner_start..closer]);
            buf.push_str(self.after);

            copied = closer + self.close.len();
        }

        match out {
            Some(mut buf) => {
                buf.push_str(&text[copied..]);
                Cow::Owned(buf)
            }
            None => Cow::Borrowed(text),
        }
    }
}
