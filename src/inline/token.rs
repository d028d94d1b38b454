//! Fixed-token replacement (`[[private]]`).

use std::borrow::Cow;
use std::sync::LazyLock;

use md5::{Digest, Md5};
use memchr::memmem;

/// Literal token replaced in paragraph text.
pub const PRIVATE_TOKEN: &str = "[[private]]";

/// Bytes hashed to produce the replacement.
const PRIVATE_SEED: &[u8] = b"private";

/// Lowercase hex MD5 of `private`, computed once.
static PRIVATE_DIGEST: LazyLock<String> =
    LazyLock::new(|| format!("{:x}", Md5::digest(PRIVATE_SEED)));

/// The 32-character replacement for [`PRIVATE_TOKEN`].
#[inline]
pub fn private_digest() -> &'static str {
    &PRIVATE_DIGEST
}

/// Replace every `[[private]]` in `text` with [`private_digest`].
pub fn replace_private(text: &str) -> Cow<'_, str> {
    replace_literal(text, PRIVATE_TOKEN, private_digest())
}

fn replace_literal<'a>(text: &'a str, needle: &str, replacement: &str) -> Cow<'a, str> {
    let mut matches = memmem::find_iter(text.as_bytes(), needle.as_bytes()).peekable();
    if matches.peek().is_none() {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + replacement.len());
    let mut copied = 0;
    for start in matches {
        out.push_str(&text[copied..start]);
        out.push_str(replacement);
        copied = start + needle.len();
    }
    out.push_str(&text[copied..]);
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_value() {
        assert_eq!(private_digest(), "2c17c6393771ee3048ae34d6b380c5ec");
        assert_eq!(private_digest().len(), 32);
    }

    #[test]
    fn test_replace_private() {
        assert_eq!(
            replace_private("id: [[private]]."),
            "id: 2c17c6393771ee3048ae34d6b380c5ec."
        );
    }

    #[test]
    fn test_replace_private_repeated() {
        let out = replace_private("[[private]][[private]]");
        assert_eq!(out, private_digest().repeat(2));
    }

    #[test]
    fn test_other_tokens_untouched() {
        assert!(matches!(replace_private("[[public]]"), Cow::Borrowed(_)));
        assert_eq!(replace_private("[[Private]]"), "[[Private]]");
    }
}
