//! Line splitting and stripping.
//!
//! Lines end at `\n`, `\r\n` or a lone `\r`. Both the in-memory entry points
//! and the streaming driver split through [`chunk_lines`], so they agree on
//! every input.

/// Split `text` into lines, dropping terminators.
///
/// A trailing terminator does not start an extra empty line.
///
/// # Example
/// ```
/// let lines: Vec<_> = mdline::lines::split_lines("a\r\nb\rc\n").collect();
/// assert_eq!(lines, ["a", "b", "c"]);
/// ```
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive('\n').flat_map(chunk_lines)
}

/// Split one `\n`-terminated chunk (as read by `read_until(b'\n')`) into
/// lines. The chunk must be non-empty.
pub fn chunk_lines(chunk: &str) -> std::str::Split<'_, char> {
    let body = chunk.strip_suffix('\n').unwrap_or(chunk);
    let body = body.strip_suffix('\r').unwrap_or(body);
    body.split('\r')
}

/// Strip surrounding whitespace: Unicode White_Space plus the
/// `\x1c`..`\x1f` separator controls.
#[inline]
pub fn strip_line(line: &str) -> &str {
    line.trim_matches(is_strippable)
}

#[inline]
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<&str> {
        split_lines(text).collect()
    }

    #[test]
    fn test_lf_and_crlf() {
        assert_eq!(lines("a\nb\r\nc"), ["a", "b", "c"]);
    }

    #[test]
    fn test_lone_cr() {
        assert_eq!(lines("- a\r- b\r# H\r"), ["- a", "- b", "# H"]);
    }

    #[test]
    fn test_blank_lines_between_terminators() {
        assert_eq!(lines("a\r\rb\n"), ["a", "", "b"]);
        assert_eq!(lines("a\r\r\n"), ["a", ""]);
        assert_eq!(lines("a\n\r"), ["a", ""]);
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        assert!(lines("").is_empty());
        assert_eq!(lines("\n"), [""]);
    }

    #[test]
    fn test_chunk_lines() {
        let chunk: Vec<_> = chunk_lines("x\ry\r\n").collect();
        assert_eq!(chunk, ["x", "y"]);
    }

    #[test]
    fn test_strip_separator_controls() {
        assert_eq!(strip_line("\x1c# H\x1f"), "# H");
        assert_eq!(strip_line(" \t\u{a0}text\u{2003}\x0b"), "text");
        assert_eq!(strip_line("in\x1dside"), "in\x1dside");
    }
}
