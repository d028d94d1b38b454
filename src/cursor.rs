//! Byte cursor for scanning a single stripped line.
//!
//! Lines handed to the classifier are already trimmed and never contain a
//! newline, so the cursor only tracks a position inside one slice.

/// A cursor for byte-by-byte scanning of a line.
///
/// # Example
/// ```
/// use mdline::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"## Title");
/// assert_eq!(cursor.skip_while(|b| b == b'#'), 2);
/// assert!(cursor.eat(b' '));
/// assert_eq!(cursor.rest(), b"Title");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor over a byte slice.
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Current offset from the start of the line.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Number of bytes remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Advance by n bytes.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining());
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// Advance by 1 byte.
    #[inline]
    pub fn bump(&mut self) {
        self.advance(1);
    }

    /// Check if current position matches a byte.
    #[inline]
    pub fn at(&self, b: u8) -> bool {
        self.peek() == Some(b)
    }

    /// Check if the remaining input starts with `prefix`.
    #[inline]
    pub fn at_prefix(&self, prefix: &[u8]) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Skip while predicate is true. Returns the number of bytes skipped.
    #[inline]
    pub fn skip_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(u8) -> bool,
    {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !predicate(b) {
                break;
            }
            self.bump();
        }
        self.pos - start
    }

    /// Consume a specific byte if present.
    #[inline]
    pub fn eat(&mut self, b: u8) -> bool {
        if self.at(b) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume `prefix` if the remaining input starts with it.
    #[inline]
    pub fn eat_prefix(&mut self, prefix: &[u8]) -> bool {
        if self.at_prefix(prefix) {
            self.advance(prefix.len());
            true
        } else {
            false
        }
    }

    /// Remaining bytes from the current position.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_basic() {
        let mut cursor = Cursor::new(b"hello");
        assert_eq!(cursor.peek(), Some(b'h'));
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.remaining(), 5);

        cursor.bump();
        assert_eq!(cursor.peek(), Some(b'e'));
        assert_eq!(cursor.offset(), 1);
    }

    #[test]
    fn test_cursor_eof() {
        let mut cursor = Cursor::new(b"a");
        assert_eq!(cursor.remaining(), 1);
        cursor.bump();
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.rest(), b"");
    }

    #[test]
    fn test_skip_while_counts_bytes() {
        let mut cursor = Cursor::new(b"####### x");
        assert_eq!(cursor.skip_while(|b| b == b'#'), 7);
        assert!(cursor.at(b' '));
    }

    #[test]
    fn test_eat_prefix() {
        let mut cursor = Cursor::new(b"- item");
        assert!(!cursor.eat_prefix(b"-x"));
        assert_eq!(cursor.offset(), 0);
        assert!(cursor.eat_prefix(b"- "));
        assert_eq!(cursor.rest(), b"item");
    }

    #[test]
    fn test_eat() {
        let mut cursor = Cursor::new(b"# ");
        assert!(!cursor.eat(b' '));
        assert!(cursor.eat(b'#'));
        assert!(cursor.eat(b' '));
        assert_eq!(cursor.peek(), None);
    }
}
