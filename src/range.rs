//! Compact range representation for zero-copy line references.
//!
//! Uses `u32` offsets to save memory (8 bytes vs 16 for usize pair).
//! Supports lines up to 4GB in size.

/// Compact range into a stripped input line.
///
/// # Example
/// ```
/// use mdline::Range;
///
/// let line = "## Hello";
/// let range = Range::new(3, 8);
/// assert_eq!(range.slice_str(line), "Hello");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

// Compile-time size verification
const _: () = assert!(std::mem::size_of::<Range>() == 8);

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from usize values.
    ///
    /// # Panics
    /// Panics in debug mode if values exceed u32::MAX.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= u32::MAX as usize);
        debug_assert!(end <= u32::MAX as usize);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// Get the sub-str this range refers to.
    ///
    /// # Panics
    /// Panics if the range does not fall on char boundaries of `line`.
    /// Ranges produced by the classifier always split at ASCII markers.
    #[inline]
    pub fn slice_str<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start_usize()..self.end_usize()]
    }

    /// Start position as usize.
    #[inline]
    pub const fn start_usize(&self) -> usize {
        self.start as usize
    }

    /// End position as usize.
    #[inline]
    pub const fn end_usize(&self) -> usize {
        self.end as usize
    }
}
