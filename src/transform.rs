//! Line transformer: classification plus list-block state.
//!
//! Each pushed line yields zero, one or two fragments. A list block is
//! opened by its first item and closed by the first non-item line (headings
//! and blank lines included) or by [`LineTransformer::finish`].

use smallvec::SmallVec;
use tracing::trace;

use crate::block::{Fragment, LineKind, classify_stripped};
use crate::inline;
use crate::lines::strip_line;
use crate::render::HtmlWriter;

/// Whether the transformer is inside an unclosed `<ul>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockState {
    /// No list is open.
    #[default]
    NotInList,
    /// A `<ul>` has been emitted and not yet closed.
    InList,
}

/// Fragments produced by a single line.
pub type LineFragments = SmallVec<[Fragment; 2]>;

/// Streaming line-to-HTML transformer.
///
/// One value per conversion run.
///
/// # Example
/// ```
/// use mdline::{Fragment, LineTransformer};
///
/// let mut t = LineTransformer::new();
/// assert_eq!(
///     t.push_line("- one").as_slice(),
///     &[Fragment::ListOpen, Fragment::ListItem("one".into())]
/// );
/// assert_eq!(t.finish(), Some(Fragment::ListClose));
/// assert_eq!(t.finish(), None);
/// ```
#[derive(Debug, Default)]
pub struct LineTransformer {
    state: BlockState,
}

impl LineTransformer {
    /// Create a transformer outside any list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current block state.
    #[inline]
    pub fn state(&self) -> BlockState {
        self.state
    }

    /// Transform one raw input line.
    pub fn push_line(&mut self, line: &str) -> LineFragments {
        let line = strip_line(line);
        let kind = classify_stripped(line);
        let mut out = LineFragments::new();

        if kind.is_list_item() {
            self.open_list(&mut out);
        } else {
            self.close_list(&mut out);
        }

        match kind {
            LineKind::Heading { level, content } => out.push(Fragment::Heading {
                level,
                content: content.slice_str(line).to_owned(),
            }),
            LineKind::ListItem { content } => out.push(Fragment::ListItem(
                inline::list_item_text(content.slice_str(line)).into_owned(),
            )),
            LineKind::Paragraph => {
                out.push(Fragment::Paragraph(inline::paragraph_text(line).into_owned()))
            }
            LineKind::Blank => {}
        }

        out
    }

    /// Signal end of input. Returns the closing fragment of an open list.
    pub fn finish(&mut self) -> Option<Fragment> {
        let mut out = LineFragments::new();
        self.close_list(&mut out);
        out.pop()
    }

    /// Transform one line, writing its fragments into `writer`.
    pub fn render_line(&mut self, line: &str, writer: &mut HtmlWriter) {
        for fragment in &self.push_line(line) {
            writer.write_fragment(fragment);
        }
    }

    /// Finish the run, writing any closing fragment into `writer`.
    pub fn render_finish(&mut self, writer: &mut HtmlWriter) {
        if let Some(fragment) = self.finish() {
            writer.write_fragment(&fragment);
        }
    }

    fn open_list(&mut self, out: &mut LineFragments) {
        if self.state == BlockState::NotInList {
            trace!("opening list block");
            self.state = BlockState::InList;
            out.push(Fragment::ListOpen);
        }
    }

    fn close_list(&mut self, out: &mut LineFragments) {
        if self.state == BlockState::InList {
            trace!("closing list block");
            self.state = BlockState::NotInList;
            out.push(Fragment::ListClose);
        }
    }
}
