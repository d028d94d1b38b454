//! Streaming driver: reads lines, writes fragments as they are produced.
//!
//! Input is read in `\n`-terminated chunks, and each chunk is split further
//! at lone `\r` terminators. Memory use is bounded by the longest chunk, not
//! by the input size.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::block::Fragment;
use crate::error::{Error, Result};
use crate::lines::chunk_lines;
use crate::transform::LineTransformer;

/// Summary of one conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertStats {
    /// Input lines read.
    pub lines: usize,
    /// Fragments written.
    pub fragments: usize,
    /// List blocks opened.
    pub lists: usize,
}

impl ConvertStats {
    fn record(&mut self, fragment: &Fragment) {
        self.fragments += 1;
        if matches!(fragment, Fragment::ListOpen) {
            self.lists += 1;
        }
    }
}

/// Which side of the pump failed.
enum Failure {
    Read(io::Error),
    Write(io::Error),
}

/// Convert every line of `reader` into `writer`, one fragment per line.
///
/// The writer is flushed before returning.
///
/// # Example
/// ```
/// let mut out = Vec::new();
/// let stats = mdline::stream::convert("- a\n- b\n".as_bytes(), &mut out).unwrap();
/// assert_eq!(out, b"<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n");
/// assert_eq!(stats.lists, 1);
/// ```
pub fn convert<R: BufRead, W: Write>(reader: R, writer: W) -> io::Result<ConvertStats> {
    pump(reader, writer).map_err(|failure| match failure {
        Failure::Read(err) | Failure::Write(err) => err,
    })
}

/// Convert the file at `input` into a new file at `output`.
///
/// `input` must be an existing regular file; `output` is created or
/// truncated only after that check passes.
pub fn convert_file(input: &Path, output: &Path) -> Result<ConvertStats> {
    if !input.is_file() {
        return Err(Error::MissingInput {
            path: input.to_path_buf(),
        });
    }

    let reader = File::open(input).map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let writer = File::create(output).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;

    let stats = pump(BufReader::new(reader), BufWriter::new(writer)).map_err(|failure| {
        match failure {
            Failure::Read(source) => Error::Read {
                path: input.to_path_buf(),
                source,
            },
            Failure::Write(source) => Error::Write {
                path: output.to_path_buf(),
                source,
            },
        }
    })?;

    debug!(
        input = %input.display(),
        output = %output.display(),
        lines = stats.lines,
        fragments = stats.fragments,
        lists = stats.lists,
        "converted file"
    );
    Ok(stats)
}

fn pump<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
) -> std::result::Result<ConvertStats, Failure> {
    let mut transformer = LineTransformer::new();
    let mut stats = ConvertStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(Failure::Read)? == 0 {
            break;
        }
        let chunk = std::str::from_utf8(&buf)
            .map_err(|e| Failure::Read(io::Error::new(io::ErrorKind::InvalidData, e)))?;

        for line in chunk_lines(chunk) {
            stats.lines += 1;
            for fragment in &transformer.push_line(line) {
                writeln!(writer, "{fragment}").map_err(Failure::Write)?;
                stats.record(fragment);
            }
        }
    }

    if let Some(fragment) = transformer.finish() {
        writeln!(writer, "{fragment}").map_err(Failure::Write)?;
        stats.record(&fragment);
    }

    writer.flush().map_err(Failure::Write)?;
    Ok(stats)
}
