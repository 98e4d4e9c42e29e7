//! Streaming trace reader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::{Operation, parse_line};
use crate::common::{Result, SimError};

/// Iterator over the operations of a trace.
///
/// Yields one `Result<Operation>` per non-blank line, in file order. After
/// the first error the iterator is fused and yields nothing more.
#[derive(Debug)]
pub struct TraceReader<R> {
    reader: R,
    source: PathBuf,
    line_no: usize,
    buf: String,
    failed: bool,
}

impl TraceReader<BufReader<File>> {
    /// Opens a trace file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::SourceUnavailable`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SimError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::with_source(BufReader::new(file), path))
    }
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps an in-memory or already-open reader; reported as `<stream>`.
    pub fn new(reader: R) -> Self {
        Self::with_source(reader, "<stream>")
    }

    /// Wraps a reader, naming it `source` in error reports.
    pub fn with_source(reader: R, source: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            source: source.into(),
            line_no: 0,
            buf: String::new(),
            failed: false,
        }
    }

    /// Number of lines consumed so far.
    pub const fn lines_read(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<Operation>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_no += 1;
                    match parse_line(self.line_no, &self.buf) {
                        Ok(Some(op)) => return Some(Ok(op)),
                        Ok(None) => {}
                        Err(e) => {
                            self.failed = true;
                            return Some(Err(e));
                        }
                    }
                }
                Err(source) => {
                    self.failed = true;
                    return Some(Err(SimError::SourceUnavailable {
                        path: self.source.clone(),
                        source,
                    }));
                }
            }
        }
    }
}
