use std::io::BufRead;

use log::trace;

use crate::{OutputSlot, Result, ScanResult, Scanner};

/// Reads newline-terminated records from a [BufRead] and scans them one at a time.
///
/// The line buffer is owned by the reader and reused for every line.
/// A reader can be created with [Scanner::line_reader].
#[derive(Debug)]
pub struct LineReader<R> {
    scanner: Scanner,
    reader: R,
    line: Vec<u8>,
    line_number: usize,
}

impl<R: BufRead> LineReader<R> {
    /// Creates a line reader that scans with `scanner`.
    pub fn new(scanner: Scanner, reader: R) -> Self {
        Self {
            scanner,
            reader,
            line: Vec::new(),
            line_number: 0,
        }
    }

    /// Reads the next line without its line terminator (`\n` or `\r\n`).
    ///
    /// Returns `Ok(None)` at the end of the stream.
    pub fn read_line(&mut self) -> Result<Option<&[u8]>> {
        self.line.clear();
        if self.reader.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(None);
        }
        if self.line.last() == Some(&b'\n') {
            self.line.pop();
            if self.line.last() == Some(&b'\r') {
                self.line.pop();
            }
        }
        self.line_number += 1;
        trace!("Line {}: {} bytes", self.line_number, self.line.len());
        Ok(Some(&self.line))
    }

    /// Reads the next line and scans it according to `format`.
    ///
    /// Returns `Ok(None)` at the end of the stream.
    pub fn scan_line<F>(&mut self, format: &F, slots: &mut [OutputSlot<'_>]) -> Result<Option<ScanResult>>
    where
        F: AsRef<[u8]> + ?Sized,
    {
        if self.read_line()?.is_none() {
            return Ok(None);
        }
        self.scanner.scan(&self.line, format, slots).map(Some)
    }

    /// The 1-based number of the last line read, 0 before the first read.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}
