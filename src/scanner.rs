use std::io::BufRead;

use crate::{internal::ScanImpl, LineReader, OutputSlot, Result, ScanOptions, ScanResult};

/// A Scanner.
/// It extracts typed values from an input buffer as described by a `scanf`-style format string.
///
/// The scanner holds only its [ScanOptions]. It is cheap to copy and can be shared between
/// threads, every call to [Scanner::scan] is independent of all others.
///
/// To create a scanner with other than the default options, use the
/// [ScannerBuilder](crate::ScannerBuilder).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scanner {
    pub(crate) options: ScanOptions,
}

impl Scanner {
    /// Scans `input` according to `format` and writes the converted values into `slots`.
    ///
    /// `slots` supplies, in order, one destination for every directive that is neither suppressed
    /// nor `%%`, preceded by an [OutputSlot::Precision] for every `.*` precision.
    ///
    /// A scan that stops early because the input doesn't match is not an error. The returned
    /// [ScanResult] tells how many slots were assigned and where the scan stopped.
    /// An error is returned if the slots don't fit the format.
    pub fn scan<I, F>(&self, input: &I, format: &F, slots: &mut [OutputSlot<'_>]) -> Result<ScanResult>
    where
        I: AsRef<[u8]> + ?Sized,
        F: AsRef<[u8]> + ?Sized,
    {
        ScanImpl::new(input.as_ref(), format.as_ref(), self.options).run(slots)
    }

    /// Returns the options of the scanner.
    #[inline]
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Creates a [LineReader] that scans the lines of `reader` with this scanner.
    pub fn line_reader<R: BufRead>(&self, reader: R) -> LineReader<R> {
        LineReader::new(*self, reader)
    }
}

/// Scans `input` according to `format` with a [Scanner] using the default options.
///
/// See [Scanner::scan] for the details.
pub fn scan<I, F>(input: &I, format: &F, slots: &mut [OutputSlot<'_>]) -> Result<ScanResult>
where
    I: AsRef<[u8]> + ?Sized,
    F: AsRef<[u8]> + ?Sized,
{
    Scanner::default().scan(input, format, slots)
}
