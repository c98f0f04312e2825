use crate::{internal::FormatCursor, FormatError, FormatItem};

/// An iterator over the items of a format string.
///
/// The iterator yields a [`FormatItem`] per literal byte, whitespace run or directive. After the
/// first [`FormatError`] it yields nothing more.
///
/// * `'f` represents the lifetime of the format string.
///
/// This iterator can be created with the [`crate::parse_format`] function.
#[derive(Debug, Clone)]
pub struct FormatItems<'f> {
    inner: FormatCursor<'f>,
}

impl<'f> FormatItems<'f> {
    pub(crate) fn new(format: &'f [u8]) -> Self {
        Self {
            inner: FormatCursor::new(format),
        }
    }

    /// The byte offset of the next item in the format string.
    #[inline]
    pub fn offset(&self) -> usize {
        self.inner.offset()
    }
}

impl Iterator for FormatItems<'_> {
    type Item = Result<FormatItem, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_item()
    }
}

/// Parses a format string into its items without scanning anything.
///
/// This is useful to validate a format string before it is used.
/// ```
/// use gbscan::{parse_format, FormatItem};
///
/// let directives = parse_format("%d,%5[a-z]")
///     .filter(|item| matches!(item, Ok(FormatItem::Directive(_))))
///     .count();
/// assert_eq!(directives, 2);
/// assert!(parse_format("%[abc").any(|item| item.is_err()));
/// ```
pub fn parse_format<F: AsRef<[u8]> + ?Sized>(format: &F) -> FormatItems<'_> {
    FormatItems::new(format.as_ref())
}
