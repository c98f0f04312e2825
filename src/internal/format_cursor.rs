use log::trace;

use crate::{
    directive::{Directive, FormatItem, LengthModifier, Precision, Specifier},
    internal::is_space,
    CharSet, FormatError,
};

/// Walks the format string one item at a time.
#[derive(Debug, Clone)]
pub(crate) struct FormatCursor<'f> {
    format: &'f [u8],
    pos: usize,
    failed: bool,
}

impl<'f> FormatCursor<'f> {
    pub(crate) fn new(format: &'f [u8]) -> Self {
        Self {
            format,
            pos: 0,
            failed: false,
        }
    }

    /// The offset of the next item.
    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    /// The format byte at the given offset, if any.
    #[inline]
    pub(crate) fn byte_at(&self, offset: usize) -> Option<u8> {
        self.format.get(offset).copied()
    }

    /// Returns the next item, `None` at the end of the format or after an error was returned.
    pub(crate) fn next_item(&mut self) -> Option<Result<FormatItem, FormatError>> {
        if self.failed {
            return None;
        }
        let b = self.peek()?;
        let item = if b == b'%' {
            self.parse_directive().map(FormatItem::Directive)
        } else if is_space(b) {
            while self.peek().is_some_and(is_space) {
                self.pos += 1;
            }
            Ok(FormatItem::Whitespace)
        } else {
            self.pos += 1;
            Ok(FormatItem::Literal(b))
        };
        if item.is_err() {
            self.failed = true;
        }
        Some(item)
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.format.get(self.pos).copied()
    }

    #[inline]
    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    #[inline]
    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn parse_number(&mut self) -> Option<usize> {
        let mut value: Option<usize> = None;
        while let Some(d) = self.peek().filter(u8::is_ascii_digit) {
            self.pos += 1;
            value = Some(
                value
                    .unwrap_or(0)
                    .saturating_mul(10)
                    .saturating_add(usize::from(d - b'0')),
            );
        }
        value
    }

    // Longest match first: `hh` before `h`, `ll` before `l`.
    fn parse_length(&mut self) -> LengthModifier {
        let rest = &self.format[self.pos..];
        let (length, len) = if rest.starts_with(b"hh") {
            (LengthModifier::HalfHalf, 2)
        } else if rest.starts_with(b"h") {
            (LengthModifier::Half, 1)
        } else if rest.starts_with(b"ll") {
            (LengthModifier::LongLong, 2)
        } else if rest.starts_with(b"l") {
            (LengthModifier::Long, 1)
        } else if rest.starts_with(b"I64") {
            (LengthModifier::Fixed64, 3)
        } else {
            (LengthModifier::None, 0)
        };
        self.pos += len;
        length
    }

    fn parse_directive(&mut self) -> Result<Directive, FormatError> {
        let start = self.pos;
        self.pos += 1;
        let suppressed = self.eat(b'*');
        let width = self.parse_number().filter(|w| *w > 0);
        let precision = if self.eat(b'.') {
            if self.eat(b'*') {
                Some(Precision::FromArgument)
            } else {
                Some(Precision::Fixed(self.parse_number().unwrap_or(0)))
            }
        } else {
            None
        };
        let length = self.parse_length();
        let letter = self
            .bump()
            .ok_or(FormatError::IncompleteDirective { offset: start })?;
        let specifier = if letter == b'[' {
            Specifier::CharSet(self.parse_scan_set(start)?)
        } else {
            Specifier::from_letter(letter).ok_or(FormatError::UnknownSpecifier {
                offset: self.pos - 1,
                letter,
            })?
        };
        let directive = Directive {
            suppressed,
            width,
            precision,
            length,
            specifier,
            letter,
        };
        trace!("Directive at {}: {:?}", start, directive);
        Ok(directive)
    }

    // The first member is always literal, even `]`. A `-` between two members is a range.
    fn parse_scan_set(&mut self, start: usize) -> Result<CharSet, FormatError> {
        let unterminated = FormatError::UnterminatedScanSet { offset: start };
        let mut set = CharSet::new(self.eat(b'^'));
        let first = self.bump().ok_or(unterminated)?;
        set.insert(first);
        let mut prev = Some(first);
        loop {
            let b = self.bump().ok_or(unterminated)?;
            match (b, prev, self.peek()) {
                (b']', _, _) => return Ok(set),
                (b'-', Some(lo), Some(hi)) if hi != b']' => {
                    self.pos += 1;
                    if lo <= hi {
                        set.insert_range(lo, hi);
                    } else {
                        set.insert(b'-');
                        set.insert(hi);
                    }
                    prev = None;
                }
                _ => {
                    set.insert(b);
                    prev = Some(b);
                }
            }
        }
    }
}
