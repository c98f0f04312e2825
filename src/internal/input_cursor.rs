use crate::{internal::is_space, TextMode};

/// Walks the input buffer. The offset never moves backwards past a position that was handed
/// out by [InputCursor::mark].
#[derive(Debug, Clone)]
pub(crate) struct InputCursor<'h> {
    input: &'h [u8],
    pos: usize,
    text_mode: TextMode,
}

impl<'h> InputCursor<'h> {
    pub(crate) fn new(input: &'h [u8], text_mode: TextMode) -> Self {
        Self {
            input,
            pos: 0,
            text_mode,
        }
    }

    /// The number of bytes consumed so far.
    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The unconsumed rest of the input.
    #[inline]
    pub(crate) fn rest(&self) -> &'h [u8] {
        &self.input[self.pos..]
    }

    /// Returns the current offset to restore it with [InputCursor::reset] if a conversion fails.
    #[inline]
    pub(crate) fn mark(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn reset(&mut self, mark: usize) {
        debug_assert!(mark <= self.pos);
        self.pos = mark;
    }

    #[inline]
    pub(crate) fn advance(&mut self, len: usize) {
        debug_assert!(self.pos + len <= self.input.len());
        self.pos += len;
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_space) {
            self.pos += 1;
        }
    }

    /// Consumes `expected` if it is the next byte.
    #[inline]
    pub(crate) fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// The length of the logical character at the current offset, 0 at the end of the input.
    #[inline]
    pub(crate) fn unit_len(&self) -> usize {
        self.text_mode.unit_len(self.input, self.pos)
    }

    /// Measures the longest run of logical characters that satisfy `accept` and fit into `budget`
    /// bytes. `accept` sees the first byte of each character. A two-byte character that would
    /// exceed the budget ends the run, it is never split.
    ///
    /// The cursor is not moved.
    pub(crate) fn measure_run<F>(&self, budget: usize, accept: F) -> usize
    where
        F: Fn(u8) -> bool,
    {
        let mut len = 0;
        loop {
            let pos = self.pos + len;
            let unit = self.text_mode.unit_len(self.input, pos);
            if unit == 0 || !accept(self.input[pos]) || len + unit > budget {
                break;
            }
            len += unit;
        }
        len
    }
}
