use log::trace;

use super::{
    dispatcher,
    format_cursor::FormatCursor,
    input_cursor::InputCursor,
    scan_state::{Outcome, ScanState, StopSite},
    sink_writer::SlotQueue,
};
use crate::{
    directive::FormatItem, OutputSlot, Result, ScanOptions, ScanPosition, ScanResult, StopReason,
};

/// One scan of an input buffer against a format string.
pub(crate) struct ScanImpl<'h, 'f> {
    // The input haystack.
    input: InputCursor<'h>,
    // The format items.
    format: FormatCursor<'f>,
    options: ScanOptions,
}

impl<'h, 'f> ScanImpl<'h, 'f> {
    pub(crate) fn new(input: &'h [u8], format: &'f [u8], options: ScanOptions) -> Self {
        Self {
            input: InputCursor::new(input, options.text_mode),
            format: FormatCursor::new(format),
            options,
        }
    }

    /// Advances both cursors item by item until the format is exhausted or an item fails.
    ///
    /// Caller-contract violations abort the scan with an error. Everything else ends up in the
    /// returned [ScanResult].
    pub(crate) fn run(mut self, slots: &mut [OutputSlot<'_>]) -> Result<ScanResult> {
        let mut slots = SlotQueue::new(slots);
        let mut state = ScanState::new(self.options.strict_diagnostics);
        while state.is_running() {
            let item_start = self.format.offset();
            let input_start = self.input.mark();
            let outcome = match self.format.next_item() {
                None => {
                    state.finish();
                    break;
                }
                Some(Err(err)) => Outcome::Failed(StopReason::MalformedFormat(err)),
                Some(Ok(FormatItem::Whitespace)) => {
                    self.input.skip_whitespace();
                    Outcome::Matched
                }
                Some(Ok(FormatItem::Literal(expected))) => self.match_literal(expected),
                Some(Ok(FormatItem::Directive(directive))) => {
                    dispatcher::apply(&directive, &mut self.input, &mut slots, &self.options)?
                }
            };
            trace!(
                "Format item at {} -> {:?}, input offset {}",
                item_start,
                outcome,
                self.input.offset()
            );
            state.record(outcome, self.stop_site(input_start, item_start));
        }
        Ok(state.into_result(self.input.offset()))
    }

    fn match_literal(&mut self, expected: u8) -> Outcome {
        if self.input.eat(expected) {
            return Outcome::Matched;
        }
        match self.input.peek() {
            Some(found) => Outcome::Failed(StopReason::LiteralMismatch { expected, found }),
            None => Outcome::Failed(StopReason::InputExhausted),
        }
    }

    // A failing item leaves the input cursor at `input_start`.
    #[inline]
    fn stop_site(&self, input_start: usize, item_start: usize) -> StopSite {
        StopSite {
            position: ScanPosition::new(input_start, item_start),
            input_byte: self.input.peek(),
            format_byte: self.format.byte_at(item_start),
        }
    }
}

impl std::fmt::Debug for ScanImpl<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanImpl")
            .field("input_offset", &self.input.offset())
            .field("format_offset", &self.format.offset())
            .field("options", &self.options)
            .finish()
    }
}
