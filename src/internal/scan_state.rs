use log::{trace, warn};

use crate::{Diagnostic, ScanPosition, ScanResult, StopReason};

/// The outcome of one format item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The item matched and an output slot was written.
    Assigned,
    /// The item matched without assigning anything.
    Matched,
    /// The item did not match.
    Failed(StopReason),
}

/// The error and termination policy of a scan.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScanState {
    assigned_count: usize,
    strict_diagnostics: bool,
    state: InnerScanState,
}

impl ScanState {
    pub(crate) fn new(strict_diagnostics: bool) -> Self {
        Self {
            assigned_count: 0,
            strict_diagnostics,
            state: InnerScanState::Running,
        }
    }

    /// Returns true as long as the scan should go on with the next format item.
    #[inline]
    pub(crate) fn is_running(&self) -> bool {
        self.state == InnerScanState::Running
    }

    /// Records the outcome of a format item.
    /// See [InnerScanState] for the transitions.
    pub(crate) fn record(&mut self, outcome: Outcome, at: StopSite) {
        debug_assert!(self.is_running());
        match outcome {
            Outcome::Assigned => self.assigned_count += 1,
            Outcome::Matched => {}
            Outcome::Failed(reason) => self.stop(reason, at),
        }
    }

    /// The format string is exhausted.
    pub(crate) fn finish(&mut self) {
        if self.is_running() {
            self.state = InnerScanState::Finished;
        }
    }

    fn stop(&mut self, reason: StopReason, at: StopSite) {
        let diagnostic = if self.strict_diagnostics {
            let diagnostic = Diagnostic {
                position: at.position,
                input_byte: at.input_byte,
                format_byte: at.format_byte,
                reason,
            };
            warn!("Scan stopped: {}", diagnostic);
            Some(diagnostic)
        } else {
            trace!("Scan stopped at {}: {}", at.position, reason);
            None
        };
        self.state = InnerScanState::Stopped {
            position: at.position,
            reason,
            diagnostic,
        };
    }

    /// Converts the state into the result of the scan.
    pub(crate) fn into_result(self, consumed: usize) -> ScanResult {
        match self.state {
            InnerScanState::Running | InnerScanState::Finished => {
                ScanResult::completed(self.assigned_count, consumed)
            }
            InnerScanState::Stopped {
                position,
                reason,
                diagnostic,
            } => ScanResult::stopped(self.assigned_count, consumed, position, reason, diagnostic),
        }
    }
}

/// Where a format item failed, with the bytes found there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StopSite {
    pub(crate) position: ScanPosition,
    pub(crate) input_byte: Option<u8>,
    pub(crate) format_byte: Option<u8>,
}

/// The state enumeration of a scan.
#[derive(Debug, Clone, PartialEq)]
enum InnerScanState {
    /// Format items are processed one after the other.
    ///
    /// A matching item keeps the scan in this state, a failing item switches to Stopped and the
    /// end of the format switches to Finished.
    Running,

    /// The whole format string was processed.
    ///
    /// This state can't be left.
    Finished,

    /// An item failed. The remaining items are not processed.
    ///
    /// This state can't be left.
    Stopped {
        position: ScanPosition,
        reason: StopReason,
        diagnostic: Option<Diagnostic>,
    },
}
