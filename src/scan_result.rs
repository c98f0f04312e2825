use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{FormatError, ScanPosition};

/// The reason why a scan stopped before the end of the format string.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// The format string is malformed.
    #[error("Malformed format: {0}")]
    MalformedFormat(FormatError),

    /// The input at the current position is no valid lexeme for the conversion.
    #[error("Conversion mismatch")]
    ConversionMismatch,

    /// The input ended before the directive could consume anything.
    #[error("Input exhausted")]
    InputExhausted,

    /// A literal byte of the format does not match the input.
    #[error("Literal mismatch: expected '{}', found '{}'", .expected.escape_ascii(), .found.escape_ascii())]
    LiteralMismatch {
        /// The byte of the format string.
        expected: u8,
        /// The byte of the input.
        found: u8,
    },

    /// A bounded buffer cannot hold a single logical character.
    #[error("Capacity of the output buffer exceeded")]
    CapacityExceeded,
}

/// A diagnostic that describes where and why a scan stopped.
///
/// Diagnostics are only created by scanners with strict diagnostics enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Where the scan stopped.
    pub position: ScanPosition,
    /// The input byte at the position, `None` at the end of the input.
    pub input_byte: Option<u8>,
    /// The format byte at the position, `None` at the end of the format.
    pub format_byte: Option<u8>,
    /// Why the scan stopped.
    pub reason: StopReason,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn byte(b: Option<u8>) -> String {
            b.map_or_else(|| "<end>".to_string(), |b| format!("'{}'", b.escape_ascii()))
        }
        write!(
            f,
            "{}: input[{}]={}, format[{}]={}",
            self.reason,
            self.position.input,
            byte(self.input_byte),
            self.position.format,
            byte(self.format_byte)
        )
    }
}

/// The outcome of one scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    assigned_count: usize,
    consumed: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure_position: Option<ScanPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop_reason: Option<StopReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    diagnostic: Option<Diagnostic>,
}

impl ScanResult {
    pub(crate) fn completed(assigned_count: usize, consumed: usize) -> Self {
        Self {
            assigned_count,
            consumed,
            failure_position: None,
            stop_reason: None,
            diagnostic: None,
        }
    }

    pub(crate) fn stopped(
        assigned_count: usize,
        consumed: usize,
        position: ScanPosition,
        reason: StopReason,
        diagnostic: Option<Diagnostic>,
    ) -> Self {
        Self {
            assigned_count,
            consumed,
            failure_position: Some(position),
            stop_reason: Some(reason),
            diagnostic,
        }
    }

    /// The number of output slots that were written.
    /// Slots for `%n` are not counted.
    #[inline]
    pub fn assigned_count(&self) -> usize {
        self.assigned_count
    }

    /// The number of input bytes consumed by the scan.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Returns true if the scan stopped before the end of the format string.
    #[inline]
    pub fn terminated_early(&self) -> bool {
        self.stop_reason.is_some()
    }

    /// Where the scan stopped, `None` if the whole format was processed.
    #[inline]
    pub fn failure_position(&self) -> Option<ScanPosition> {
        self.failure_position
    }

    /// Why the scan stopped, `None` if the whole format was processed.
    #[inline]
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    /// The diagnostic of a strict scanner.
    #[inline]
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        self.diagnostic.as_ref()
    }

    /// Returns true if the scan stopped because of a malformed format string.
    pub fn is_malformed_format(&self) -> bool {
        matches!(self.stop_reason, Some(StopReason::MalformedFormat(_)))
    }
}
