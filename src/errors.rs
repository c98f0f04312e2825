use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::SlotKind;

/// The result type for the `gbscan` crate.
pub type Result<T> = std::result::Result<T, ScanError>;

/// The error type for the `gbscan` crate.
///
/// Only violations of the calling contract, I/O failures and configuration errors are reported
/// as errors. A scan that stops because the input does not match the format is not an error, it
/// is reported by the [crate::ScanResult].
#[derive(Error, Debug)]
pub struct ScanError {
    /// The source of the error.
    pub source: Box<ScanErrorKind>,
}

impl ScanError {
    /// Create a new `ScanError`.
    pub fn new(kind: ScanErrorKind) -> Self {
        ScanError {
            source: Box::new(kind),
        }
    }

    /// Get the kind of the error.
    #[inline]
    pub fn kind(&self) -> &ScanErrorKind {
        &self.source
    }
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug)]
pub enum ScanErrorKind {
    /// A directive needs an output slot but the slot list is exhausted.
    #[error("Missing output slot #{index}")]
    MissingSlot {
        /// The index of the missing slot.
        index: usize,
    },

    /// The output slot does not fit the directive it was consumed by.
    #[error("Output slot #{index} is {found}, but the directive expects {expected}")]
    SlotMismatch {
        /// The index of the offending slot.
        index: usize,
        /// The slot kind(s) the directive accepts.
        expected: &'static str,
        /// The slot kind that was supplied.
        found: SlotKind,
    },

    /// A growable text slot was supplied while the scanner only accepts bounded buffers.
    #[error("Output slot #{index} is unbounded, but the scanner requires bounded buffers")]
    UnboundedSlot {
        /// The index of the offending slot.
        index: usize,
    },

    /// A bounded buffer has no room for the terminator.
    #[error("Output slot #{index} has zero capacity")]
    ZeroCapacity {
        /// The index of the offending slot.
        index: usize,
    },

    /// A std::io error occurred.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// The scanner options could not be deserialized.
    #[error("Invalid scanner options: {0}")]
    ConfigError(#[from] serde_json::Error),
}

impl From<std::io::Error> for ScanError {
    fn from(error: std::io::Error) -> Self {
        ScanError::new(ScanErrorKind::IoError(error))
    }
}

impl From<serde_json::Error> for ScanError {
    fn from(error: serde_json::Error) -> Self {
        ScanError::new(ScanErrorKind::ConfigError(error))
    }
}

impl From<ScanErrorKind> for ScanError {
    fn from(kind: ScanErrorKind) -> Self {
        ScanError::new(kind)
    }
}

/// An error in the format string.
///
/// A malformed format always stops the scan. The offsets are byte offsets into the format.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatError {
    /// A `%[` without the closing `]`.
    #[error("Unterminated scan-set starting at format offset {offset}")]
    UnterminatedScanSet {
        /// The offset of the `%` that opens the directive.
        offset: usize,
    },

    /// The letter after the directive flags is not a known conversion.
    #[error("Unknown conversion specifier '{}' at format offset {offset}", .letter.escape_ascii())]
    UnknownSpecifier {
        /// The offset of the offending letter.
        offset: usize,
        /// The offending letter.
        letter: u8,
    },

    /// The format ends in the middle of a directive.
    #[error("Incomplete directive at format offset {offset}")]
    IncompleteDirective {
        /// The offset of the `%` that opens the directive.
        offset: usize,
    },
}

impl FormatError {
    /// The format offset the error refers to.
    pub fn offset(&self) -> usize {
        match self {
            FormatError::UnterminatedScanSet { offset }
            | FormatError::UnknownSpecifier { offset, .. }
            | FormatError::IncompleteDirective { offset } => *offset,
        }
    }
}
