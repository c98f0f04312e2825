//! Module with the scan position type.
//! A scan position is a pair of byte offsets, one into the input and one into the format.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A position of the scan.
/// Both offsets are 0-based byte offsets.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ScanPosition {
    /// The offset into the input buffer.
    pub input: usize,
    /// The offset into the format string.
    pub format: usize,
}

impl ScanPosition {
    /// Create a new position.
    pub fn new(input: usize, format: usize) -> Self {
        Self { input, format }
    }

    /// Get the input offset of the position.
    #[inline]
    pub fn input(&self) -> usize {
        self.input
    }

    /// Get the format offset of the position.
    #[inline]
    pub fn format(&self) -> usize {
        self.format
    }
}

impl fmt::Display for ScanPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input: {}, format: {}", self.input, self.format)
    }
}
