//! Module with the scanner configuration.
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::Result;

/// The text mode decides how many bytes form one logical character.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextMode {
    /// Every byte is a character.
    SingleByte,
    /// Legacy double-byte text (GB2312 style). A lead byte in `0xA1..=0xFE` together with the
    /// byte following it forms one character.
    #[default]
    DoubleByte,
}

impl TextMode {
    /// Returns true if `b` starts a two-byte unit in this mode.
    #[inline]
    pub fn is_lead_byte(&self, b: u8) -> bool {
        match self {
            TextMode::SingleByte => false,
            TextMode::DoubleByte => (0xA1..=0xFE).contains(&b),
        }
    }

    /// The length of the logical character starting at `pos`, 0 at the end of the input.
    /// A lead byte without a successor is a single-byte character.
    #[inline]
    pub fn unit_len(&self, input: &[u8], pos: usize) -> usize {
        match input.get(pos) {
            None => 0,
            Some(&b) if self.is_lead_byte(b) && pos + 1 < input.len() => 2,
            Some(_) => 1,
        }
    }
}

/// The policy flags of a scanner.
///
/// The options can be deserialized from JSON. Missing fields take their default values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Attach a diagnostic to the scan result and log it when a scan stops early.
    pub strict_diagnostics: bool,
    /// Only accept bounded buffers for text conversions.
    pub bounded_output: bool,
    /// The text mode of the input.
    pub text_mode: TextMode,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            strict_diagnostics: false,
            bounded_output: true,
            text_mode: TextMode::default(),
        }
    }
}

impl ScanOptions {
    /// Read the options from a JSON document.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}
