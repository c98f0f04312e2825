use crate::{scanner::Scanner, ScanOptions, TextMode};

/// A builder for creating a scanner.
#[derive(Debug, Clone, Default)]
pub struct ScannerBuilder {
    options: ScanOptions,
}

impl ScannerBuilder {
    /// Creates a new scanner builder with the default options.
    pub fn new() -> Self {
        Self {
            options: ScanOptions::default(),
        }
    }

    /// Attaches a diagnostic to every scan that stops early and logs it as warning.
    pub fn strict_diagnostics(mut self, strict_diagnostics: bool) -> Self {
        self.options.strict_diagnostics = strict_diagnostics;
        self
    }

    /// Refuses growable text slots for text conversions if set.
    pub fn bounded_output(mut self, bounded_output: bool) -> Self {
        self.options.bounded_output = bounded_output;
        self
    }

    /// Sets the text mode of the scanner.
    pub fn text_mode(mut self, text_mode: TextMode) -> Self {
        self.options.text_mode = text_mode;
        self
    }

    /// Replaces all options, e.g. with options loaded by [ScanOptions::from_json_reader].
    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds the scanner from the scanner builder.
    pub fn build(self) -> Scanner {
        Scanner {
            options: self.options,
        }
    }
}
