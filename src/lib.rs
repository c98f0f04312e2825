#![forbid(missing_docs)]
//! # `gbscan`
//! The `gbscan` crate is a library that extracts typed values from byte buffers as described by a
//! `scanf`-style format string.
//! It supports the usual conversion directives with field widths, suppression, length modifiers
//! and scan-sets (`%[a-z]`, `%[^,]`).
//!
//! Two things set it apart from the C functions it mimics:
//! - Output slots are typed. A scan checks every slot against its directive before it consumes
//!   any input and reports a mismatch as error instead of writing through a wrong pointer.
//! - Text conversions are aware of double-byte encodings like GB2312 where a lead byte in
//!   `0xA1..=0xFE` starts a two-byte character. Such a character is never split, neither by a
//!   field width nor by the capacity of an output buffer.
//!
//! A scan that stops because the input doesn't match the format is not an error. The
//! [ScanResult] tells how many values were assigned and where the scan stopped.
//!
//! # Example
//! ```rust
//! use gbscan::{OutputSlot, ScannerBuilder};
//!
//! let scanner = ScannerBuilder::new().strict_diagnostics(true).build();
//!
//! let mut id = 0u32;
//! let mut name = [0u8; 16];
//! let mut city = [0u8; 16];
//! let result = scanner
//!     .scan(
//!         b"0x2a: Li Lei,\xC9\xCF\xBA\xA3",
//!         "%x: %[^,],%s",
//!         &mut [
//!             OutputSlot::U32(&mut id),
//!             OutputSlot::Buffer(&mut name),
//!             OutputSlot::Buffer(&mut city),
//!         ],
//!     )
//!     .expect("slots fit the format");
//! assert_eq!(result.assigned_count(), 3);
//! assert_eq!(id, 42);
//! assert_eq!(&name[..7], b"Li Lei\0");
//! assert_eq!(&city[..5], b"\xC9\xCF\xBA\xA3\0");
//!
//! // The scan stops at the first mismatch.
//! let mut a = 0i32;
//! let mut b = 0i32;
//! let result = scanner
//!     .scan("1;2", "%d,%d", &mut [OutputSlot::I32(&mut a), OutputSlot::I32(&mut b)])
//!     .expect("slots fit the format");
//! assert_eq!(result.assigned_count(), 1);
//! assert_eq!(result.failure_position().map(|p| p.input()), Some(1));
//! ```
//!
//! Lines of a file or any other [std::io::BufRead] can be scanned with a [LineReader].

/// Module that provides the CharSet type of scan-sets
mod char_set;
pub use char_set::CharSet;

/// Module with the parsed units of a format string
mod directive;
pub use directive::{Directive, FormatItem, LengthModifier, Precision, Specifier};

/// Module with error definitions
mod errors;
pub use errors::{FormatError, Result, ScanError, ScanErrorKind};

/// Module that provides the parse_format function
mod format_items;
pub use format_items::{parse_format, FormatItems};

/// The module with internal implementation details.
mod internal;

/// Module that provides the LineReader type
mod line_reader;
pub use line_reader::LineReader;

/// Module that provides the OutputSlot type
mod output_slot;
pub use output_slot::{OutputSlot, SlotKind};

/// Module that provides a position type
mod position;
pub use position::ScanPosition;

/// Module with the options of a scanner
mod scan_options;
pub use scan_options::{ScanOptions, TextMode};

/// Module that provides the result of a scan
mod scan_result;
pub use scan_result::{Diagnostic, ScanResult, StopReason};

/// The module with the scanner.
mod scanner;
pub use scanner::{scan, Scanner};

/// The module with the scanner builder.
mod scanner_builder;
pub use scanner_builder::ScannerBuilder;
