/// Module with the conversion rules of the directives.
mod dispatcher;

/// Module that provides the FormatCursor which walks the format string.
pub(crate) mod format_cursor;
pub(crate) use format_cursor::FormatCursor;

/// Module that provides the InputCursor which walks the input buffer.
mod input_cursor;

/// Module with the lexers of numeric conversions.
mod numeric;

/// Module that provides the ScanImpl type which drives a single scan.
mod scan_impl;
pub(crate) use scan_impl::ScanImpl;

/// Module that provides the error and termination policy of a scan.
mod scan_state;

/// Module with the typed writers of output slots.
mod sink_writer;

/// The C `isspace` set: space, `\t`, `\n`, `\v`, `\f` and `\r`.
#[inline]
pub(crate) fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}
