//! The output side of a scan: handing out slots in order and writing converted values.
//!
//! Slots are checked when a directive starts, before any input is consumed. Writes happen only
//! after a conversion succeeded, so a slot is either fully written or untouched.

use log::debug;

use crate::{OutputSlot, Result, ScanError, ScanErrorKind, SlotKind};

/// Hands out the caller's slots in order.
pub(crate) struct SlotQueue<'s, 'a> {
    slots: std::slice::IterMut<'s, OutputSlot<'a>>,
    index: usize,
}

impl<'s, 'a> SlotQueue<'s, 'a> {
    pub(crate) fn new(slots: &'s mut [OutputSlot<'a>]) -> Self {
        Self {
            slots: slots.iter_mut(),
            index: 0,
        }
    }

    /// Returns the next slot together with its index.
    pub(crate) fn next_slot(&mut self) -> Result<(usize, &'s mut OutputSlot<'a>)> {
        let index = self.index;
        let slot = self
            .slots
            .next()
            .ok_or(ScanErrorKind::MissingSlot { index })?;
        self.index += 1;
        Ok((index, slot))
    }

    /// Consumes the value of a `.*` precision.
    pub(crate) fn next_precision(&mut self) -> Result<usize> {
        match self.next_slot()? {
            (_, OutputSlot::Precision(value)) => Ok(*value),
            (index, slot) => Err(mismatch(index, "a precision", slot.kind())),
        }
    }
}

fn mismatch(index: usize, expected: &'static str, found: SlotKind) -> ScanError {
    ScanError::new(ScanErrorKind::SlotMismatch {
        index,
        expected,
        found,
    })
}

/// The destination of an integer conversion.
#[derive(Debug)]
pub(crate) enum IntSink<'s> {
    I8(&'s mut i8),
    I16(&'s mut i16),
    I32(&'s mut i32),
    I64(&'s mut i64),
    U8(&'s mut u8),
    U16(&'s mut u16),
    U32(&'s mut u32),
    U64(&'s mut u64),
    Usize(&'s mut usize),
}

impl<'s> IntSink<'s> {
    /// Checks that the slot is of the `expected` integer kind.
    pub(crate) fn new(
        index: usize,
        slot: &'s mut OutputSlot<'_>,
        expected: SlotKind,
    ) -> Result<Self> {
        let found = slot.kind();
        if found != expected {
            return Err(mismatch(index, expected.as_str(), found));
        }
        Ok(match slot {
            OutputSlot::I8(r) => IntSink::I8(&mut **r),
            OutputSlot::I16(r) => IntSink::I16(&mut **r),
            OutputSlot::I32(r) => IntSink::I32(&mut **r),
            OutputSlot::I64(r) => IntSink::I64(&mut **r),
            OutputSlot::U8(r) => IntSink::U8(&mut **r),
            OutputSlot::U16(r) => IntSink::U16(&mut **r),
            OutputSlot::U32(r) => IntSink::U32(&mut **r),
            OutputSlot::U64(r) => IntSink::U64(&mut **r),
            OutputSlot::Usize(r) => IntSink::Usize(&mut **r),
            _ => return Err(mismatch(index, expected.as_str(), found)),
        })
    }

    /// Stores the two's complement bits of a 64-bit value, truncated to the width of the slot.
    pub(crate) fn store(self, bits: u64) {
        match self {
            IntSink::I8(r) => *r = bits as i8,
            IntSink::I16(r) => *r = bits as i16,
            IntSink::I32(r) => *r = bits as i32,
            IntSink::I64(r) => *r = bits as i64,
            IntSink::U8(r) => *r = bits as u8,
            IntSink::U16(r) => *r = bits as u16,
            IntSink::U32(r) => *r = bits as u32,
            IntSink::U64(r) => *r = bits,
            IntSink::Usize(r) => *r = bits as usize,
        }
    }
}

/// The destination of a float conversion.
#[derive(Debug)]
pub(crate) enum FloatSink<'s> {
    F32(&'s mut f32),
    F64(&'s mut f64),
}

impl<'s> FloatSink<'s> {
    pub(crate) fn new(
        index: usize,
        slot: &'s mut OutputSlot<'_>,
        expected: SlotKind,
    ) -> Result<Self> {
        let found = slot.kind();
        match slot {
            OutputSlot::F32(r) if expected == SlotKind::F32 => Ok(FloatSink::F32(&mut **r)),
            OutputSlot::F64(r) if expected == SlotKind::F64 => Ok(FloatSink::F64(&mut **r)),
            _ => Err(mismatch(index, expected.as_str(), found)),
        }
    }

    /// Parses a float lexeme directly at the width of the slot. Returns `false` if the text is
    /// not a number, the slot is untouched then.
    pub(crate) fn store(self, lexeme: &[u8]) -> bool {
        let Ok(text) = std::str::from_utf8(lexeme) else {
            return false;
        };
        match self {
            FloatSink::F32(r) => text.parse().map(|value| *r = value).is_ok(),
            FloatSink::F64(r) => text.parse().map(|value| *r = value).is_ok(),
        }
    }
}

/// The destination of a text conversion (`%s`, `%[...]`, `%c`).
#[derive(Debug)]
pub(crate) enum TextSink<'s> {
    /// Capacity is the slice length, one byte is reserved for the terminator.
    Bounded(&'s mut [u8]),
    Growable(&'s mut Vec<u8>),
}

impl<'s> TextSink<'s> {
    pub(crate) fn new(
        index: usize,
        slot: &'s mut OutputSlot<'_>,
        bounded_output: bool,
    ) -> Result<Self> {
        match slot {
            OutputSlot::Buffer(buf) if buf.is_empty() => {
                Err(ScanErrorKind::ZeroCapacity { index }.into())
            }
            OutputSlot::Buffer(buf) => Ok(TextSink::Bounded(&mut **buf)),
            OutputSlot::Text(_) if bounded_output => {
                Err(ScanErrorKind::UnboundedSlot { index }.into())
            }
            OutputSlot::Text(text) => {
                debug!("Slot #{} is an unbounded text buffer", index);
                Ok(TextSink::Growable(&mut **text))
            }
            other => Err(mismatch(
                index,
                "a bounded buffer or a text buffer",
                other.kind(),
            )),
        }
    }

    /// The maximum number of data bytes a text conversion may store.
    #[inline]
    pub(crate) fn budget(&self) -> usize {
        match self {
            TextSink::Bounded(buf) => buf.len() - 1,
            TextSink::Growable(_) => usize::MAX,
        }
    }

    /// Stores the converted bytes. A bounded buffer is always terminated.
    pub(crate) fn store(self, bytes: &[u8]) {
        match self {
            TextSink::Bounded(buf) => {
                debug_assert!(bytes.len() < buf.len());
                buf[..bytes.len()].copy_from_slice(bytes);
                buf[bytes.len()] = 0;
            }
            TextSink::Growable(text) => {
                text.clear();
                text.extend_from_slice(bytes);
            }
        }
    }
}
