//! Module with the output slot types.
//!
//! The caller prepares one slot per assigning directive, in the order the directives appear in
//! the format string. The slot type replaces the variadic argument of a C `scanf` call: it
//! determines the destination type and, for bounded buffers, the capacity.

use std::fmt;

/// A destination for one converted value.
#[derive(Debug)]
pub enum OutputSlot<'a> {
    /// `%hhd`, `%hhn`
    I8(&'a mut i8),
    /// `%hd`, `%hn`
    I16(&'a mut i16),
    /// `%d`, `%i`, `%n`
    I32(&'a mut i32),
    /// `%ld`, `%lld`, `%I64d`
    I64(&'a mut i64),
    /// `%hhu`, `%hhx`, `%hho`
    U8(&'a mut u8),
    /// `%hu`, `%hx`, `%ho`
    U16(&'a mut u16),
    /// `%u`, `%x`, `%o`
    U32(&'a mut u32),
    /// `%lu`, `%llx`, `%I64u`
    U64(&'a mut u64),
    /// `%p`
    Usize(&'a mut usize),
    /// `%f`
    F32(&'a mut f32),
    /// `%lf`
    F64(&'a mut f64),
    /// A bounded buffer for `%s`, `%[...]` and `%c`. The capacity is the length of the slice and
    /// includes the terminating NUL byte.
    Buffer(&'a mut [u8]),
    /// A growable buffer for `%s`, `%[...]` and `%c`. The converted bytes replace the content,
    /// no terminator is stored.
    Text(&'a mut Vec<u8>),
    /// The value of a `.*` precision. It is read, never written.
    Precision(usize),
}

impl OutputSlot<'_> {
    /// The kind of the slot.
    pub fn kind(&self) -> SlotKind {
        match self {
            OutputSlot::I8(_) => SlotKind::I8,
            OutputSlot::I16(_) => SlotKind::I16,
            OutputSlot::I32(_) => SlotKind::I32,
            OutputSlot::I64(_) => SlotKind::I64,
            OutputSlot::U8(_) => SlotKind::U8,
            OutputSlot::U16(_) => SlotKind::U16,
            OutputSlot::U32(_) => SlotKind::U32,
            OutputSlot::U64(_) => SlotKind::U64,
            OutputSlot::Usize(_) => SlotKind::Usize,
            OutputSlot::F32(_) => SlotKind::F32,
            OutputSlot::F64(_) => SlotKind::F64,
            OutputSlot::Buffer(_) => SlotKind::Buffer,
            OutputSlot::Text(_) => SlotKind::Text,
            OutputSlot::Precision(_) => SlotKind::Precision,
        }
    }
}

macro_rules! impl_from_slot {
    ($variant:ident, $tp:ty) => {
        impl<'a> From<&'a mut $tp> for OutputSlot<'a> {
            fn from(value: &'a mut $tp) -> Self {
                OutputSlot::$variant(value)
            }
        }
    };
}

impl_from_slot!(I8, i8);
impl_from_slot!(I16, i16);
impl_from_slot!(I32, i32);
impl_from_slot!(I64, i64);
impl_from_slot!(U8, u8);
impl_from_slot!(U16, u16);
impl_from_slot!(U32, u32);
impl_from_slot!(U64, u64);
impl_from_slot!(Usize, usize);
impl_from_slot!(F32, f32);
impl_from_slot!(F64, f64);
impl_from_slot!(Buffer, [u8]);
impl_from_slot!(Text, Vec<u8>);

impl<'a, const N: usize> From<&'a mut [u8; N]> for OutputSlot<'a> {
    fn from(value: &'a mut [u8; N]) -> Self {
        OutputSlot::Buffer(value)
    }
}

/// The kind of an output slot, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// [OutputSlot::I8]
    I8,
    /// [OutputSlot::I16]
    I16,
    /// [OutputSlot::I32]
    I32,
    /// [OutputSlot::I64]
    I64,
    /// [OutputSlot::U8]
    U8,
    /// [OutputSlot::U16]
    U16,
    /// [OutputSlot::U32]
    U32,
    /// [OutputSlot::U64]
    U64,
    /// [OutputSlot::Usize]
    Usize,
    /// [OutputSlot::F32]
    F32,
    /// [OutputSlot::F64]
    F64,
    /// [OutputSlot::Buffer]
    Buffer,
    /// [OutputSlot::Text]
    Text,
    /// [OutputSlot::Precision]
    Precision,
}

impl SlotKind {
    /// The name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotKind::I8 => "i8",
            SlotKind::I16 => "i16",
            SlotKind::I32 => "i32",
            SlotKind::I64 => "i64",
            SlotKind::U8 => "u8",
            SlotKind::U16 => "u16",
            SlotKind::U32 => "u32",
            SlotKind::U64 => "u64",
            SlotKind::Usize => "usize",
            SlotKind::F32 => "f32",
            SlotKind::F64 => "f64",
            SlotKind::Buffer => "a bounded buffer",
            SlotKind::Text => "a text buffer",
            SlotKind::Precision => "a precision",
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
