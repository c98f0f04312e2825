//! Module with the parsed units of a format string.
use crate::CharSet;

/// A length modifier selects the width of the destination of an integer or float conversion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthModifier {
    /// No modifier.
    #[default]
    None,
    /// `hh`
    HalfHalf,
    /// `h`
    Half,
    /// `l`
    Long,
    /// `ll`
    LongLong,
    /// `I64`
    Fixed64,
}

impl LengthModifier {
    /// The modifier as it is written in a format string.
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthModifier::None => "",
            LengthModifier::HalfHalf => "hh",
            LengthModifier::Half => "h",
            LengthModifier::Long => "l",
            LengthModifier::LongLong => "ll",
            LengthModifier::Fixed64 => "I64",
        }
    }

    /// Returns true for the modifiers that select a 64-bit destination.
    #[inline]
    pub fn is_wide(&self) -> bool {
        matches!(
            self,
            LengthModifier::Long | LengthModifier::LongLong | LengthModifier::Fixed64
        )
    }
}

impl std::fmt::Display for LengthModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The precision of a directive, i.e. the part after the `.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// `.N`
    Fixed(usize),
    /// `.*`, the value is taken from a [crate::OutputSlot::Precision] slot.
    FromArgument,
}

/// The conversion a directive performs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Specifier {
    /// `%d`, `%i`
    SignedInt,
    /// `%u`
    UnsignedInt,
    /// `%o`
    Octal,
    /// `%x`, `%X`
    Hex,
    /// `%p`
    Pointer,
    /// `%f`, `%e`, `%g`, `%E`, `%G`
    Float,
    /// `%s`
    String,
    /// `%[...]`, `%[^...]`
    CharSet(CharSet),
    /// `%c`
    Char,
    /// `%n`
    BytesRead,
    /// `%%`
    LiteralPercent,
}

impl Specifier {
    /// Maps a conversion letter to a specifier. The scan-set is not handled here because its
    /// body has to be parsed.
    pub(crate) fn from_letter(letter: u8) -> Option<Self> {
        match letter {
            b'd' | b'i' => Some(Specifier::SignedInt),
            b'u' => Some(Specifier::UnsignedInt),
            b'o' => Some(Specifier::Octal),
            b'x' | b'X' => Some(Specifier::Hex),
            b'p' => Some(Specifier::Pointer),
            b'f' | b'e' | b'g' | b'E' | b'G' => Some(Specifier::Float),
            b's' => Some(Specifier::String),
            b'c' => Some(Specifier::Char),
            b'n' => Some(Specifier::BytesRead),
            b'%' => Some(Specifier::LiteralPercent),
            _ => None,
        }
    }

    /// Returns true if the conversion skips leading whitespace of the input.
    #[inline]
    pub fn skips_whitespace(&self) -> bool {
        !matches!(
            self,
            Specifier::Char | Specifier::CharSet(_) | Specifier::BytesRead
        )
    }

    /// Returns true if the conversion writes an output slot when it is not suppressed.
    #[inline]
    pub fn takes_slot(&self) -> bool {
        !matches!(self, Specifier::LiteralPercent)
    }
}

/// One parsed `%...` sequence of a format string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Directive {
    /// The `*` flag, the conversion consumes input but assigns nothing.
    pub suppressed: bool,
    /// The maximum field width in bytes. `None` means unbounded.
    pub width: Option<usize>,
    /// The precision.
    pub precision: Option<Precision>,
    /// The length modifier.
    pub length: LengthModifier,
    /// The conversion.
    pub specifier: Specifier,
    /// The conversion letter as written in the format.
    pub letter: u8,
}

/// One step of the format string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormatItem {
    /// A byte that must appear verbatim in the input.
    Literal(u8),
    /// A run of whitespace, matches any amount of input whitespace including none.
    Whitespace,
    /// A conversion directive.
    Directive(Directive),
}
