//! Lexing of numeric conversions.
//!
//! All functions work on the unconsumed input and return the length of the lexeme they
//! recognized. They never look beyond `limit` bytes.

/// The radix of an integer conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Radix {
    Octal,
    Decimal,
    Hex,
}

impl Radix {
    #[inline]
    fn value(self) -> u32 {
        match self {
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }

    #[inline]
    fn digit(self, b: u8) -> Option<u64> {
        char::from(b).to_digit(self.value()).map(u64::from)
    }
}

/// An integer lexeme, parsed at 64-bit precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IntLexeme {
    pub(crate) len: usize,
    magnitude: u64,
    negative: bool,
    overflow: bool,
}

impl IntLexeme {
    /// The value as signed integer, saturated like `strtoll`.
    pub(crate) fn as_signed(&self) -> i64 {
        match (self.negative, self.overflow) {
            (false, true) => i64::MAX,
            (true, true) => i64::MIN,
            (false, false) => i64::try_from(self.magnitude).unwrap_or(i64::MAX),
            (true, false) if self.magnitude > i64::MIN.unsigned_abs() => i64::MIN,
            // 2^63 wraps to i64::MIN which is what we want.
            (true, false) => (self.magnitude as i64).wrapping_neg(),
        }
    }

    /// The value as unsigned integer. A minus sign negates modulo 2^64 like `strtoull`.
    pub(crate) fn as_unsigned(&self) -> u64 {
        match (self.negative, self.overflow) {
            (_, true) => u64::MAX,
            (true, false) => self.magnitude.wrapping_neg(),
            (false, false) => self.magnitude,
        }
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Lexes an integer: optional sign if `signed_form`, an optional `0x` prefix for hex, and the
/// longest digit run. Returns `None` if there is no digit.
pub(crate) fn lex_integer(
    input: &[u8],
    limit: usize,
    radix: Radix,
    signed_form: bool,
) -> Option<IntLexeme> {
    let bytes = &input[..input.len().min(limit)];
    let mut pos = 0;
    let mut negative = false;
    if signed_form {
        match bytes.first() {
            Some(b'-') => {
                negative = true;
                pos = 1;
            }
            Some(b'+') => pos = 1,
            _ => {}
        }
    }
    if radix == Radix::Hex
        && matches!(bytes.get(pos..pos + 2), Some(b"0x" | b"0X"))
        && bytes.get(pos + 2).and_then(|b| radix.digit(*b)).is_some()
    {
        pos += 2;
    }
    let digits_start = pos;
    let mut magnitude = 0u64;
    let mut overflow = false;
    while let Some(d) = bytes.get(pos).and_then(|b| radix.digit(*b)) {
        match magnitude
            .checked_mul(u64::from(radix.value()))
            .and_then(|m| m.checked_add(d))
        {
            Some(m) => magnitude = m,
            None => overflow = true,
        }
        pos += 1;
    }
    (pos > digits_start).then_some(IntLexeme {
        len: pos,
        magnitude,
        negative,
        overflow,
    })
}

/// Lexes a decimal floating point number: sign, digits, optional fraction, optional exponent.
/// `max_fraction` caps the number of fractional digits that are consumed.
/// Returns the length of the lexeme. Its text is parsed by the destination so that an `f32` is
/// rounded only once.
pub(crate) fn lex_float(
    input: &[u8],
    limit: usize,
    max_fraction: Option<usize>,
) -> Option<usize> {
    let bytes = &input[..input.len().min(limit)];
    let mut pos = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;
    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        let available = count_digits(&bytes[pos + 1..]);
        let taken = max_fraction.map_or(available, |max| available.min(max));
        if int_digits + taken > 0 {
            pos += 1 + taken;
            frac_digits = taken;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = bytes.get(exp..).map_or(0, count_digits);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }
    Some(pos)
}
