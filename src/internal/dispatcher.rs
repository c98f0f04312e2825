//! The conversion rules of the directives.

use log::{debug, trace};

use super::{
    input_cursor::InputCursor,
    is_space,
    numeric::{lex_float, lex_integer, Radix},
    scan_state::Outcome,
    sink_writer::{FloatSink, IntSink, SlotQueue, TextSink},
};
use crate::{
    directive::{Directive, LengthModifier, Precision, Specifier},
    Result, ScanOptions, SlotKind, StopReason,
};

/// The slot kind of a signed conversion (`%d`, `%i`, `%n`).
pub(crate) fn signed_kind(length: LengthModifier) -> SlotKind {
    match length {
        LengthModifier::None => SlotKind::I32,
        LengthModifier::HalfHalf => SlotKind::I8,
        LengthModifier::Half => SlotKind::I16,
        LengthModifier::Long | LengthModifier::LongLong | LengthModifier::Fixed64 => SlotKind::I64,
    }
}

/// The slot kind of an unsigned conversion (`%u`, `%o`, `%x`).
pub(crate) fn unsigned_kind(length: LengthModifier) -> SlotKind {
    match length {
        LengthModifier::None => SlotKind::U32,
        LengthModifier::HalfHalf => SlotKind::U8,
        LengthModifier::Half => SlotKind::U16,
        LengthModifier::Long | LengthModifier::LongLong | LengthModifier::Fixed64 => SlotKind::U64,
    }
}

/// The slot kind of a float conversion.
pub(crate) fn float_kind(length: LengthModifier) -> SlotKind {
    if length.is_wide() {
        SlotKind::F64
    } else {
        SlotKind::F32
    }
}

/// The checked destination of one directive.
enum Destination<'s> {
    Discard,
    Int(IntSink<'s>),
    Float(FloatSink<'s>),
    Text(TextSink<'s>),
}

impl Destination<'_> {
    fn store_int(self, bits: u64) -> Outcome {
        match self {
            Destination::Int(sink) => {
                sink.store(bits);
                Outcome::Assigned
            }
            _ => Outcome::Matched,
        }
    }

    fn store_float(self, lexeme: &[u8]) -> Outcome {
        match self {
            Destination::Float(sink) => {
                if sink.store(lexeme) {
                    Outcome::Assigned
                } else {
                    Outcome::Failed(StopReason::ConversionMismatch)
                }
            }
            _ => Outcome::Matched,
        }
    }
}

fn destination<'s>(
    directive: &Directive,
    slots: &mut SlotQueue<'s, '_>,
    options: &ScanOptions,
) -> Result<Destination<'s>> {
    if directive.suppressed || !directive.specifier.takes_slot() {
        return Ok(Destination::Discard);
    }
    let (index, slot) = slots.next_slot()?;
    let length = directive.length;
    Ok(match directive.specifier {
        Specifier::SignedInt | Specifier::BytesRead => {
            Destination::Int(IntSink::new(index, slot, signed_kind(length))?)
        }
        Specifier::UnsignedInt | Specifier::Octal | Specifier::Hex => {
            Destination::Int(IntSink::new(index, slot, unsigned_kind(length))?)
        }
        Specifier::Pointer => Destination::Int(IntSink::new(index, slot, SlotKind::Usize)?),
        Specifier::Float => Destination::Float(FloatSink::new(index, slot, float_kind(length))?),
        Specifier::String | Specifier::CharSet(_) | Specifier::Char => {
            Destination::Text(TextSink::new(index, slot, options.bounded_output)?)
        }
        Specifier::LiteralPercent => Destination::Discard,
    })
}

fn resolve_precision(directive: &Directive, slots: &mut SlotQueue<'_, '_>) -> Result<Option<usize>> {
    let precision = match directive.precision {
        None => None,
        Some(Precision::Fixed(value)) => Some(value),
        Some(Precision::FromArgument) => Some(slots.next_precision()?),
    };
    if precision.is_some() && directive.specifier != Specifier::Float {
        debug!(
            "Precision ignored for conversion '{}'",
            directive.letter.escape_ascii()
        );
    }
    Ok(precision)
}

/// The reason for a conversion that consumed nothing at the current position.
#[inline]
fn nothing_matched(cursor: &InputCursor) -> StopReason {
    if cursor.is_at_end() {
        StopReason::InputExhausted
    } else {
        StopReason::ConversionMismatch
    }
}

/// Applies one directive: takes its slots, matches the input and writes the value.
///
/// Slots are taken and checked before any input is consumed. A failing conversion leaves the
/// cursor where the directive started.
pub(crate) fn apply(
    directive: &Directive,
    cursor: &mut InputCursor,
    slots: &mut SlotQueue<'_, '_>,
    options: &ScanOptions,
) -> Result<Outcome> {
    let precision = resolve_precision(directive, slots)?;
    let destination = destination(directive, slots, options)?;
    let mark = cursor.mark();
    if directive.specifier.skips_whitespace() {
        cursor.skip_whitespace();
    }
    let limit = directive.width.unwrap_or(usize::MAX);
    let outcome = match &directive.specifier {
        Specifier::SignedInt => convert_int(cursor, limit, Radix::Decimal, true, destination),
        Specifier::UnsignedInt => convert_int(cursor, limit, Radix::Decimal, false, destination),
        Specifier::Octal => convert_int(cursor, limit, Radix::Octal, false, destination),
        Specifier::Hex | Specifier::Pointer => {
            convert_int(cursor, limit, Radix::Hex, false, destination)
        }
        Specifier::Float => match lex_float(cursor.rest(), limit, precision) {
            Some(len) => {
                let outcome = destination.store_float(&cursor.rest()[..len]);
                cursor.advance(len);
                outcome
            }
            None => Outcome::Failed(nothing_matched(cursor)),
        },
        Specifier::String => convert_run(cursor, limit, destination, |b| !is_space(b)),
        Specifier::CharSet(set) => convert_run(cursor, limit, destination, |b| set.matches(b)),
        Specifier::Char => {
            if directive.width.is_some() {
                debug!("Field width ignored for conversion 'c'");
            }
            convert_char(cursor, destination)
        }
        Specifier::BytesRead => {
            destination.store_int(cursor.offset() as u64);
            Outcome::Matched
        }
        Specifier::LiteralPercent => {
            if cursor.eat(b'%') {
                Outcome::Matched
            } else {
                Outcome::Failed(match cursor.peek() {
                    Some(found) => StopReason::LiteralMismatch {
                        expected: b'%',
                        found,
                    },
                    None => StopReason::InputExhausted,
                })
            }
        }
    };
    if let Outcome::Failed(reason) = outcome {
        trace!(
            "Conversion '{}' failed at input offset {}: {}",
            directive.letter.escape_ascii(),
            cursor.offset(),
            reason
        );
        cursor.reset(mark);
    }
    Ok(outcome)
}

fn convert_int(
    cursor: &mut InputCursor,
    limit: usize,
    radix: Radix,
    signed: bool,
    destination: Destination,
) -> Outcome {
    // Only the decimal conversions accept a sign.
    let signed_form = radix == Radix::Decimal;
    match lex_integer(cursor.rest(), limit, radix, signed_form) {
        Some(lexeme) => {
            cursor.advance(lexeme.len);
            let bits = if signed {
                lexeme.as_signed() as u64
            } else {
                lexeme.as_unsigned()
            };
            destination.store_int(bits)
        }
        None => Outcome::Failed(nothing_matched(cursor)),
    }
}

/// `%s` and `%[...]`: the longest run of accepted characters within the width and the capacity.
fn convert_run<F>(cursor: &mut InputCursor, limit: usize, destination: Destination, accept: F) -> Outcome
where
    F: Fn(u8) -> bool,
{
    let (capacity, sink) = match destination {
        Destination::Text(sink) => (sink.budget(), Some(sink)),
        _ => (usize::MAX, None),
    };
    let len = cursor.measure_run(limit.min(capacity), &accept);
    if len == 0 {
        let unit = cursor.unit_len();
        let reason = match cursor.peek() {
            None => StopReason::InputExhausted,
            // The first character is acceptable but does not fit.
            Some(b) if accept(b) && unit > capacity && capacity < limit => {
                StopReason::CapacityExceeded
            }
            Some(_) => StopReason::ConversionMismatch,
        };
        return Outcome::Failed(reason);
    }
    let bytes = &cursor.rest()[..len];
    cursor.advance(len);
    match sink {
        Some(sink) => {
            sink.store(bytes);
            Outcome::Assigned
        }
        None => Outcome::Matched,
    }
}

/// `%c`: exactly one logical character, no whitespace skipping.
fn convert_char(cursor: &mut InputCursor, destination: Destination) -> Outcome {
    let unit = cursor.unit_len();
    if unit == 0 {
        return Outcome::Failed(StopReason::InputExhausted);
    }
    let bytes = &cursor.rest()[..unit];
    let outcome = match destination {
        Destination::Text(sink) if unit > sink.budget() => {
            return Outcome::Failed(StopReason::CapacityExceeded)
        }
        Destination::Text(sink) => {
            sink.store(bytes);
            Outcome::Assigned
        }
        _ => Outcome::Matched,
    };
    cursor.advance(unit);
    outcome
}
