/// This file contains table driven scan tests that verify the conversion rules of the scanner.
///
/// Each entry scans an input with a format and compares the number of assignments, the number
/// of consumed bytes, the reason of an early stop and the contents of all output slots.
use gbscan::{
    FormatError, OutputSlot, ScanErrorKind, ScannerBuilder, SlotKind, StopReason, TextMode,
};

/// The expected contents of one output slot. The slot is created with a zero value of the same
/// kind before the scan.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Out {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    /// A bounded buffer of the given capacity and its expected contents up to the terminator.
    Buf(usize, &'static [u8]),
    /// The value of a `.*` precision.
    Prec(usize),
}

/// Test data for the scan tests.
#[derive(Debug)]
struct TestData {
    format: &'static str,
    input: &'static [u8],
    assigned: usize,
    consumed: usize,
    stop_reason: Option<StopReason>,
    outputs: &'static [Out],
}

// Macros to easily create a TestData struct.

// The scan processes the whole format.
macro_rules! td {
    ($format:expr, $input:expr, $assigned:expr, $consumed:expr, $outputs:expr) => {
        TestData {
            format: $format,
            input: $input,
            assigned: $assigned,
            consumed: $consumed,
            stop_reason: None,
            outputs: $outputs,
        }
    };
}

// The scan stops early for the given reason.
macro_rules! ts {
    ($format:expr, $input:expr, $assigned:expr, $consumed:expr, $reason:expr, $outputs:expr) => {
        TestData {
            format: $format,
            input: $input,
            assigned: $assigned,
            consumed: $consumed,
            stop_reason: Some($reason),
            outputs: $outputs,
        }
    };
}

use Out::*;

const TEST_DATA: &[TestData] = &[
    // ---------------------------------------------------------------------------------------------
    // Basic scenarios
    td!("%d", b"123 abc", 1, 3, &[I32(123)]),
    td!("%[^#]", b"hello#world", 1, 5, &[Buf(16, b"hello")]),
    ts!("%d %f", b"42", 1, 2, StopReason::InputExhausted, &[I32(42), F32(0.0)]),
    td!("%5s", b"abcdefgh", 1, 5, &[Buf(16, b"abcde")]),
    td!("%c", b"\xC4\xE3 rest", 1, 2, &[Buf(4, b"\xC4\xE3")]),
    ts!(
        "%[",
        b"abc",
        0,
        0,
        StopReason::MalformedFormat(FormatError::UnterminatedScanSet { offset: 0 }),
        &[]
    ),
    // ---------------------------------------------------------------------------------------------
    // Integers and length modifiers
    td!("%i", b"  +17", 1, 5, &[I32(17)]),
    td!("%hhd", b"300", 1, 3, &[I8(44)]),
    td!("%hd", b"-70000", 1, 6, &[I16(-4464)]),
    td!("%ld", b"-9223372036854775808", 1, 20, &[I64(i64::MIN)]),
    td!(
        "%lld %I64u",
        b"99999999999999999999 18446744073709551615",
        2,
        41,
        &[I64(i64::MAX), U64(u64::MAX)]
    ),
    td!("%u", b"-1", 1, 2, &[U32(u32::MAX)]),
    td!("%hhu%hu", b"255 65535", 2, 9, &[U8(255), U16(65535)]),
    td!("%o", b"0778", 1, 3, &[U32(0o77)]),
    td!("%x %X", b"ff 0x1A", 2, 7, &[U32(255), U32(26)]),
    td!("%x", b"0xg", 1, 1, &[U32(0)]),
    td!("%p", b"0xdeadbeef", 1, 10, &[Usize(0xdeadbeef)]),
    td!("%3d%d", b"12345", 2, 5, &[I32(123), I32(45)]),
    td!("%5.1d", b"12345", 1, 5, &[I32(12345)]),
    ts!("%x", b"-1", 0, 0, StopReason::ConversionMismatch, &[U32(0)]),
    ts!("%d", b"   ", 0, 0, StopReason::InputExhausted, &[I32(0)]),
    // ---------------------------------------------------------------------------------------------
    // Floats
    td!(
        "%e %lg %G",
        b"1.5e2 -0.25 3E1",
        3,
        15,
        &[F32(150.0), F64(-0.25), F32(30.0)]
    ),
    td!("%f", b"2.5e", 1, 3, &[F32(2.5)]),
    td!("%.2f", b"1.23456", 1, 4, &[F32(1.23)]),
    // Rounded once to the width of the slot.
    td!("%f", b"1.00000017881393432617187499", 1, 28, &[F32(1.0000001)]),
    td!("%lf", b"1.00000017881393432617187499", 1, 28, &[F64(1.0000001788139343)]),
    td!("%.*lf%d", b"1.2345", 2, 6, &[Prec(1), F64(1.2), I32(345)]),
    td!("%4lf", b"123.456", 1, 4, &[F64(123.0)]),
    ts!("%f", b".e1", 0, 0, StopReason::ConversionMismatch, &[F32(0.0)]),
    // ---------------------------------------------------------------------------------------------
    // Suppression and the byte count
    td!("%*d %d", b"1 2", 1, 3, &[I32(2)]),
    td!("%*[a-z]%s", b"abc def", 1, 7, &[Buf(8, b"def")]),
    td!("%*.*f%d", b"1.25", 1, 4, &[Prec(1), I32(5)]),
    td!("%d%n", b"  42 x", 1, 4, &[I32(42), I32(4)]),
    td!("%*s%hhn %ln", b"ab  c", 0, 4, &[I8(2), I64(4)]),
    // ---------------------------------------------------------------------------------------------
    // Literals
    td!("%%%d", b"%5", 1, 2, &[I32(5)]),
    td!("%d %%", b"5   %", 1, 5, &[I32(5)]),
    ts!(
        "%%",
        b"x",
        0,
        0,
        StopReason::LiteralMismatch {
            expected: b'%',
            found: b'x'
        },
        &[]
    ),
    ts!(
        "%d,%d",
        b"7;8",
        1,
        1,
        StopReason::LiteralMismatch {
            expected: b',',
            found: b';'
        },
        &[I32(7), I32(0)]
    ),
    td!("a = %d", b"a=3", 1, 3, &[I32(3)]),
    ts!("x%d", b"", 0, 0, StopReason::InputExhausted, &[I32(0)]),
    // ---------------------------------------------------------------------------------------------
    // Strings and scan-sets
    ts!("%s", b"", 0, 0, StopReason::InputExhausted, &[Buf(4, b"")]),
    ts!("%s%d", b"abc", 1, 3, StopReason::InputExhausted, &[Buf(8, b"abc"), I32(0)]),
    td!("%s", b"  \tword\nnext", 1, 7, &[Buf(8, b"word")]),
    td!("%s", b"abcdef", 1, 3, &[Buf(4, b"abc")]),
    td!("%[a-z]%[0-9]", b"abc123!", 2, 6, &[Buf(8, b"abc"), Buf(8, b"123")]),
    td!("%[]x]", b"]x]y", 1, 3, &[Buf(8, b"]x]")]),
    td!("%[^]x]", b"ab]c", 1, 2, &[Buf(8, b"ab")]),
    td!("%[z-a]", b"-az-b", 1, 4, &[Buf(8, b"-az-")]),
    td!("%[a-]", b"a-a-b", 1, 4, &[Buf(8, b"a-a-")]),
    td!("%[^,],%[^,]", b" x y ,z", 2, 7, &[Buf(8, b" x y "), Buf(8, b"z")]),
    ts!("%[0-9]", b"abc", 0, 0, StopReason::ConversionMismatch, &[Buf(8, b"")]),
    ts!("%[a]", b" a", 0, 0, StopReason::ConversionMismatch, &[Buf(8, b"")]),
    // ---------------------------------------------------------------------------------------------
    // Single characters
    td!("%c%c", b"a\xC4\xE3", 2, 3, &[Buf(2, b"a"), Buf(3, b"\xC4\xE3")]),
    td!("%5c", b"abc", 1, 1, &[Buf(2, b"a")]),
    td!("%c", b" x", 1, 1, &[Buf(2, b" ")]),
    td!(" %c", b" x", 1, 2, &[Buf(2, b"x")]),
    ts!("%c", b"\xC4\xE3", 0, 0, StopReason::CapacityExceeded, &[Buf(1, b"")]),
    ts!("%c", b"\xC4\xE3", 0, 0, StopReason::CapacityExceeded, &[Buf(2, b"")]),
    ts!("%c", b"a", 0, 0, StopReason::CapacityExceeded, &[Buf(1, b"")]),
    // ---------------------------------------------------------------------------------------------
    // Double-byte characters are never split
    td!("%3s", b"\xC4\xE3\xBA\xC3", 1, 2, &[Buf(8, b"\xC4\xE3")]),
    td!("%s", b"\xC4\xE3\xBA\xC3", 1, 2, &[Buf(4, b"\xC4\xE3")]),
    td!("%s", b"a\xC4\xE3", 1, 1, &[Buf(3, b"a")]),
    td!("%s", b"x\xC4", 1, 2, &[Buf(4, b"x\xC4")]),
    td!("%[^,]", b"\xA1\x2C,", 1, 2, &[Buf(4, b"\xA1\x2C")]),
    ts!("%s", b"\xC4\xE3", 0, 0, StopReason::CapacityExceeded, &[Buf(2, b"")]),
    ts!("%1s", b"\xC4\xE3", 0, 0, StopReason::ConversionMismatch, &[Buf(8, b"")]),
    // ---------------------------------------------------------------------------------------------
    // Malformed formats
    ts!(
        "%5q",
        b"1",
        0,
        0,
        StopReason::MalformedFormat(FormatError::UnknownSpecifier {
            offset: 2,
            letter: b'q'
        }),
        &[]
    ),
    ts!(
        "%d %5l",
        b"1 2",
        1,
        2,
        StopReason::MalformedFormat(FormatError::IncompleteDirective { offset: 3 }),
        &[I32(1)]
    ),
];

/// The storage of one output slot during a scan.
enum Storage {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Buf(Vec<u8>),
    Prec(usize),
}

impl Storage {
    fn new(out: &Out) -> Self {
        match out {
            I8(_) => Storage::I8(0),
            I16(_) => Storage::I16(0),
            I32(_) => Storage::I32(0),
            I64(_) => Storage::I64(0),
            U8(_) => Storage::U8(0),
            U16(_) => Storage::U16(0),
            U32(_) => Storage::U32(0),
            U64(_) => Storage::U64(0),
            Usize(_) => Storage::Usize(0),
            F32(_) => Storage::F32(0.0),
            F64(_) => Storage::F64(0.0),
            Buf(capacity, _) => Storage::Buf(vec![0; *capacity]),
            Prec(value) => Storage::Prec(*value),
        }
    }

    fn slot(&mut self) -> OutputSlot<'_> {
        match self {
            Storage::I8(v) => OutputSlot::I8(v),
            Storage::I16(v) => OutputSlot::I16(v),
            Storage::I32(v) => OutputSlot::I32(v),
            Storage::I64(v) => OutputSlot::I64(v),
            Storage::U8(v) => OutputSlot::U8(v),
            Storage::U16(v) => OutputSlot::U16(v),
            Storage::U32(v) => OutputSlot::U32(v),
            Storage::U64(v) => OutputSlot::U64(v),
            Storage::Usize(v) => OutputSlot::Usize(v),
            Storage::F32(v) => OutputSlot::F32(v),
            Storage::F64(v) => OutputSlot::F64(v),
            Storage::Buf(v) => OutputSlot::Buffer(v.as_mut_slice()),
            Storage::Prec(v) => OutputSlot::Precision(*v),
        }
    }

    /// Converts the storage back for comparison. Buffers are cut at the first terminator, which
    /// must exist.
    fn contents(&self, expected: &Out) -> Out {
        match (self, expected) {
            (Storage::I8(v), _) => I8(*v),
            (Storage::I16(v), _) => I16(*v),
            (Storage::I32(v), _) => I32(*v),
            (Storage::I64(v), _) => I64(*v),
            (Storage::U8(v), _) => U8(*v),
            (Storage::U16(v), _) => U16(*v),
            (Storage::U32(v), _) => U32(*v),
            (Storage::U64(v), _) => U64(*v),
            (Storage::Usize(v), _) => Usize(*v),
            (Storage::F32(v), _) => F32(*v),
            (Storage::F64(v), _) => F64(*v),
            (Storage::Buf(v), Buf(capacity, expected)) => {
                let end = v
                    .iter()
                    .position(|b| *b == 0)
                    .unwrap_or_else(|| panic!("buffer {:?} is not terminated", v));
                if &v[..end] == *expected {
                    Buf(*capacity, *expected)
                } else {
                    panic!("buffer contents {:?} != {:?}", &v[..end], expected)
                }
            }
            (Storage::Buf(_), _) => unreachable!(),
            (Storage::Prec(v), _) => Prec(*v),
        }
    }
}

#[test]
fn scan_test() {
    let _ = env_logger::builder().is_test(true).try_init();
    let scanner = ScannerBuilder::new().strict_diagnostics(true).build();
    for (test_number, test_data) in TEST_DATA.iter().enumerate() {
        let mut storage = test_data
            .outputs
            .iter()
            .map(Storage::new)
            .collect::<Vec<_>>();
        let mut slots = storage.iter_mut().map(Storage::slot).collect::<Vec<_>>();
        let result = scanner
            .scan(test_data.input, test_data.format, &mut slots)
            .unwrap_or_else(|e| panic!("#{} {:?}: {}", test_number, test_data, e));
        drop(slots);

        assert_eq!(
            result.assigned_count(),
            test_data.assigned,
            "#{} Assigned count of {:?}",
            test_number,
            test_data
        );
        assert_eq!(
            result.consumed(),
            test_data.consumed,
            "#{} Consumed bytes of {:?}",
            test_number,
            test_data
        );
        assert_eq!(
            result.stop_reason(),
            test_data.stop_reason,
            "#{} Stop reason of {:?}",
            test_number,
            test_data
        );
        assert_eq!(
            result.diagnostic().is_some(),
            test_data.stop_reason.is_some(),
            "#{} Diagnostic of {:?}",
            test_number,
            test_data
        );
        for (index, (stored, expected)) in storage.iter().zip(test_data.outputs).enumerate() {
            assert_eq!(
                stored.contents(expected),
                *expected,
                "#{} Slot #{} of {:?}",
                test_number,
                index,
                test_data
            );
        }
    }
}

#[test]
fn single_byte_mode() {
    let _ = env_logger::builder().is_test(true).try_init();
    let scanner = ScannerBuilder::new().text_mode(TextMode::SingleByte).build();
    let mut buf = [0u8; 2];
    let result = scanner
        .scan(b"\xC4\xE3", "%s", &mut [OutputSlot::Buffer(&mut buf)])
        .unwrap();
    assert_eq!(result.consumed(), 1);
    assert_eq!(buf, [0xC4, 0]);
}

#[test]
fn unbounded_text_slot() {
    let _ = env_logger::builder().is_test(true).try_init();
    let scanner = ScannerBuilder::new().bounded_output(false).build();
    let mut word = b"previous contents".to_vec();
    let mut ch = Vec::new();
    let result = scanner
        .scan(
            b"\xC4\xE3\xBA\xC3abc \xB0\xA1",
            "%s %c",
            &mut [OutputSlot::Text(&mut word), OutputSlot::Text(&mut ch)],
        )
        .unwrap();
    assert_eq!(result.assigned_count(), 2);
    assert_eq!(word, b"\xC4\xE3\xBA\xC3abc");
    assert_eq!(ch, b"\xB0\xA1");
}

#[test]
fn missing_slot() {
    let mut a = 0i32;
    let err = gbscan::scan("1 2", "%d %d", &mut [OutputSlot::I32(&mut a)]).unwrap_err();
    assert!(matches!(err.kind(), ScanErrorKind::MissingSlot { index: 1 }));
    // The first directive completed before the missing slot was detected.
    assert_eq!(a, 1);
}

#[test]
fn slot_mismatch_before_consuming() {
    let mut a = 0i32;
    let mut b = 0i32;
    let err = gbscan::scan(
        "1 2",
        "%d %ld",
        &mut [OutputSlot::I32(&mut a), OutputSlot::I32(&mut b)],
    )
    .unwrap_err();
    assert!(matches!(
        err.kind(),
        ScanErrorKind::SlotMismatch {
            index: 1,
            expected: "i64",
            found: SlotKind::I32
        }
    ));
    assert_eq!((a, b), (1, 0));
}

#[test]
fn precision_slot_required() {
    let mut f = 0f32;
    let err = gbscan::scan("1.5", "%.*f", &mut [OutputSlot::F32(&mut f)]).unwrap_err();
    assert!(matches!(
        err.kind(),
        ScanErrorKind::SlotMismatch {
            index: 0,
            expected: "a precision",
            found: SlotKind::F32
        }
    ));
}

#[test]
fn zero_capacity_and_unbounded() {
    let mut empty: [u8; 0] = [];
    let err = gbscan::scan("abc", "%s", &mut [OutputSlot::Buffer(&mut empty)]).unwrap_err();
    assert!(matches!(err.kind(), ScanErrorKind::ZeroCapacity { index: 0 }));

    let mut text = Vec::new();
    let err = gbscan::scan("abc", "%[a-c]", &mut [OutputSlot::Text(&mut text)]).unwrap_err();
    assert!(matches!(err.kind(), ScanErrorKind::UnboundedSlot { index: 0 }));
}

#[test]
fn silent_policy_has_no_diagnostic() {
    let mut a = 0i32;
    let result = gbscan::scan("x", "%d", &mut [OutputSlot::I32(&mut a)]).unwrap();
    assert!(result.terminated_early());
    assert_eq!(result.stop_reason(), Some(StopReason::ConversionMismatch));
    assert!(result.diagnostic().is_none());
}

#[test]
fn strict_diagnostic() {
    let _ = env_logger::builder().is_test(true).try_init();
    let scanner = ScannerBuilder::new().strict_diagnostics(true).build();
    let mut a = 0i32;
    let mut b = 0i32;
    let result = scanner
        .scan(
            "10 apples",
            "%d %d",
            &mut [OutputSlot::I32(&mut a), OutputSlot::I32(&mut b)],
        )
        .unwrap();
    let diagnostic = result.diagnostic().unwrap();
    assert_eq!(diagnostic.position.input(), 3);
    assert_eq!(diagnostic.position.format(), 3);
    assert_eq!(diagnostic.input_byte, Some(b'a'));
    assert_eq!(diagnostic.format_byte, Some(b'%'));
    assert_eq!(
        diagnostic.to_string(),
        "Conversion mismatch: input[3]='a', format[3]='%'"
    );
}
