//! Format policies and type-directed output.

use std::ffi::{CStr, CString};
use std::ptr::NonNull;

use super::compare::{Categorized, LongDouble, Opaque};

// ============================================================================
// TO TEXT
// ============================================================================

/// Stringification under the format policy of `Self`'s category.
///
/// The returned text is owned by the caller. It parses back to an equal value
/// for every category except `Opaque`.
pub trait ToText: Categorized {
    fn to_text(&self) -> String;
}

impl<T: ToText + ?Sized> ToText for &T {
    fn to_text(&self) -> String {
        (**self).to_text()
    }
}

macro_rules! display_text {
    ($($ty:ty),+) => {
        $(
            impl ToText for $ty {
                fn to_text(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

display_text!(i8, i16, i32, i64, i128, isize);
display_text!(u8, u16, u32, u64, u128, usize);
display_text!(bool);

// A character is an unsigned code unit and prints as its code point.
impl ToText for char {
    fn to_text(&self) -> String {
        u32::from(*self).to_string()
    }
}

// Plain notation for ordinary magnitudes, scientific outside them. Both are the
// shortest digits that parse back to the same value.
macro_rules! float_text {
    ($ty:ty, $get:expr) => {
        impl ToText for $ty {
            fn to_text(&self) -> String {
                let get: fn(&$ty) -> f64 = $get;
                let value = get(self);
                let magnitude = value.abs();
                if magnitude != 0.0 && magnitude.is_finite() && !(1e-5..1e16).contains(&magnitude) {
                    format!("{:e}", *self)
                } else {
                    format!("{}", *self)
                }
            }
        }
    };
}

impl std::fmt::Display for LongDouble {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::fmt::LowerExp for LongDouble {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::LowerExp::fmt(&self.0, f)
    }
}

float_text!(f32, |x| *x as f64);
float_text!(f64, |x| *x);
float_text!(LongDouble, |x| x.0);

// ============================================================================
// BYTE STRINGS: escaped text
// ============================================================================

/// Writes `bytes` as text that [`parse_text`] turns back into the same bytes.
///
/// UTF-8 runs are copied through with `\` doubled. Every byte outside a valid
/// UTF-8 sequence is written as `\xNN`.
pub fn escape_bytes(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        for c in chunk.valid().chars() {
            if c == '\\' {
                text.push_str("\\\\");
            } else {
                text.push(c);
            }
        }
        for byte in chunk.invalid() {
            text.push_str(&format!("\\x{byte:02x}"));
        }
    }
    text
}

/// Inverse of [`escape_bytes`]. `None` on a dangling or unknown escape.
pub fn parse_text(text: &str) -> Option<Vec<u8>> {
    let mut bytes = Vec::with_capacity(text.len());
    let mut rest = text.as_bytes();
    while let Some((&byte, tail)) = rest.split_first() {
        if byte != b'\\' {
            bytes.push(byte);
            rest = tail;
            continue;
        }
        match tail {
            [b'\\', tail @ ..] => {
                bytes.push(b'\\');
                rest = tail;
            }
            [b'x', hi, lo, tail @ ..] => {
                bytes.push((hex_digit(*hi)? << 4) | hex_digit(*lo)?);
                rest = tail;
            }
            _ => return None,
        }
    }
    Some(bytes)
}

fn hex_digit(byte: u8) -> Option<u8> {
    char::from(byte).to_digit(16).map(|digit| digit as u8)
}

impl ToText for str {
    fn to_text(&self) -> String {
        escape_bytes(self.as_bytes())
    }
}

impl ToText for String {
    fn to_text(&self) -> String {
        escape_bytes(self.as_bytes())
    }
}

impl ToText for CStr {
    fn to_text(&self) -> String {
        escape_bytes(self.to_bytes())
    }
}

impl ToText for CString {
    fn to_text(&self) -> String {
        escape_bytes(self.as_bytes())
    }
}

impl<T: ?Sized> ToText for *const T {
    fn to_text(&self) -> String {
        format!("{:p}", *self)
    }
}

impl<T: ?Sized> ToText for *mut T {
    fn to_text(&self) -> String {
        format!("{:p}", *self)
    }
}

impl<T: ?Sized> ToText for NonNull<T> {
    fn to_text(&self) -> String {
        format!("{:p}", *self)
    }
}

impl<T: ?Sized> ToText for Opaque<'_, T> {
    fn to_text(&self) -> String {
        format!("{:p}", self.0 as *const T)
    }
}

// ============================================================================
// OUTPUT SINKS
// ============================================================================

/// Destination for `show`, injectable so output is testable.
pub trait OutputSink {
    fn emit(&mut self, text: &str);
}

/// Discards everything.
pub struct NullSink;

impl OutputSink for NullSink {
    fn emit(&mut self, _text: &str) {}
}

/// Collects output into a String, one emitted line per line.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    pub buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl OutputSink for OutputBuffer {
    fn emit(&mut self, text: &str) {
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(text);
    }
}

/// Emits `value` to `sink` under its category's format policy.
pub fn show<T: ToText + ?Sized>(sink: &mut dyn OutputSink, value: &T) {
    sink.emit(&value.to_text());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_round_trip() {
        for value in [0.1f64, -0.0, 1.0 / 3.0, 1e300, 5e-324, 123456.789, f64::INFINITY] {
            let text = value.to_text();
            let back: f64 = text.parse().expect("parses");
            assert_eq!(back.to_bits(), value.to_bits(), "{text}");
        }
        let small = 1.0e-7f32;
        assert_eq!(small.to_text(), "1e-7");
        assert_eq!(small.to_text().parse::<f32>().ok(), Some(small));
    }

    #[test]
    fn nan_has_text() {
        assert_eq!(f64::NAN.to_text(), "NaN");
        assert!(f64::NAN.to_text().parse::<f64>().expect("parses").is_nan());
    }

    #[test]
    fn scalars_and_strings() {
        assert_eq!((-42i64).to_text(), "-42");
        assert_eq!('x'.to_text(), "120");
        assert_eq!('é'.to_text().parse::<u32>().ok().and_then(char::from_u32), Some('é'));
        assert_eq!(true.to_text(), "true");
        assert_eq!("hi".to_text(), "hi");
        let c = CString::new("raw").expect("no interior nul");
        assert_eq!(c.to_text(), "raw");
        assert_eq!(LongDouble(2.5).to_text(), "2.5");
    }

    #[test]
    fn byte_strings_round_trip() {
        let raw = CString::new(vec![0x66, 0xff, 0x6f]).expect("no interior nul");
        let text = raw.to_text();
        assert_eq!(text, "f\\xffo");
        let back = CString::new(parse_text(&text).expect("parses")).expect("no interior nul");
        assert!(crate::dispatch::equal(&back, &raw));

        let a = CString::new(vec![0xff]).expect("no interior nul");
        let b = CString::new(vec![0xfe]).expect("no interior nul");
        assert_ne!(a.to_text(), b.to_text());

        assert_eq!("a\\b".to_text(), "a\\\\b");
        assert_eq!(parse_text("a\\\\b").as_deref(), Some(&b"a\\b"[..]));
        assert_eq!("caf\u{e9}".to_text(), "caf\u{e9}");
    }

    #[test]
    fn bad_escapes_do_not_parse() {
        assert_eq!(parse_text("tail\\"), None);
        assert_eq!(parse_text("\\q"), None);
        assert_eq!(parse_text("\\xg0"), None);
        assert_eq!(parse_text("\\x4"), None);
        assert_eq!(parse_text("\\x+f"), None);
    }

    #[test]
    fn opaque_prints_an_address() {
        let value = 7u8;
        let text = Opaque::of(&value).to_text();
        assert!(text.starts_with("0x"), "{text}");
        assert_eq!(
            usize::from_str_radix(&text[2..], 16).ok(),
            Some(Opaque::of(&value).address())
        );
    }

    #[test]
    fn show_writes_lines_to_the_sink() {
        let mut out = OutputBuffer::new();
        show(&mut out, &1);
        show(&mut out, "two");
        show(&mut out, &false);
        assert_eq!(out.as_str(), "1\ntwo\nfalse");
        show(&mut NullSink, &3.5);
    }
}
