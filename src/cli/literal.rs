//! Command-line literals, parsed per category.
//!
//! The library dispatches on static types; the CLI only learns the category
//! at runtime, so each parsed literal carries a concrete Rust type and every
//! operation goes back through the typed `equal` / `tostring` entry points.

use std::ffi::CString;

use crate::dispatch::{equal, parse_text, tostring, LongDouble, ValueCategory};
use crate::err_ctx;
use crate::errors::{PrettyError, Span};

/// The typed value of a literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Signed(i64),
    Unsigned(u64),
    Float32(f32),
    Float64(f64),
    Extended(LongDouble),
    Text(CString),
    Boolean(bool),
    Address(usize),
}

/// A literal together with the text it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLiteral {
    pub category: ValueCategory,
    pub source: String,
    pub value: Literal,
}

/// Parses a category name, accepting the aliases of [`ValueCategory::from_name`].
pub fn parse_category(name: &str) -> Result<ValueCategory, PrettyError> {
    ValueCategory::from_name(name).ok_or_else(|| {
        let names: Vec<_> = ValueCategory::ALL.iter().map(|c| c.name()).collect();
        err_ctx!(
            Parse,
            format!("unknown category '{name}'"),
            name,
            Span::covering(name),
            format!("expected one of: {}", names.join(", "))
        )
    })
}

impl ParsedLiteral {
    pub fn parse(category: ValueCategory, text: &str) -> Result<ParsedLiteral, PrettyError> {
        let value = match category {
            ValueCategory::SignedInteger => text.parse().map(Literal::Signed).ok(),
            ValueCategory::UnsignedInteger => text.parse().map(Literal::Unsigned).ok(),
            ValueCategory::Float32 => text.parse().map(Literal::Float32).ok(),
            ValueCategory::Float64 => text.parse().map(Literal::Float64).ok(),
            ValueCategory::ExtendedFloat => {
                text.parse::<f64>().map(|x| Literal::Extended(LongDouble(x))).ok()
            }
            ValueCategory::CString => parse_text(text)
                .and_then(|bytes| CString::new(bytes).ok())
                .map(Literal::Text),
            ValueCategory::Boolean => text.parse().map(Literal::Boolean).ok(),
            ValueCategory::Opaque => parse_address(text).map(Literal::Address),
        };
        match value {
            Some(value) => Ok(ParsedLiteral {
                category,
                source: text.to_string(),
                value,
            }),
            None => Err(err_ctx!(
                Parse,
                format!("'{text}' is not a {category} literal"),
                text,
                Span::covering(text),
                literal_help(category)
            )),
        }
    }

    /// Equality under the category's comparison policy.
    pub fn equals(&self, other: &ParsedLiteral) -> bool {
        match (&self.value, &other.value) {
            (Literal::Signed(a), Literal::Signed(b)) => equal(a, b),
            (Literal::Unsigned(a), Literal::Unsigned(b)) => equal(a, b),
            (Literal::Float32(a), Literal::Float32(b)) => equal(a, b),
            (Literal::Float64(a), Literal::Float64(b)) => equal(a, b),
            (Literal::Extended(a), Literal::Extended(b)) => equal(a, b),
            (Literal::Text(a), Literal::Text(b)) => equal(a, b),
            (Literal::Boolean(a), Literal::Boolean(b)) => equal(a, b),
            (Literal::Address(a), Literal::Address(b)) => {
                equal(&(*a as *const u8), &(*b as *const u8))
            }
            _ => false,
        }
    }

    /// Text under the category's format policy.
    pub fn to_text(&self) -> String {
        match &self.value {
            Literal::Signed(x) => tostring(x),
            Literal::Unsigned(x) => tostring(x),
            Literal::Float32(x) => tostring(x),
            Literal::Float64(x) => tostring(x),
            Literal::Extended(x) => tostring(x),
            Literal::Text(x) => tostring(x),
            Literal::Boolean(x) => tostring(x),
            Literal::Address(x) => tostring(&(*x as *const u8)),
        }
    }
}

fn parse_address(text: &str) -> Option<usize> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))?;
    usize::from_str_radix(digits, 16).ok()
}

fn literal_help(category: ValueCategory) -> &'static str {
    match category {
        ValueCategory::SignedInteger => "expected a base-10 integer such as -42",
        ValueCategory::UnsignedInteger => "expected a non-negative base-10 integer",
        ValueCategory::Float32 | ValueCategory::Float64 | ValueCategory::ExtendedFloat => {
            "expected a decimal or scientific number such as 0.1 or 1e-7"
        }
        ValueCategory::CString => {
            "strings may not contain NUL; write `\\\\` for a backslash and `\\xNN` for a raw byte"
        }
        ValueCategory::Boolean => "expected `true` or `false`",
        ValueCategory::Opaque => "expected a hexadecimal address such as 0x1000",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(category: ValueCategory, text: &str) -> ParsedLiteral {
        ParsedLiteral::parse(category, text).expect("valid literal")
    }

    #[test]
    fn floats_use_the_category_epsilon() {
        let a = lit(ValueCategory::Float32, "0.30000001");
        let b = lit(ValueCategory::Float32, "0.3");
        assert!(a.equals(&b));
        let a = lit(ValueCategory::Float64, "1.0");
        let b = lit(ValueCategory::Float64, "1.001");
        assert!(!a.equals(&b));
    }

    #[test]
    fn strings_compare_by_content() {
        let a = lit(ValueCategory::CString, "hello");
        assert!(a.equals(&lit(ValueCategory::CString, "hello")));
        assert!(!a.equals(&lit(ValueCategory::CString, "world")));
        assert_eq!(a.to_text(), "hello");
    }

    #[test]
    fn strings_carry_raw_bytes() {
        let raw = lit(ValueCategory::CString, "f\\xffo");
        assert_eq!(raw.value, Literal::Text(CString::new(vec![0x66, 0xff, 0x6f]).expect("no nul")));
        assert_eq!(raw.to_text(), "f\\xffo");
        assert!(!raw.equals(&lit(ValueCategory::CString, "f\\xfeo")));
        assert!(ParsedLiteral::parse(ValueCategory::CString, "nul\\x00").is_err());
        assert!(ParsedLiteral::parse(ValueCategory::CString, "dangling\\").is_err());
    }

    #[test]
    fn addresses_round_trip_through_hex() {
        let a = lit(ValueCategory::Opaque, "0x1000");
        assert_eq!(a.to_text(), "0x1000");
        assert!(a.equals(&lit(ValueCategory::Opaque, "0X1000")));
    }

    #[test]
    fn bad_literals_point_at_the_text() {
        use miette::Diagnostic;
        let err = ParsedLiteral::parse(ValueCategory::UnsignedInteger, "-3").expect_err("negative");
        assert_eq!(err.code().map(|c| c.to_string()).as_deref(), Some("pretty::parse"));
        assert!(err.to_string().contains("unsigned-integer"));
        assert!(err.labels().is_some());
    }

    #[test]
    fn category_aliases_resolve() {
        assert_eq!(parse_category("f64").expect("alias"), ValueCategory::Float64);
        assert!(parse_category("decimal").is_err());
    }
}
