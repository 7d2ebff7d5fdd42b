//! Value categories and the policies they select.

use serde::{Deserialize, Serialize};

/// Epsilon of the x87 80-bit extended format (2^-63).
pub const LONG_DOUBLE_EPSILON: f64 = 1.084_202_172_485_504_4e-19;

/// The static classification of a value's representation family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueCategory {
    SignedInteger,
    UnsignedInteger,
    Float32,
    Float64,
    ExtendedFloat,
    #[serde(rename = "cstring")]
    CString,
    Boolean,
    Opaque,
}

impl ValueCategory {
    pub const ALL: [ValueCategory; 8] = [
        ValueCategory::SignedInteger,
        ValueCategory::UnsignedInteger,
        ValueCategory::Float32,
        ValueCategory::Float64,
        ValueCategory::ExtendedFloat,
        ValueCategory::CString,
        ValueCategory::Boolean,
        ValueCategory::Opaque,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ValueCategory::SignedInteger => "signed-integer",
            ValueCategory::UnsignedInteger => "unsigned-integer",
            ValueCategory::Float32 => "float32",
            ValueCategory::Float64 => "float64",
            ValueCategory::ExtendedFloat => "extended-float",
            ValueCategory::CString => "cstring",
            ValueCategory::Boolean => "boolean",
            ValueCategory::Opaque => "opaque",
        }
    }

    /// Accepts the kebab-case name or a short alias (`int`, `uint`, `f32`, `str`...).
    pub fn from_name(name: &str) -> Option<ValueCategory> {
        let category = match name.to_ascii_lowercase().as_str() {
            "signed-integer" | "int" | "signed" | "i64" => ValueCategory::SignedInteger,
            "unsigned-integer" | "uint" | "unsigned" | "u64" => ValueCategory::UnsignedInteger,
            "float32" | "float" | "f32" => ValueCategory::Float32,
            "float64" | "double" | "f64" => ValueCategory::Float64,
            "extended-float" | "long-double" | "extended" => ValueCategory::ExtendedFloat,
            "cstring" | "string" | "str" => ValueCategory::CString,
            "boolean" | "bool" => ValueCategory::Boolean,
            "opaque" | "pointer" | "ptr" => ValueCategory::Opaque,
            _ => return None,
        };
        Some(category)
    }

    pub fn comparison(&self) -> ComparisonPolicy {
        ComparisonPolicy::for_category(*self)
    }

    pub fn format(&self) -> FormatPolicy {
        FormatPolicy::for_category(*self)
    }

    pub fn is_floating(&self) -> bool {
        matches!(
            self,
            ValueCategory::Float32 | ValueCategory::Float64 | ValueCategory::ExtendedFloat
        )
    }
}

impl std::fmt::Display for ValueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The equality test a category uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", content = "threshold", rename_all = "kebab-case")]
pub enum ComparisonPolicy {
    /// Raw bit pattern / address.
    BitwiseEqual,
    /// `|a - b| < threshold`, threshold fixed per floating width.
    EpsilonEqual(f64),
    /// Content, not address.
    ByteStringEqual,
}

impl ComparisonPolicy {
    pub fn for_category(category: ValueCategory) -> ComparisonPolicy {
        match category {
            ValueCategory::SignedInteger
            | ValueCategory::UnsignedInteger
            | ValueCategory::Boolean
            | ValueCategory::Opaque => ComparisonPolicy::BitwiseEqual,
            ValueCategory::Float32 => ComparisonPolicy::EpsilonEqual(f32::EPSILON as f64),
            ValueCategory::Float64 => ComparisonPolicy::EpsilonEqual(f64::EPSILON),
            ValueCategory::ExtendedFloat => ComparisonPolicy::EpsilonEqual(LONG_DOUBLE_EPSILON),
            ValueCategory::CString => ComparisonPolicy::ByteStringEqual,
        }
    }

    pub fn threshold(&self) -> Option<f64> {
        match self {
            ComparisonPolicy::EpsilonEqual(threshold) => Some(*threshold),
            _ => None,
        }
    }
}

impl std::fmt::Display for ComparisonPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComparisonPolicy::BitwiseEqual => write!(f, "bitwise"),
            ComparisonPolicy::EpsilonEqual(threshold) => write!(f, "epsilon < {threshold:e}"),
            ComparisonPolicy::ByteStringEqual => write!(f, "byte-string"),
        }
    }
}

/// How a category is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatPolicy {
    /// Base-10 integer. A `char` prints as its code point.
    Decimal,
    /// Shortest text that parses back to the same float.
    ShortestRoundTrip,
    /// The string content with `\` doubled and non-UTF-8 bytes as `\xNN`.
    Text,
    /// `true` / `false`.
    Keyword,
    /// Hexadecimal address. Lossy.
    Address,
}

impl FormatPolicy {
    pub fn for_category(category: ValueCategory) -> FormatPolicy {
        match category {
            ValueCategory::SignedInteger | ValueCategory::UnsignedInteger => FormatPolicy::Decimal,
            ValueCategory::Float32 | ValueCategory::Float64 | ValueCategory::ExtendedFloat => {
                FormatPolicy::ShortestRoundTrip
            }
            ValueCategory::CString => FormatPolicy::Text,
            ValueCategory::Boolean => FormatPolicy::Keyword,
            ValueCategory::Opaque => FormatPolicy::Address,
        }
    }

    pub fn round_trips(&self) -> bool {
        !matches!(self, FormatPolicy::Address)
    }
}

impl std::fmt::Display for FormatPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FormatPolicy::Decimal => "decimal",
            FormatPolicy::ShortestRoundTrip => "shortest-round-trip",
            FormatPolicy::Text => "text",
            FormatPolicy::Keyword => "keyword",
            FormatPolicy::Address => "address",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for category in ValueCategory::ALL {
            assert_eq!(ValueCategory::from_name(category.name()), Some(category));
        }
        assert_eq!(ValueCategory::from_name("double"), Some(ValueCategory::Float64));
        assert_eq!(ValueCategory::from_name("complex"), None);
    }

    #[test]
    fn only_floats_use_epsilon() {
        for category in ValueCategory::ALL {
            let epsilon = category.comparison().threshold().is_some();
            assert_eq!(epsilon, category.is_floating(), "{category}");
        }
    }

    #[test]
    fn only_opaque_is_lossy() {
        for category in ValueCategory::ALL {
            let lossy = !category.format().round_trips();
            assert_eq!(lossy, category == ValueCategory::Opaque, "{category}");
        }
    }

    #[test]
    fn serde_names_are_kebab_case() {
        let json = serde_json::to_string(&ValueCategory::ExtendedFloat).expect("serialize");
        assert_eq!(json, "\"extended-float\"");
        let back: ValueCategory = serde_json::from_str("\"cstring\"").expect("deserialize");
        assert_eq!(back, ValueCategory::CString);
    }
}
