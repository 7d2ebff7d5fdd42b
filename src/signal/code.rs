//! Sentinel error codes.
//!
//! Numbering follows the Linux `errno` values so that codes captured from the
//! operating system line up with the named constants.

use serde::{Deserialize, Serialize};

/// A sentinel error code. Zero means "no error".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(pub i32);

impl ErrorCode {
    pub const NONE: ErrorCode = ErrorCode(0);
    pub const NOERROR: ErrorCode = ErrorCode::NONE;
    pub const NOERR: ErrorCode = ErrorCode::NONE;

    pub const PERMISSION: ErrorCode = ErrorCode(1);
    pub const NOT_FOUND: ErrorCode = ErrorCode(2);
    pub const IO: ErrorCode = ErrorCode(5);
    pub const OUT_OF_MEMORY: ErrorCode = ErrorCode(12);
    pub const INVALID: ErrorCode = ErrorCode(22);
    /// Argument outside the domain of a mathematical function (`EDOM`).
    pub const DOMAIN: ErrorCode = ErrorCode(33);
    /// Result not representable: pole error or overflow (`ERANGE`).
    pub const RANGE: ErrorCode = ErrorCode(34);
    pub const ILLEGAL_SEQUENCE: ErrorCode = ErrorCode(84);

    /// Every code with a name, in ascending order.
    pub const KNOWN: [ErrorCode; 9] = [
        ErrorCode::NONE,
        ErrorCode::PERMISSION,
        ErrorCode::NOT_FOUND,
        ErrorCode::IO,
        ErrorCode::OUT_OF_MEMORY,
        ErrorCode::INVALID,
        ErrorCode::DOMAIN,
        ErrorCode::RANGE,
        ErrorCode::ILLEGAL_SEQUENCE,
    ];

    pub const fn new(raw: i32) -> Self {
        ErrorCode(raw)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    pub const fn is_error(self) -> bool {
        self.0 != 0
    }

    /// The conventional C name of the code, if it is one of the named constants.
    pub fn name(self) -> Option<&'static str> {
        let name = match self.0 {
            0 => "NOERROR",
            1 => "EPERM",
            2 => "ENOENT",
            5 => "EIO",
            12 => "ENOMEM",
            22 => "EINVAL",
            33 => "EDOM",
            34 => "ERANGE",
            84 => "EILSEQ",
            _ => return None,
        };
        Some(name)
    }

    pub fn description(self) -> &'static str {
        match self.0 {
            0 => "no error",
            1 => "operation not permitted",
            2 => "no such file or directory",
            5 => "input/output error",
            12 => "cannot allocate memory",
            22 => "invalid argument",
            33 => "numerical argument out of domain",
            34 => "numerical result out of range",
            84 => "invalid or incomplete multibyte or wide character",
            _ => "unknown error",
        }
    }

    /// Looks a code up by its C name (`EDOM`, `erange`, `NOERR`) or its number.
    pub fn parse(text: &str) -> Option<ErrorCode> {
        let trimmed = text.trim();
        if let Ok(raw) = trimmed.parse::<i32>() {
            return Some(ErrorCode(raw));
        }
        let upper = trimmed.to_ascii_uppercase();
        if upper == "NOERR" {
            return Some(ErrorCode::NONE);
        }
        ErrorCode::KNOWN
            .iter()
            .copied()
            .find(|code| code.name() == Some(upper.as_str()))
    }
}

impl From<i32> for ErrorCode {
    fn from(raw: i32) -> Self {
        ErrorCode(raw)
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, self.description()),
            None => write!(f, "{} ({})", self.0, self.description()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_are_the_clear_code() {
        assert_eq!(ErrorCode::NOERROR, ErrorCode::NONE);
        assert_eq!(ErrorCode::NOERR, ErrorCode::default());
        assert!(!ErrorCode::NONE.is_error());
        assert!(ErrorCode::DOMAIN.is_error());
    }

    #[test]
    fn parse_accepts_names_and_numbers() {
        assert_eq!(ErrorCode::parse("EDOM"), Some(ErrorCode::DOMAIN));
        assert_eq!(ErrorCode::parse("erange"), Some(ErrorCode::RANGE));
        assert_eq!(ErrorCode::parse("noerr"), Some(ErrorCode::NONE));
        assert_eq!(ErrorCode::parse("84"), Some(ErrorCode::ILLEGAL_SEQUENCE));
        assert_eq!(ErrorCode::parse("EWHATEVER"), None);
    }

    #[test]
    fn display_names_known_codes() {
        assert_eq!(
            ErrorCode::DOMAIN.to_string(),
            "EDOM (numerical argument out of domain)"
        );
        assert_eq!(ErrorCode::new(999).to_string(), "999 (unknown error)");
    }
}
