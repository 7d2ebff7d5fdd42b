//! # Pretty Diagnostics
//!
//! This module defines the unified, `miette`-based diagnostic type for the crate.
//! Every failure the library or the CLI reports is a [`PrettyError`].
//!
//! # Error Construction Macros
//!
//! - **Use `err_msg!` for message-only errors.**
//!   - `err_msg!(Parse, "unexpected literal '{}'", text)`
//!
//! - **Use `err_ctx!` for errors pointing into a piece of source text.**
//!   - `err_ctx!(Parse, "not an integer", src, span)`
//!   - `err_ctx!(Parse, "not an integer", src, span, help)`
//!
//! Contract violations of the core constructs (mismatched categories, skipped
//! releases, clobbered error slots) are ruled out by the type system and have no
//! variant here. What remains is what can genuinely fail at runtime: parsing
//! literals, declared iteration bounds, zero steps, uncaught error codes,
//! configuration and I/O.

use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::signal::ErrorCode;

pub type SourceArc = Arc<NamedSource<String>>;

/// Byte range into a source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A span covering the whole of `text`.
    pub fn covering(text: &str) -> Self {
        Self {
            start: 0,
            end: text.len(),
        }
    }

    fn len_or_one(&self) -> usize {
        if self.end > self.start {
            self.end - self.start
        } else {
            1
        }
    }
}

/// Type-safe error classification corresponding to `PrettyError` variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// Malformed literals handed to the CLI
    Parse,
    /// Declared iteration bounds and steps
    Iteration,
    /// Error codes that nobody caught
    Signal,
    /// Configuration files
    Config,
    /// Reading files, writing output
    Io,
    /// Self-check failures
    Check,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Parse => "Parse",
            ErrorType::Iteration => "Iteration",
            ErrorType::Signal => "Signal",
            ErrorType::Config => "Config",
            ErrorType::Io => "Io",
            ErrorType::Check => "Check",
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Minimal, composable error context for diagnostics.
#[derive(Debug, Default)]
pub struct ErrorContext {
    /// The source text this error points into (if any).
    pub source: Option<SourceArc>,
    /// The primary span for this error (if any).
    pub span: Option<Span>,
    /// An optional help message.
    pub help: Option<String>,
}

impl ErrorContext {
    /// Returns an empty error context (no source, span, or help).
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates a context with both source and span.
    pub fn with_source_and_span(source: SourceArc, span: Span) -> Self {
        Self {
            source: Some(source),
            span: Some(span),
            help: None,
        }
    }

    /// Creates a context carrying only a help message.
    pub fn with_help(help: impl Into<String>) -> Self {
        Self {
            source: None,
            span: None,
            help: Some(help.into()),
        }
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Unified error type for all failure modes of the crate.
#[derive(Debug, Error)]
pub enum PrettyError {
    #[error("Parse error: {message}")]
    Parse { message: String, ctx: ErrorContext },
    #[error("Iteration bound violated: declared length {length} exceeds the {available} available elements")]
    IterationBound {
        length: usize,
        available: usize,
        ctx: ErrorContext,
    },
    #[error("Iteration step must be non-zero")]
    ZeroStep { ctx: ErrorContext },
    #[error("Unhandled error code: {code}")]
    Signal { code: ErrorCode, ctx: ErrorContext },
    #[error("Config error: {message}")]
    Config {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },
    #[error("IO error: {message}")]
    Io {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },
    #[error("Check failed: {message}")]
    CheckFailure { message: String, ctx: ErrorContext },
}

impl PrettyError {
    fn get_ctx(&self) -> &ErrorContext {
        match self {
            PrettyError::Parse { ctx, .. } => ctx,
            PrettyError::IterationBound { ctx, .. } => ctx,
            PrettyError::ZeroStep { ctx } => ctx,
            PrettyError::Signal { ctx, .. } => ctx,
            PrettyError::Config { ctx, .. } => ctx,
            PrettyError::Io { ctx, .. } => ctx,
            PrettyError::CheckFailure { ctx, .. } => ctx,
        }
    }

    pub fn error_type(&self) -> ErrorType {
        match self {
            PrettyError::Parse { .. } => ErrorType::Parse,
            PrettyError::IterationBound { .. } | PrettyError::ZeroStep { .. } => {
                ErrorType::Iteration
            }
            PrettyError::Signal { .. } => ErrorType::Signal,
            PrettyError::Config { .. } => ErrorType::Config,
            PrettyError::Io { .. } => ErrorType::Io,
            PrettyError::CheckFailure { .. } => ErrorType::Check,
        }
    }

    pub fn config(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        PrettyError::Config {
            message: message.into(),
            ctx: ErrorContext::none(),
            source: Some(Box::new(source)),
        }
    }

    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        PrettyError::Io {
            message: message.into(),
            ctx: ErrorContext::none(),
            source: Some(Box::new(source)),
        }
    }

    pub fn iteration_bound(length: usize, available: usize) -> Self {
        PrettyError::IterationBound {
            length,
            available,
            ctx: ErrorContext::with_help(format!(
                "pass a length no greater than {available}, or a longer slice"
            )),
        }
    }

    pub fn zero_step() -> Self {
        PrettyError::ZeroStep {
            ctx: ErrorContext::with_help("the direction comes from start and target; `by` is the magnitude"),
        }
    }

    pub fn uncaught(code: ErrorCode) -> Self {
        PrettyError::Signal {
            code,
            ctx: ErrorContext::none(),
        }
    }
}

impl Diagnostic for PrettyError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let code = match self {
            PrettyError::Parse { .. } => "pretty::parse",
            PrettyError::IterationBound { .. } => "pretty::iter::bound",
            PrettyError::ZeroStep { .. } => "pretty::iter::step",
            PrettyError::Signal { .. } => "pretty::signal",
            PrettyError::Config { .. } => "pretty::config",
            PrettyError::Io { .. } => "pretty::io",
            PrettyError::CheckFailure { .. } => "pretty::check",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.get_ctx()
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn std::fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.get_ctx()
            .source
            .as_ref()
            .map(|s| s.as_ref() as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.get_ctx().span?;
        let text = match self {
            PrettyError::Parse { message, .. }
            | PrettyError::Config { message, .. }
            | PrettyError::Io { message, .. }
            | PrettyError::CheckFailure { message, .. } => message.clone(),
            other => other.to_string(),
        };
        let label = LabeledSpan::new(Some(text), span.start, span.len_or_one());
        Some(Box::new(std::iter::once(label)))
    }
}

/// Converts a source string into an `Arc<NamedSource<String>>` for use in error contexts.
pub fn to_error_source<S: AsRef<str>>(name: &str, source: S) -> SourceArc {
    Arc::new(NamedSource::new(name, source.as_ref().to_string()))
}

/// Constructs a message-only `PrettyError` variant (`Parse` or `CheckFailure`).
#[macro_export]
macro_rules! err_msg {
    ($variant:ident, $($fmt:tt)+) => {
        $crate::errors::PrettyError::$variant {
            message: format!($($fmt)+),
            ctx: $crate::errors::ErrorContext::none(),
        }
    };
}

/// Constructs a message-only `PrettyError` variant pointing at `span` inside `src`.
#[macro_export]
macro_rules! err_ctx {
    ($variant:ident, $msg:expr, $src:expr, $span:expr) => {
        $crate::errors::PrettyError::$variant {
            message: ($msg).to_string(),
            ctx: $crate::errors::ErrorContext::with_source_and_span(
                $crate::errors::to_error_source("input", $src),
                $span,
            ),
        }
    };
    ($variant:ident, $msg:expr, $src:expr, $span:expr, $help:expr) => {
        $crate::errors::PrettyError::$variant {
            message: ($msg).to_string(),
            ctx: $crate::errors::ErrorContext::with_source_and_span(
                $crate::errors::to_error_source("input", $src),
                $span,
            )
            .help($help),
        }
    };
}

/// Prints a `PrettyError` with full miette diagnostics to stderr.
pub fn print_error(error: PrettyError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}
