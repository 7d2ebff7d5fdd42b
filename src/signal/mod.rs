//! # Error Signal
//!
//! A sentinel-code error discipline: fallible operations record a nonzero
//! [`ErrorCode`] in a [`Signal`] and keep going, and the caller later asks
//! whether the recorded code is one it recognises.
//!
//! ## Lifecycle
//!
//! - [`attempt`] is the `try`: it hands its body a fresh, clear `Signal`.
//! - [`Signal::throw`] records a code. Execution continues at the next statement;
//!   nothing unwinds.
//! - [`Outcome::catch`] is the membership test. It never clears anything.
//!
//! ## Ownership
//!
//! The slot is an explicit value threaded through calls, never ambient state.
//! Each `attempt` owns its own slot, so an inner `attempt` cannot clear a code
//! the outer region has not looked at yet. `Signal` is `!Sync`, so one slot can
//! never be observed from two threads at once.

use std::cell::Cell;

use crate::errors::PrettyError;

mod code;
pub mod numeric;

pub use code::ErrorCode;

// ============================================================================
// SIGNAL: the error slot
// ============================================================================

/// A single error-code cell. Clear (zero) until something throws.
#[derive(Debug, Default)]
pub struct Signal {
    code: Cell<ErrorCode>,
}

impl Signal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `code`. Does not transfer control.
    pub fn throw(&self, code: impl Into<ErrorCode>) {
        self.code.set(code.into());
    }

    pub fn code(&self) -> ErrorCode {
        self.code.get()
    }

    pub fn is_clear(&self) -> bool {
        !self.code().is_error()
    }

    /// True iff the current code is one of `candidates`.
    pub fn catch(&self, candidates: &[ErrorCode]) -> bool {
        is_member(self.code(), candidates)
    }

    /// Copies the platform's last-error value into the slot, if it is nonzero.
    ///
    /// Use right after a system call that reports failure through the
    /// thread's last-error convention.
    pub fn capture_os_error(&self) -> ErrorCode {
        self.capture(&std::io::Error::last_os_error())
    }

    /// Records the OS error number carried by `error`, if it has a nonzero one.
    ///
    /// Errors built from an `io::ErrorKind` alone carry no number and leave the
    /// slot untouched.
    pub fn capture(&self, error: &std::io::Error) -> ErrorCode {
        let code = ErrorCode::new(error.raw_os_error().unwrap_or(0));
        if code.is_error() {
            self.throw(code);
        }
        code
    }

    /// Records the error of a `Result`-returning operation and yields its value.
    pub fn check<T>(&self, result: Result<T, ErrorCode>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(code) => {
                self.throw(code);
                None
            }
        }
    }

    /// Re-raises the code of a finished inner region into this slot.
    ///
    /// Returns whether anything was raised. A clear outcome leaves this slot
    /// untouched.
    pub fn absorb<R>(&self, outcome: &Outcome<R>) -> bool {
        if outcome.code.is_error() {
            self.throw(outcome.code);
            true
        } else {
            false
        }
    }
}

fn is_member(code: ErrorCode, candidates: &[ErrorCode]) -> bool {
    candidates.iter().any(|candidate| *candidate == code)
}

// ============================================================================
// TRY / CATCH
// ============================================================================

/// Runs `body` with a freshly cleared slot and reports what it left behind.
///
/// Usage:
/// ```rust
/// use pretty::signal::{attempt, numeric, ErrorCode};
/// let outcome = attempt(|sig| numeric::sqrt(sig, -1.0));
/// assert!(outcome.catch(&[ErrorCode::DOMAIN]));
/// assert!(!outcome.catch(&[ErrorCode::RANGE]));
/// ```
pub fn attempt<R>(body: impl FnOnce(&Signal) -> R) -> Outcome<R> {
    let signal = Signal::new();
    let value = body(&signal);
    Outcome {
        value,
        code: signal.code(),
    }
}

/// The value and final error code of one `attempt` region.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<R> {
    pub value: R,
    pub code: ErrorCode,
}

impl<R> Outcome<R> {
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn value(&self) -> &R {
        &self.value
    }

    pub fn is_clear(&self) -> bool {
        !self.code.is_error()
    }

    /// True iff the region ended with one of `candidates`.
    pub fn catch(&self, candidates: &[ErrorCode]) -> bool {
        is_member(self.code, candidates)
    }

    /// Runs `handler` iff the region ended with one of `candidates`.
    pub fn caught(&self, candidates: &[ErrorCode], handler: impl FnOnce(ErrorCode)) -> bool {
        let matched = self.catch(candidates);
        if matched {
            handler(self.code);
        }
        matched
    }

    pub fn into_inner(self) -> (R, ErrorCode) {
        (self.value, self.code)
    }

    /// Bridges to `Result`: any nonzero code becomes `PrettyError::Signal`.
    pub fn into_result(self) -> Result<R, PrettyError> {
        if self.code.is_error() {
            Err(PrettyError::uncaught(self.code))
        } else {
            Ok(self.value)
        }
    }
}
