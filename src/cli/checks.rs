//! # Self-Checks
//!
//! Named, runnable properties of the four constructs. `pretty check` runs them
//! against the compiled library and reports PASS/FAIL per check.
//!
//! ## Module Structure
//!
//! - **`CheckRegistry`**: name to check function, iterated in name order
//! - **`register_std_checks`**: the built-in property set
//! - **`STD_CHECKS`**: a lazily built registry holding the built-in set

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::ffi::CString;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::dispatch::{contains, equal, LongDouble, Opaque};
use crate::err_msg;
use crate::errors::PrettyError;
use crate::guard::with;
use crate::iter::{foreach, forrange, forthese};
use crate::signal::{attempt, numeric, ErrorCode};

/// A self-check: `Ok(())` when the property holds.
pub type CheckFn = fn() -> Result<(), PrettyError>;

#[derive(Default)]
pub struct CheckRegistry {
    pub checks: BTreeMap<String, CheckFn>,
}

impl CheckRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, check: CheckFn) {
        self.checks.insert(name.to_string(), check);
    }

    pub fn get(&self, name: &str) -> Option<&CheckFn> {
        self.checks.get(name)
    }

    pub fn list(&self) -> Vec<String> {
        self.checks.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Runs every check whose name contains `filter` (all of them without one).
    pub fn run(&self, filter: Option<&str>) -> CheckReport {
        let results: Vec<CheckResult> = self
            .checks
            .iter()
            .filter(|(name, _)| filter.map_or(true, |f| name.contains(f)))
            .map(|(name, check)| match check() {
                Ok(()) => CheckResult {
                    name: name.clone(),
                    passed: true,
                    message: None,
                },
                Err(e) => CheckResult {
                    name: name.clone(),
                    passed: false,
                    message: Some(e.to_string()),
                },
            })
            .collect();
        CheckReport::new(results)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub results: Vec<CheckResult>,
    pub passed: usize,
    pub failed: usize,
}

impl CheckReport {
    pub fn new(results: Vec<CheckResult>) -> Self {
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = results.len() - passed;
        Self {
            results,
            passed,
            failed,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

pub static STD_CHECKS: Lazy<CheckRegistry> = Lazy::new(|| {
    let mut registry = CheckRegistry::new();
    register_std_checks(&mut registry);
    registry
});

// Fails the enclosing check with a formatted message.
macro_rules! ensure {
    ($cond:expr, $($fmt:tt)+) => {
        if !$cond {
            return Err(err_msg!(CheckFailure, $($fmt)+));
        }
    };
}

// ============================================================================
// DISPATCH CHECKS
// ============================================================================

pub const CHECK_REFLEXIVE: CheckFn = || {
    let word = String::from("word");
    let cell = 0u8;
    ensure!(equal(&-7i32, &-7i32), "signed integer is not equal to itself");
    ensure!(equal(&u64::MAX, &u64::MAX), "unsigned integer is not equal to itself");
    ensure!(equal(&0.1f32, &0.1f32), "float32 is not equal to itself");
    ensure!(equal(&f64::NAN, &f64::NAN), "NaN is not equal to itself");
    ensure!(equal(&LongDouble(2.5), &LongDouble(2.5)), "extended float is not equal to itself");
    ensure!(equal(word.as_str(), word.as_str()), "string is not equal to itself");
    ensure!(equal(&true, &true), "boolean is not equal to itself");
    ensure!(equal(&Opaque::of(&cell), &Opaque::of(&cell)), "handle is not equal to itself");
    Ok(())
};

pub const CHECK_FIXED_EPSILON: CheckFn = || {
    ensure!(equal(&1.0f64, &(1.0 + f64::EPSILON / 2.0)), "half an epsilon apart compared unequal");
    ensure!(!equal(&1.0f64, &(1.0 + f64::EPSILON)), "one epsilon apart compared equal");
    ensure!(equal(&1.0f32, &(1.0 + f32::EPSILON / 2.0)), "float32 half an epsilon apart compared unequal");
    ensure!(!equal(&1.0f32, &(1.0 + f32::EPSILON)), "float32 one epsilon apart compared equal");
    let big = 1.0e10f64;
    let next = f64::from_bits(big.to_bits() + 1);
    ensure!(!equal(&big, &next), "epsilon was scaled by magnitude");
    Ok(())
};

pub const CHECK_STRING_CONTENT: CheckFn = || {
    let a = String::from("same text");
    let b = String::from("same text");
    ensure!(a.as_ptr() != b.as_ptr(), "expected distinct storage");
    ensure!(equal(&a, &b), "equal content in distinct storage compared unequal");
    let c = CString::new("same text").map_err(|e| err_msg!(CheckFailure, "{}", e))?;
    ensure!(equal(c.as_c_str(), a.as_str()), "C string and str with equal content compared unequal");
    Ok(())
};

pub const CHECK_CONTAINS: CheckFn = || {
    ensure!(contains(&3, &[1, 2, 3, 4]), "3 not found in {{1, 2, 3, 4}}");
    ensure!(!contains(&9, &[1, 2, 3, 4]), "9 found in {{1, 2, 3, 4}}");
    Ok(())
};

// ============================================================================
// GUARD CHECKS
// ============================================================================

pub const CHECK_RELEASE_ONCE: CheckFn = || {
    let released = RefCell::new(Vec::new());
    with(41, |value| released.borrow_mut().push(value), |value| *value += 1);
    let released = released.into_inner();
    ensure!(released == [42], "expected one release of 42, got {:?}", released);
    Ok(())
};

pub const CHECK_RELEASE_ON_EARLY_EXIT: CheckFn = || {
    let count = Cell::new(0);
    let leave_early = || -> Result<(), ()> {
        crate::with!(_handle = (), |_| count.set(count.get() + 1));
        Err(())
    };
    let _ = leave_early();
    ensure!(count.get() == 1, "early exit released {} times", count.get());
    Ok(())
};

// ============================================================================
// SIGNAL CHECKS
// ============================================================================

pub const CHECK_TRY_RESETS: CheckFn = || {
    let first = attempt(|sig| sig.throw(ErrorCode::RANGE));
    ensure!(first.catch(&[ErrorCode::RANGE]), "first try lost its code");
    let second = attempt(|_| ());
    ensure!(second.is_clear(), "second try started with {}", second.code());
    Ok(())
};

pub const CHECK_NESTED_TRY: CheckFn = || {
    let outer = attempt(|sig| {
        sig.throw(ErrorCode::INVALID);
        let inner = attempt(|_| ());
        inner.is_clear()
    });
    ensure!(*outer.value(), "inner try did not start clear");
    ensure!(outer.catch(&[ErrorCode::INVALID]), "inner try clobbered the outer code");
    Ok(())
};

pub const CHECK_DOMAIN_ERROR: CheckFn = || {
    let outcome = attempt(|sig| numeric::sqrt(sig, -1.0));
    ensure!(outcome.value().is_nan(), "sqrt(-1) returned {}", outcome.value());
    ensure!(outcome.catch(&[ErrorCode::DOMAIN]), "sqrt(-1) raised {}", outcome.code());
    ensure!(!outcome.catch(&[ErrorCode::RANGE]), "sqrt(-1) matched a code it did not raise");
    Ok(())
};

// ============================================================================
// ITERATION CHECKS
// ============================================================================

pub const CHECK_FORRANGE: CheckFn = || {
    let up: Vec<i32> = forrange(0, 5).collect();
    ensure!(up == [0, 1, 2, 3, 4], "forrange(0, 5) yielded {:?}", up);
    let down: Vec<i32> = forrange(5, 0).collect();
    ensure!(down == [5, 4, 3, 2, 1], "forrange(5, 0) yielded {:?}", down);
    Ok(())
};

pub const CHECK_SUMS: CheckFn = || {
    let sum: i32 = foreach(&[1, 2, 3], 3)?.sum();
    ensure!(sum == 6, "foreach sum was {}", sum);
    let sum: i32 = forthese([1, 2, 3, 4]).sum();
    ensure!(sum == 10, "forthese sum was {}", sum);
    Ok(())
};

pub const CHECK_BOUND_REJECTED: CheckFn = || {
    let result = foreach(&[1, 2], 3);
    ensure!(
        matches!(result, Err(PrettyError::IterationBound { .. })),
        "a length past the end was accepted"
    );
    Ok(())
};

/// Registers the built-in property checks.
pub fn register_std_checks(registry: &mut CheckRegistry) {
    registry.register("dispatch/reflexive", CHECK_REFLEXIVE);
    registry.register("dispatch/fixed-epsilon", CHECK_FIXED_EPSILON);
    registry.register("dispatch/string-content", CHECK_STRING_CONTENT);
    registry.register("dispatch/contains", CHECK_CONTAINS);
    registry.register("guard/release-once", CHECK_RELEASE_ONCE);
    registry.register("guard/release-on-early-exit", CHECK_RELEASE_ON_EARLY_EXIT);
    registry.register("signal/try-resets", CHECK_TRY_RESETS);
    registry.register("signal/nested-try", CHECK_NESTED_TRY);
    registry.register("signal/domain-error", CHECK_DOMAIN_ERROR);
    registry.register("iter/forrange", CHECK_FORRANGE);
    registry.register("iter/sums", CHECK_SUMS);
    registry.register("iter/bound-rejected", CHECK_BOUND_REJECTED);
}
