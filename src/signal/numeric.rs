//! Fallible numeric operations that report through a [`Signal`].
//!
//! Results and codes follow the C math library: arguments outside a function's
//! domain raise `DOMAIN` and produce NaN, pole errors and overflow raise `RANGE`
//! and produce an infinity. NaN arguments propagate quietly.

use super::{ErrorCode, Signal};

fn domain_error(sig: &Signal) -> f64 {
    sig.throw(ErrorCode::DOMAIN);
    f64::NAN
}

fn pole_error(sig: &Signal) -> f64 {
    sig.throw(ErrorCode::RANGE);
    f64::NEG_INFINITY
}

fn overflow_checked(sig: &Signal, result: f64) -> f64 {
    if result.is_infinite() {
        sig.throw(ErrorCode::RANGE);
    }
    result
}

pub fn sqrt(sig: &Signal, x: f64) -> f64 {
    if x < 0.0 {
        return domain_error(sig);
    }
    x.sqrt()
}

fn logarithm(sig: &Signal, x: f64, log: fn(f64) -> f64) -> f64 {
    if x < 0.0 {
        domain_error(sig)
    } else if x == 0.0 {
        pole_error(sig)
    } else {
        log(x)
    }
}

pub fn ln(sig: &Signal, x: f64) -> f64 {
    logarithm(sig, x, f64::ln)
}

pub fn log10(sig: &Signal, x: f64) -> f64 {
    logarithm(sig, x, f64::log10)
}

pub fn log2(sig: &Signal, x: f64) -> f64 {
    logarithm(sig, x, f64::log2)
}

pub fn exp(sig: &Signal, x: f64) -> f64 {
    if !x.is_finite() {
        return x.exp();
    }
    overflow_checked(sig, x.exp())
}

pub fn pow(sig: &Signal, base: f64, exponent: f64) -> f64 {
    if base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
        return domain_error(sig);
    }
    if base == 0.0 && exponent < 0.0 {
        sig.throw(ErrorCode::RANGE);
        return base.powf(exponent);
    }
    let result = base.powf(exponent);
    if base.is_finite() && exponent.is_finite() {
        overflow_checked(sig, result)
    } else {
        result
    }
}

pub fn acos(sig: &Signal, x: f64) -> f64 {
    if x.abs() > 1.0 {
        return domain_error(sig);
    }
    x.acos()
}

pub fn asin(sig: &Signal, x: f64) -> f64 {
    if x.abs() > 1.0 {
        return domain_error(sig);
    }
    x.asin()
}

/// Parses a base-10 integer the way `strtol` reports failures.
///
/// Text that is not an integer raises `INVALID` and yields 0; a number outside
/// `i64` raises `RANGE` and saturates toward its sign.
pub fn parse_int(sig: &Signal, text: &str) -> i64 {
    let trimmed = text.trim();
    match trimmed.parse::<i64>() {
        Ok(value) => value,
        Err(err) => match err.kind() {
            std::num::IntErrorKind::PosOverflow => {
                sig.throw(ErrorCode::RANGE);
                i64::MAX
            }
            std::num::IntErrorKind::NegOverflow => {
                sig.throw(ErrorCode::RANGE);
                i64::MIN
            }
            _ => {
                sig.throw(ErrorCode::INVALID);
                0
            }
        },
    }
}
