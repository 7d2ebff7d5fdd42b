//! # Value Dispatch
//!
//! Selects a comparison routine and a formatting routine from the *category* of
//! a value, at compile time.
//!
//! ## Module Structure
//!
//! - **`category`**: `ValueCategory` and the policies it selects
//! - **`compare`**: `Equal` impls per category (bitwise, epsilon, byte-string, address)
//! - **`format`**: `ToText` impls per category and the `show` output path
//!
//! ## Design Principles
//!
//! - **Static**: the category is a property of the type, resolved once per call site
//! - **Closed**: operands of different categories do not compile together
//!
//! ```compile_fail
//! // a float is never compared to a string
//! pretty::dispatch::equal(&1.0f64, "one");
//! ```
//!
//! ```compile_fail
//! // nor an integer to a float
//! pretty::dispatch::equal(&1i32, &1.0f32);
//! ```

pub mod category;
pub mod compare;
pub mod format;

pub use category::{ComparisonPolicy, FormatPolicy, ValueCategory, LONG_DOUBLE_EPSILON};
pub use compare::{Categorized, Equal, LongDouble, Opaque, ScaledEqual};
pub use format::{escape_bytes, parse_text, show, NullSink, OutputBuffer, OutputSink, ToText};

/// Whether `a` and `b` are equal under the policy of `a`'s category.
///
/// Example:
/// ```rust
/// use pretty::dispatch::equal;
/// assert!(equal(&5, &5));
/// assert!(equal("hello", &String::from("hello")));
/// assert!(equal(&(0.1f32 + 0.2f32), &0.3f32));
/// ```
#[inline]
pub fn equal<A, B>(a: &A, b: &B) -> bool
where
    A: Equal<B> + ?Sized,
    B: ?Sized,
{
    a.equal(b)
}

/// Floating equality with the tolerance scaled by the operands' magnitude.
///
/// Not the default: [`equal`] keeps the fixed per-width epsilon.
#[inline]
pub fn equal_scaled<T: ScaledEqual>(a: &T, b: &T) -> bool {
    a.scaled_equal(b)
}

/// Freshly allocated text for `x` under its category's format policy.
#[inline]
pub fn tostring<T: ToText + ?Sized>(x: &T) -> String {
    x.to_text()
}

/// Whether `x` equals any element of `set`, scanning in order and stopping at
/// the first match.
///
/// Example:
/// ```rust
/// use pretty::dispatch::contains;
/// assert!(contains(&3, &[1, 2, 3, 4]));
/// assert!(!contains(&9, &[1, 2, 3, 4]));
/// ```
pub fn contains<T, U>(x: &T, set: &[U]) -> bool
where
    T: Equal<U> + ?Sized,
{
    set.iter().any(|element| x.equal(element))
}

/// Alias of [`contains`] (`in` is reserved).
#[inline]
pub fn in_set<T, U>(x: &T, set: &[U]) -> bool
where
    T: Equal<U> + ?Sized,
{
    contains(x, set)
}

/// The category of `x`'s type.
#[inline]
pub fn category_of<T: Categorized + ?Sized>(_x: &T) -> ValueCategory {
    T::CATEGORY
}

/// `equal!(a, b)`: [`equal`] on two expressions, borrowing both.
#[macro_export]
macro_rules! equal {
    ($a:expr, $b:expr $(,)?) => {
        $crate::dispatch::equal(&$a, &$b)
    };
}

/// `tostring!(x)`: [`tostring`] on an expression.
#[macro_export]
macro_rules! tostring {
    ($x:expr $(,)?) => {
        $crate::dispatch::tostring(&$x)
    };
}

/// `contains!(x; a, b, c)`: whether `x` equals any of the listed values.
///
/// ```rust
/// use pretty::contains;
/// assert!(contains!(3; 1, 2, 3, 4));
/// assert!(!contains!("z"; "x", "y"));
/// ```
#[macro_export]
macro_rules! contains {
    ($x:expr; $($element:expr),+ $(,)?) => {
        $crate::dispatch::contains(&$x, &[$($element),+])
    };
}
