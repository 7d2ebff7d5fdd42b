//! Comparison policies, one impl family per value category.
//!
//! Category resolution is done by the trait solver: every type implements
//! [`Categorized`] exactly once, and [`Equal`] is only implemented between types
//! of the same category. Comparing across categories does not compile.

use std::ffi::{CStr, CString};
use std::ptr::NonNull;

use serde::{Deserialize, Serialize};

use super::category::{ValueCategory, LONG_DOUBLE_EPSILON};

// ============================================================================
// CORE TRAITS
// ============================================================================

/// Associates a type with its [`ValueCategory`].
pub trait Categorized {
    const CATEGORY: ValueCategory;
}

/// Equality under the comparison policy of `Self`'s category.
pub trait Equal<Rhs: ?Sized = Self>: Categorized {
    fn equal(&self, other: &Rhs) -> bool;
}

/// Opt-in magnitude-scaled tolerance for the floating categories.
pub trait ScaledEqual: Equal {
    fn scaled_equal(&self, other: &Self) -> bool;
}

impl<T: Categorized + ?Sized> Categorized for &T {
    const CATEGORY: ValueCategory = T::CATEGORY;
}

impl<'b, A, B> Equal<&'b B> for &A
where
    A: Equal<B> + ?Sized,
    B: ?Sized,
{
    #[inline]
    fn equal(&self, other: &&'b B) -> bool {
        (**self).equal(*other)
    }
}

// ============================================================================
// INTEGERS AND BOOLEANS: bitwise
// ============================================================================

macro_rules! categorize {
    ($category:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl Categorized for $ty {
                const CATEGORY: ValueCategory = ValueCategory::$category;
            }
        )+
    };
}

// Every width of one signedness compares with every other through the widest type.
macro_rules! widening_equal {
    ($wide:ty; [$($lhs:ty),+]; $rhs:tt) => {
        $( widening_equal!(@row $wide; $lhs; $rhs); )+
    };
    (@row $wide:ty; $lhs:ty; [$($rhs:ty),+]) => {
        $(
            impl Equal<$rhs> for $lhs {
                #[inline]
                fn equal(&self, other: &$rhs) -> bool {
                    *self as $wide == *other as $wide
                }
            }
        )+
    };
}

categorize!(SignedInteger => i8, i16, i32, i64, i128, isize);
categorize!(UnsignedInteger => u8, u16, u32, u64, u128, usize, char);
categorize!(Boolean => bool);

widening_equal!(i128; [i8, i16, i32, i64, i128, isize]; [i8, i16, i32, i64, i128, isize]);
widening_equal!(u128; [u8, u16, u32, u64, u128, usize]; [u8, u16, u32, u64, u128, usize]);

impl Equal for char {
    #[inline]
    fn equal(&self, other: &char) -> bool {
        self == other
    }
}

impl Equal for bool {
    #[inline]
    fn equal(&self, other: &bool) -> bool {
        self == other
    }
}

// ============================================================================
// FLOATS: fixed epsilon per width
// ============================================================================

/// An extended-precision float.
///
/// Rust has no native extended format; the value is stored as `f64` and carries
/// the `ExtendedFloat` category with the 80-bit epsilon, which is finer than
/// `f64` resolution and so amounts to exact comparison.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LongDouble(pub f64);

impl From<f64> for LongDouble {
    fn from(value: f64) -> Self {
        LongDouble(value)
    }
}

macro_rules! epsilon_equal {
    ($category:ident, $ty:ty, $repr:ty, $get:expr, $epsilon:expr) => {
        impl Categorized for $ty {
            const CATEGORY: ValueCategory = ValueCategory::$category;
        }

        impl Equal for $ty {
            #[inline]
            fn equal(&self, other: &$ty) -> bool {
                let get: fn(&$ty) -> $repr = $get;
                let (a, b) = (get(self), get(other));
                // identical bits first, so infinities and NaN compare equal to themselves
                a.to_bits() == b.to_bits() || (a - b).abs() < $epsilon
            }
        }

        impl ScaledEqual for $ty {
            fn scaled_equal(&self, other: &$ty) -> bool {
                let get: fn(&$ty) -> $repr = $get;
                let (a, b) = (get(self), get(other));
                let scale = a.abs().max(b.abs()).max(1.0);
                a.to_bits() == b.to_bits() || (a - b).abs() < $epsilon * scale
            }
        }
    };
}

epsilon_equal!(Float32, f32, f32, |x| *x, f32::EPSILON);
epsilon_equal!(Float64, f64, f64, |x| *x, f64::EPSILON);
epsilon_equal!(ExtendedFloat, LongDouble, f64, |x| x.0, LONG_DOUBLE_EPSILON);

// ============================================================================
// C-STRINGS: content
// ============================================================================

trait ByteContent {
    fn content(&self) -> &[u8];
}

impl ByteContent for str {
    fn content(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl ByteContent for String {
    fn content(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl ByteContent for CStr {
    fn content(&self) -> &[u8] {
        self.to_bytes()
    }
}

impl ByteContent for CString {
    fn content(&self) -> &[u8] {
        self.as_bytes()
    }
}

categorize!(CString => str, String, CStr, CString);

macro_rules! byte_string_equal {
    ($($lhs:ty),+) => {
        $( byte_string_equal!(@row $lhs; str, String, CStr, CString); )+
    };
    (@row $lhs:ty; $($rhs:ty),+) => {
        $(
            impl Equal<$rhs> for $lhs {
                #[inline]
                fn equal(&self, other: &$rhs) -> bool {
                    self.content() == other.content()
                }
            }
        )+
    };
}

byte_string_equal!(str, String, CStr, CString);

// ============================================================================
// OPAQUE: address identity
// ============================================================================

/// Treats a reference as an opaque handle: compared and printed by address.
pub struct Opaque<'a, T: ?Sized>(pub &'a T);

impl<'a, T: ?Sized> Opaque<'a, T> {
    pub fn of(value: &'a T) -> Self {
        Opaque(value)
    }

    pub fn address(&self) -> usize {
        (self.0 as *const T).cast::<()>() as usize
    }
}

impl<T: ?Sized> Clone for Opaque<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Opaque<'_, T> {}

impl<T: ?Sized> std::fmt::Debug for Opaque<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Opaque({:p})", self.0 as *const T)
    }
}

impl<T: ?Sized> Categorized for *const T {
    const CATEGORY: ValueCategory = ValueCategory::Opaque;
}

impl<T: ?Sized> Categorized for *mut T {
    const CATEGORY: ValueCategory = ValueCategory::Opaque;
}

impl<T: ?Sized> Categorized for NonNull<T> {
    const CATEGORY: ValueCategory = ValueCategory::Opaque;
}

impl<T: ?Sized> Categorized for Opaque<'_, T> {
    const CATEGORY: ValueCategory = ValueCategory::Opaque;
}

impl<T: ?Sized> Equal for *const T {
    #[inline]
    fn equal(&self, other: &Self) -> bool {
        std::ptr::addr_eq(*self, *other)
    }
}

impl<T: ?Sized> Equal for *mut T {
    #[inline]
    fn equal(&self, other: &Self) -> bool {
        std::ptr::addr_eq(*self as *const T, *other as *const T)
    }
}

impl<T: ?Sized> Equal for NonNull<T> {
    #[inline]
    fn equal(&self, other: &Self) -> bool {
        std::ptr::addr_eq(self.as_ptr() as *const T, other.as_ptr() as *const T)
    }
}

impl<T: ?Sized> Equal for Opaque<'_, T> {
    #[inline]
    fn equal(&self, other: &Self) -> bool {
        std::ptr::addr_eq(self.0 as *const T, other.0 as *const T)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_compare_across_widths() {
        assert!(5i8.equal(&5i64));
        assert!(!5u16.equal(&6u64));
        assert!((-1i32).equal(&-1isize));
        assert!(u64::MAX.equal(&u64::MAX));
    }

    #[test]
    fn float_epsilon_is_fixed_per_width() {
        let a = 0.1f32 + 0.2f32;
        assert!(a.equal(&0.3f32));
        assert!(1.0f64.equal(&(1.0 + f64::EPSILON / 2.0)));
        assert!(!1.0f64.equal(&(1.0 + 2.0 * f64::EPSILON)));
        // unscaled: neighbouring large floats are further apart than epsilon
        let big = 1.0e10f64;
        let next = f64::from_bits(big.to_bits() + 1);
        assert!(!big.equal(&next));
        assert!(big.scaled_equal(&next));
    }

    #[test]
    fn floats_are_reflexive_at_the_edges() {
        assert!(f64::INFINITY.equal(&f64::INFINITY));
        assert!(f32::NAN.equal(&f32::NAN));
        assert!(0.0f64.equal(&-0.0f64));
        assert!(!f64::INFINITY.equal(&f64::NEG_INFINITY));
    }

    #[test]
    fn long_double_is_effectively_exact() {
        let a = LongDouble(1.0);
        assert!(a.equal(&LongDouble(1.0)));
        assert!(!a.equal(&LongDouble(1.0 + f64::EPSILON)));
        assert_eq!(LongDouble::CATEGORY, ValueCategory::ExtendedFloat);
    }

    #[test]
    fn strings_compare_by_content() {
        let owned = String::from("hello");
        assert!("hello".equal(&owned));
        assert!(owned.equal("hello"));
        let c = CString::new("hello").expect("no interior nul");
        assert!(c.as_c_str().equal("hello"));
        assert!(!c.equal("world"));
    }

    #[test]
    fn opaque_compares_by_address() {
        let a = 1;
        let b = 1;
        assert!(Opaque::of(&a).equal(&Opaque::of(&a)));
        assert!(!Opaque::of(&a).equal(&Opaque::of(&b)));
        let p: *const i32 = &a;
        assert!(p.equal(&p));
        assert!(!p.equal(&(&b as *const i32)));
    }
}
