//! Integer ranges: `forrange`, `fortimes`, `forrange_by`.
//!
//! The bounds are captured once, when the range is built. Values are produced
//! from the start by index, so stepping can never overflow past the target.

use std::fmt::Debug;
use std::iter::FusedIterator;

use crate::errors::PrettyError;

/// A primitive integer usable as a range bound.
pub trait RangeInt: Copy + PartialOrd + Debug {
    fn zero() -> Self;
    /// `|self - other|`, exactly.
    fn distance(self, other: Self) -> u128;
    /// `|self|`, exactly.
    fn magnitude(self) -> u128;
    /// `self ± delta`. Only called with results that fit in `Self`.
    fn offset(self, delta: u128, ascending: bool) -> Self;
}

macro_rules! range_int {
    ($abs:ident => $($ty:ty),+) => {
        $(
            impl RangeInt for $ty {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn distance(self, other: Self) -> u128 {
                    self.abs_diff(other) as u128
                }

                #[inline]
                fn magnitude(self) -> u128 {
                    range_int!(@$abs self) as u128
                }

                #[inline]
                fn offset(self, delta: u128, ascending: bool) -> Self {
                    // modular arithmetic lands on the exact result whenever it fits
                    if ascending {
                        self.wrapping_add(delta as $ty)
                    } else {
                        self.wrapping_sub(delta as $ty)
                    }
                }
            }
        )+
    };
    (@signed $value:expr) => {
        $value.unsigned_abs()
    };
    (@unsigned $value:expr) => {
        $value
    };
}

range_int!(signed => i8, i16, i32, i64, i128, isize);
range_int!(unsigned => u8, u16, u32, u64, u128, usize);

/// A finite, ordered run of integers from a start toward an exclusive target.
#[derive(Debug, Clone, PartialEq)]
pub struct IntRange<T: RangeInt> {
    start: T,
    ascending: bool,
    step: u128,
    front: u128,
    back: u128,
}

impl<T: RangeInt> IntRange<T> {
    fn build(start: T, target: T, step: u128) -> Self {
        let ascending = start < target;
        let distance = start.distance(target);
        Self {
            start,
            ascending,
            step,
            front: 0,
            back: distance.div_ceil(step),
        }
    }

    fn empty(start: T) -> Self {
        Self {
            start,
            ascending: true,
            step: 1,
            front: 0,
            back: 0,
        }
    }

    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Values not yet produced.
    pub fn remaining(&self) -> u128 {
        self.back - self.front
    }

    fn value_at(&self, index: u128) -> T {
        self.start.offset(index * self.step, self.ascending)
    }
}

impl<T: RangeInt> Iterator for IntRange<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let value = self.value_at(self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<T: RangeInt> DoubleEndedIterator for IntRange<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.value_at(self.back))
    }
}

impl<T: RangeInt> FusedIterator for IntRange<T> {}

/// `start, start ± 1, ...` up to but excluding `target`.
///
/// Counts up when `start < target`, down otherwise; `start == target` is empty.
///
/// ```rust
/// use pretty::iter::forrange;
/// assert_eq!(forrange(0, 5).collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
/// assert_eq!(forrange(5, 0).collect::<Vec<_>>(), [5, 4, 3, 2, 1]);
/// ```
pub fn forrange<T: RangeInt>(start: T, target: T) -> IntRange<T> {
    IntRange::build(start, target, 1)
}

/// `0, 1, ..., count - 1`. A count of zero or less is empty.
pub fn fortimes<T: RangeInt>(count: T) -> IntRange<T> {
    if count > T::zero() {
        forrange(T::zero(), count)
    } else {
        IntRange::empty(T::zero())
    }
}

/// Like [`forrange`], moving `|by|` per step.
///
/// The direction comes from `start` and `target`; only the magnitude of `by`
/// is used. A zero step is rejected.
pub fn forrange_by<T: RangeInt>(start: T, target: T, by: T) -> Result<IntRange<T>, PrettyError> {
    let step = by.magnitude();
    if step == 0 {
        return Err(PrettyError::zero_step());
    }
    Ok(IntRange::build(start, target, step))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_and_descending() {
        assert_eq!(forrange(0, 5).collect::<Vec<i32>>(), [0, 1, 2, 3, 4]);
        assert_eq!(forrange(5, 0).collect::<Vec<i32>>(), [5, 4, 3, 2, 1]);
        assert_eq!(forrange(-2i8, 2).collect::<Vec<_>>(), [-2, -1, 0, 1]);
        assert_eq!(forrange(3u8, 3).count(), 0);
    }

    #[test]
    fn fortimes_never_runs_negative_counts() {
        assert_eq!(fortimes(3).collect::<Vec<i32>>(), [0, 1, 2]);
        assert_eq!(fortimes(0u32).count(), 0);
        assert_eq!(fortimes(-4i64).count(), 0);
    }

    #[test]
    fn full_width_ranges_do_not_overflow() {
        let values: Vec<u8> = forrange(250u8, 255).collect();
        assert_eq!(values, [250, 251, 252, 253, 254]);
        let values: Vec<i8> = forrange(i8::MIN + 2, i8::MIN).collect();
        assert_eq!(values, [-126, -127]);
        assert_eq!(forrange(i8::MIN, i8::MAX).count(), 255);
    }

    #[test]
    fn stepped_ranges() {
        let up: Vec<i32> = forrange_by(0, 10, 3).expect("non-zero").collect();
        assert_eq!(up, [0, 3, 6, 9]);
        let down: Vec<i32> = forrange_by(10, 0, -4).expect("non-zero").collect();
        assert_eq!(down, [10, 6, 2]);
        let wide: Vec<i8> = forrange_by(-100i8, 100, 120).expect("non-zero").collect();
        assert_eq!(wide, [-100, 20]);
        assert!(matches!(forrange_by(0, 10, 0), Err(PrettyError::ZeroStep { .. })));
    }

    #[test]
    fn both_ends() {
        let mut range = forrange(0, 5);
        assert_eq!(range.next_back(), Some(4));
        assert_eq!(range.next(), Some(0));
        assert_eq!(range.remaining(), 3);
        assert_eq!(range.size_hint(), (3, Some(3)));
        assert_eq!(range.rev().collect::<Vec<_>>(), [3, 2, 1]);
    }

    #[test]
    fn bounds_are_captured_once() {
        let mut target = 3;
        let mut seen = Vec::new();
        for i in forrange(0, target) {
            target += 10;
            seen.push(i);
        }
        assert_eq!(seen, [0, 1, 2]);
        assert_eq!(target, 33);
    }
}
