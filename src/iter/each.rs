//! Element iteration: `foreach` over a slice prefix, `forthese` over an inline list.

use std::iter::FusedIterator;

use crate::errors::PrettyError;

// ============================================================================
// CURSOR
// ============================================================================

/// Position within one element iteration. `offset` never passes `bound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    offset: usize,
    bound: usize,
}

impl Cursor {
    pub fn new(bound: usize) -> Self {
        Self { offset: 0, bound }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn bound(&self) -> usize {
        self.bound
    }

    pub fn remaining(&self) -> usize {
        self.bound - self.offset
    }

    fn advance(&mut self) -> Option<usize> {
        if self.offset == self.bound {
            return None;
        }
        let current = self.offset;
        self.offset += 1;
        Some(current)
    }

    fn retreat(&mut self) -> Option<usize> {
        if self.offset == self.bound {
            return None;
        }
        self.bound -= 1;
        Some(self.bound)
    }
}

fn checked_prefix(available: usize, length: usize) -> Result<Cursor, PrettyError> {
    if length > available {
        return Err(PrettyError::iteration_bound(length, available));
    }
    Ok(Cursor::new(length))
}

// ============================================================================
// FOREACH
// ============================================================================

/// Shared references to the first `length` elements, in index order.
#[derive(Debug, Clone)]
pub struct Foreach<'a, T> {
    base: &'a [T],
    cursor: Cursor,
}

impl<'a, T> Foreach<'a, T> {
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
}

impl<'a, T> Iterator for Foreach<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let index = self.cursor.advance()?;
        self.base.get(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.cursor.remaining();
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for Foreach<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = self.cursor.retreat()?;
        self.base.get(index)
    }
}

impl<T> ExactSizeIterator for Foreach<'_, T> {}
impl<T> FusedIterator for Foreach<'_, T> {}

/// Iterates the first `length` elements of `array`.
///
/// `array` is borrowed once up front. A `length` longer than `array` is
/// rejected instead of reading past the end.
///
/// ```rust
/// use pretty::iter::foreach;
/// let sum: i32 = foreach(&[1, 2, 3], 3)?.sum();
/// assert_eq!(sum, 6);
/// # Ok::<(), pretty::PrettyError>(())
/// ```
pub fn foreach<T>(array: &[T], length: usize) -> Result<Foreach<'_, T>, PrettyError> {
    let cursor = checked_prefix(array.len(), length)?;
    Ok(Foreach {
        base: array,
        cursor,
    })
}

/// Mutable references to the first `length` elements, in index order.
#[derive(Debug)]
pub struct ForeachMut<'a, T> {
    rest: &'a mut [T],
    cursor: Cursor,
}

impl<'a, T> Iterator for ForeachMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.cursor.advance()?;
        let (first, rest) = std::mem::take(&mut self.rest).split_first_mut()?;
        self.rest = rest;
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.cursor.remaining();
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for ForeachMut<'_, T> {}
impl<T> FusedIterator for ForeachMut<'_, T> {}

/// [`foreach`] with mutable bindings.
pub fn foreach_mut<T>(array: &mut [T], length: usize) -> Result<ForeachMut<'_, T>, PrettyError> {
    let cursor = checked_prefix(array.len(), length)?;
    Ok(ForeachMut {
        rest: &mut array[..length],
        cursor,
    })
}

// ============================================================================
// FORTHESE
// ============================================================================

/// Owned iteration over an inline list; the length is the element count.
#[derive(Debug, Clone)]
pub struct Forthese<T, const N: usize> {
    items: std::array::IntoIter<T, N>,
    cursor: Cursor,
}

impl<T, const N: usize> Forthese<T, N> {
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
}

impl<T, const N: usize> Iterator for Forthese<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.cursor.advance()?;
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.cursor.remaining();
        (n, Some(n))
    }
}

impl<T, const N: usize> DoubleEndedIterator for Forthese<T, N> {
    fn next_back(&mut self) -> Option<T> {
        self.cursor.retreat()?;
        self.items.next_back()
    }
}

impl<T, const N: usize> ExactSizeIterator for Forthese<T, N> {}
impl<T, const N: usize> FusedIterator for Forthese<T, N> {}

pub fn forthese<T, const N: usize>(items: [T; N]) -> Forthese<T, N> {
    Forthese {
        items: items.into_iter(),
        cursor: Cursor::new(N),
    }
}

/// `forthese!(1, 2, 3)` or, with an element type, `forthese!(1, 2, 3; u8)`.
///
/// ```rust
/// use pretty::forthese;
/// let sum: i32 = forthese!(1, 2, 3, 4).sum();
/// assert_eq!(sum, 10);
/// let bytes: Vec<u8> = forthese!(1, 2; u8).collect();
/// assert_eq!(bytes, [1, 2]);
/// ```
#[macro_export]
macro_rules! forthese {
    ($($element:expr),+ ; $ty:ty) => {
        $crate::iter::forthese([$({
            let element: $ty = $element;
            element
        }),+])
    };
    ($($element:expr),+ $(,)?) => {
        $crate::iter::forthese([$($element),+])
    };
}
