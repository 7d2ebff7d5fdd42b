//! # Bounded Iteration
//!
//! Finite sequences with their bounds fixed at construction:
//!
//! - **`forrange` / `fortimes` / `forrange_by`**: integer ranges, exclusive target
//! - **`foreach` / `foreach_mut`**: the first `length` elements of a slice
//! - **`forthese`**: the elements of an inline list
//!
//! Every call builds a fresh iterator; a consumed iterator stays exhausted.

mod each;
mod range;

pub use each::{foreach, foreach_mut, forthese, Cursor, Foreach, ForeachMut, Forthese};
pub use range::{forrange, forrange_by, fortimes, IntRange, RangeInt};
