//! Bounded iteration: ranges, counted loops, slice prefixes and inline lists.

use pretty::iter::{Cursor, IntRange};
use pretty::{foreach, foreach_mut, forrange, forrange_by, forthese, fortimes, PrettyError};

#[cfg(test)]
mod range_tests {
    use super::*;

    #[test]
    fn test_forrange_is_exclusive_both_ways() {
        assert_eq!(forrange(0, 5).collect::<Vec<i32>>(), [0, 1, 2, 3, 4]);
        assert_eq!(forrange(5, 0).collect::<Vec<i32>>(), [5, 4, 3, 2, 1]);
        assert_eq!(forrange(7u64, 7).count(), 0);
    }

    #[test]
    fn test_forrange_at_type_limits() {
        let tail: Vec<u64> = forrange(u64::MAX - 2, u64::MAX).collect();
        assert_eq!(tail, [u64::MAX - 2, u64::MAX - 1]);
        let head: Vec<i64> = forrange(i64::MIN + 2, i64::MIN).collect();
        assert_eq!(head, [i64::MIN + 2, i64::MIN + 1]);
        assert_eq!(forrange(i16::MIN, i16::MAX).remaining(), 65535);
    }

    #[test]
    fn test_fortimes_counts_from_zero() {
        assert_eq!(fortimes(4u8).collect::<Vec<_>>(), [0, 1, 2, 3]);
        assert_eq!(fortimes(-1).count(), 0);
        assert_eq!(fortimes(0usize).count(), 0);
    }

    #[test]
    fn test_stepped_range_direction_comes_from_bounds() {
        let up: Vec<i32> = forrange_by(1, 10, -4).expect("non-zero step").collect();
        assert_eq!(up, [1, 5, 9]);
        let down: Vec<i32> = forrange_by(10, 1, 4).expect("non-zero step").collect();
        assert_eq!(down, [10, 6, 2]);
        let top: Vec<u8> = forrange_by(200u8, 255, 50).expect("non-zero step").collect();
        assert_eq!(top, [200, 250]);
    }

    #[test]
    fn test_zero_step_is_rejected() {
        let err = forrange_by(0u32, 3, 0).expect_err("zero step");
        assert!(matches!(err, PrettyError::ZeroStep { .. }));
    }

    #[test]
    fn test_each_call_builds_a_fresh_sequence() {
        let make = || forrange(0, 3);
        let mut first: IntRange<i32> = make();
        first.by_ref().for_each(drop);
        assert_eq!(first.next(), None);
        assert_eq!(make().collect::<Vec<_>>(), [0, 1, 2]);
    }
}

#[cfg(test)]
mod element_tests {
    use super::*;

    #[test]
    fn test_foreach_sums_prefix() {
        let total: i32 = foreach(&[1, 2, 3], 3).expect("in bounds").sum();
        assert_eq!(total, 6);
        let partial: i32 = foreach(&[1, 2, 3], 2).expect("in bounds").sum();
        assert_eq!(partial, 3);
    }

    #[test]
    fn test_forthese_sums_literals() {
        let total: i32 = forthese([1, 2, 3, 4]).sum();
        assert_eq!(total, 10);
        let total: i32 = pretty::forthese!(1, 2, 3, 4).sum();
        assert_eq!(total, 10);
    }

    #[test]
    fn test_foreach_bound_violation() {
        let data = vec![0u8; 4];
        match foreach(&data, 5) {
            Err(PrettyError::IterationBound {
                length, available, ..
            }) => assert_eq!((length, available), (5, 4)),
            other => panic!("expected a bound violation, got {other:?}"),
        }
    }

    #[test]
    fn test_foreach_mut_leaves_the_tail() {
        let mut words = vec![String::from("a"), String::from("b"), String::from("c")];
        for word in foreach_mut(&mut words, 2).expect("in bounds") {
            word.make_ascii_uppercase();
        }
        assert_eq!(words, ["A", "B", "c"]);
    }

    #[test]
    fn test_cursor_never_passes_bound() {
        let mut each = foreach(&[1, 2], 2).expect("in bounds");
        each.by_ref().for_each(drop);
        assert_eq!(each.cursor().offset(), each.cursor().bound());
        assert_eq!(each.next(), None);
        assert_eq!(each.cursor().remaining(), 0);
        assert_eq!(Cursor::new(3).remaining(), 3);
    }
}
