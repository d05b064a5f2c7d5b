//! Property tests for the summation routine

use better_sum::{sum, sum_with};
use proptest::prelude::*;

proptest! {
    #[test]
    fn sum_matches_native_integer_sum(
        values in proptest::collection::vec(-1_000_000_i64..1_000_000, 0..64)
    ) {
        let expected: i64 = values.iter().sum();
        let total = sum(values).unwrap();
        prop_assert_eq!(total.downcast_ref::<i64>(), Some(&expected));
    }

    #[test]
    fn sum_matches_native_float_fold(
        values in proptest::collection::vec(-1.0e6_f64..1.0e6, 1..64)
    ) {
        // same left-to-right association as the routine's fold
        let expected = values.iter().fold(0.0_f64, |acc, x| acc + x);
        let total = sum(values).unwrap();
        prop_assert_eq!(total.downcast_ref::<f64>(), Some(&expected));
    }

    #[test]
    fn explicit_start_is_a_pure_pass_through(
        values in proptest::collection::vec(-1_000_i64..1_000, 0..32),
        start in -1_000_i64..1_000,
    ) {
        let expected: i64 = start + values.iter().sum::<i64>();
        let total = sum_with(values, start).unwrap();
        prop_assert_eq!(total.downcast_ref::<i64>(), Some(&expected));
    }
}
