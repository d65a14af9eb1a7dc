//! Property tests for the difference-evaluation semantics.

use std::cell::Cell;

use drift::{expect_difference, watch};
use proptest::prelude::*;

proptest! {
    #[test]
    fn an_exact_delta_tracks_any_matching_change(
        before in -1_000i64..=1_000,
        delta in -1_000i64..=1_000,
    ) {
        let value = Cell::new(before);
        let outcome = expect_difference(watch!(value.get()))
            .by(delta)
            .run(|| value.set(value.get() + delta));
        prop_assert!(outcome.is_ok());
    }

    #[test]
    fn a_range_admits_a_change_iff_it_lies_within(
        before in -500i64..=500,
        low in -10i64..=10,
        span in 0i64..=10,
        change in -25i64..=25,
    ) {
        let high = low + span;
        let value = Cell::new(before);
        let outcome = expect_difference(watch!(value.get()))
            .by(low..=high)
            .run(|| value.set(value.get() + change));
        prop_assert_eq!(outcome.is_ok(), low <= change && change <= high);
    }

    // The evaluator itself is side-effect free: probing an unmodified value
    // twice yields the same value, so a zero delta always holds.
    #[test]
    fn an_unchanged_value_satisfies_a_zero_delta(start in any::<i64>()) {
        let value = Cell::new(start);
        let outcome = expect_difference(watch!(value.get())).by(0).run(|| {});
        prop_assert!(outcome.is_ok());
    }

    #[test]
    fn a_missed_exact_delta_reports_expected_and_actual(
        before in -100i64..=100,
        delta in -20i64..=20,
        change in -20i64..=20,
    ) {
        prop_assume!(change != delta);
        let value = Cell::new(before);
        let error = expect_difference(watch!(value.get()))
            .by(delta)
            .run(|| value.set(value.get() + change))
            .unwrap_err();
        let text = error.to_string();
        let expected = format!(
            "(expecting {}, but got {})",
            before + delta,
            before + change
        );
        prop_assert!(text.contains(&expected));
    }
}
