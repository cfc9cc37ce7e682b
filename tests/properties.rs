//! Property checks for ordering, range membership and date arithmetic.

use chrono::{NaiveDate, NaiveDateTime};
use dateutils::dateutils::{add, is_date_before, is_same_day, is_within_range};
use dateutils::time::period::DateUnit;
use proptest::prelude::*;

// Day capped at 28 so month and year shifts never clamp.
fn instant_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (1900i32..2200i32, 1u32..13u32, 1u32..29u32, 0u32..24u32, 0u32..60u32, 0u32..60u32)
        .prop_map(|(year, month, day, h, m, s)| {
            NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(h, m, s)
                .unwrap()
        })
}

fn unit_strategy() -> impl Strategy<Value = DateUnit> {
    prop::sample::select(DateUnit::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn same_day_ignores_time_of_day(d in instant_strategy(), h in 0u32..24u32, m in 0u32..60u32) {
        let other = d.date().and_hms_opt(h, m, 0).unwrap();
        prop_assert!(is_same_day(d, other).unwrap());
        prop_assert!(is_same_day(d, d).unwrap());
    }

    #[test]
    fn before_is_a_strict_order(a in instant_strategy(), b in instant_strategy()) {
        prop_assume!(a != b);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        prop_assert!(is_date_before(lo, hi).unwrap());
        prop_assert!(!is_date_before(hi, lo).unwrap());
    }

    #[test]
    fn add_then_subtract_round_trips(d in instant_strategy(), n in -600i64..600i64, unit in unit_strategy()) {
        let there = add(d, n as f64, unit).unwrap();
        let back = add(there, -(n as f64), unit).unwrap();
        prop_assert_eq!(back, d);
    }

    #[test]
    fn within_range_matches_comparison(d in instant_strategy(), a in instant_strategy(), b in instant_strategy()) {
        let (from, to) = if a <= b { (a, b) } else { (b, a) };
        prop_assert_eq!(is_within_range(d, from, to).unwrap(), from <= d && d <= to);
        prop_assert!(is_within_range(from, from, to).unwrap());
        prop_assert!(is_within_range(to, from, to).unwrap());
    }

    #[test]
    fn inverted_range_always_fails(d in instant_strategy(), a in instant_strategy(), b in instant_strategy()) {
        prop_assume!(a != b);
        let (from, to) = if a > b { (a, b) } else { (b, a) };
        prop_assert!(is_within_range(d, from, to).unwrap_err().is_invalid_argument());
    }
}
