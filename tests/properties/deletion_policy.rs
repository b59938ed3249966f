//! Property tests for the age-gated deletion policy.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use trash_empty::{AgeThreshold, DeletionPolicy};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("valid fixed date")
}

fn trashinfo(deleted: NaiveDateTime) -> String {
    format!(
        "[Trash Info]\nPath=/p\nDeletionDate={}\n",
        deleted.format("%Y-%m-%dT%H:%M:%S")
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: An entry is deleted exactly when it was trashed strictly
    /// before `now - days`.
    #[test]
    fn property_delete_iff_strictly_older_than_cutoff(
        days in 0u32..400,
        age_secs in 0i64..(500 * 86_400),
    ) {
        let deleted = now() - Duration::seconds(age_secs);
        let policy = DeletionPolicy::older_than(AgeThreshold::days(days), now());

        let expected = age_secs > i64::from(days) * 86_400;

        prop_assert_eq!(policy.judge(&trashinfo(deleted)).is_delete(), expected);
    }

    /// PROPERTY: Lowering the threshold never rescues an entry.
    #[test]
    fn property_smaller_threshold_deletes_superset(
        a in 0u32..100,
        b in 0u32..100,
        age_secs in 0i64..(120 * 86_400),
    ) {
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        let contents = trashinfo(now() - Duration::seconds(age_secs));

        let by_large = DeletionPolicy::older_than(AgeThreshold::days(large), now())
            .judge(&contents)
            .is_delete();
        let by_small = DeletionPolicy::older_than(AgeThreshold::days(small), now())
            .judge(&contents)
            .is_delete();

        prop_assert!(!by_large || by_small);
    }

    /// PROPERTY: Without a threshold the contents are irrelevant.
    #[test]
    fn property_unconditional_deletes_anything(contents in ".{0,120}") {
        prop_assert!(DeletionPolicy::Unconditional.judge(&contents).is_delete());
    }
}
