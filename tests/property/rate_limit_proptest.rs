//! Property-based tests for the password reset rate limit

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use so_quotable::backend::recovery::{FixedWindow, WindowDecision};

proptest! {
    #[test]
    fn test_count_never_exceeds_limit(
        gaps in prop::collection::vec(0i64..7200, 1..20),
    ) {
        let window = FixedWindow::password_reset();
        let mut now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let mut count = 0i64;
        let mut last = None;

        for gap in gaps {
            now += Duration::seconds(gap);
            if let WindowDecision::Allowed { count: next } = window.check(count, last, now) {
                count = next;
                last = Some(now);
            }
            prop_assert!((1..=3).contains(&count));
        }
    }

    #[test]
    fn test_elapsed_window_always_allows(count in 0i64..10, extra in 0i64..100_000) {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let last = now - Duration::hours(1) - Duration::seconds(extra);
        prop_assert_eq!(
            FixedWindow::password_reset().check(count, Some(last), now),
            WindowDecision::Allowed { count: 1 }
        );
    }

    #[test]
    fn test_inside_window_is_limited_at_cap(seconds_ago in 0i64..3600) {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let last = now - Duration::seconds(seconds_ago);
        prop_assert_eq!(
            FixedWindow::password_reset().check(3, Some(last), now),
            WindowDecision::Limited
        );
    }
}
