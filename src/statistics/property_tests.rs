//! Property-Based Tests for Statistics Module
//!
//! Uses proptest to check the tracker's counter arithmetic and the rolling
//! latency average.

use proptest::prelude::*;

use chrono::Utc;

use crate::outcome::{CheckOutcome, CheckStatus};
use crate::statistics::{StatisticsTracker, LATENCY_WINDOW_SIZE};

// == Strategies ==
fn status_strategy() -> impl Strategy<Value = CheckStatus> {
    prop_oneof![
        Just(CheckStatus::Available),
        Just(CheckStatus::Full),
        Just(CheckStatus::Unknown),
        Just(CheckStatus::Error),
        Just(CheckStatus::Timeout),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Global counters partition total checks, and the rates follow them.
    #[test]
    fn prop_tracker_counters(
        checks in prop::collection::vec((status_strategy(), 0u64..5_000, any::<bool>()), 1..150),
    ) {
        let mut tracker = StatisticsTracker::new();
        let mut expected_success = 0u64;
        let mut expected_hits = 0u64;

        for (status, ms, from_cache) in &checks {
            let outcome = CheckOutcome::new("fr", *status, "", Utc::now());
            tracker.record_check(&outcome, *ms, *from_cache);
            if matches!(status, CheckStatus::Available | CheckStatus::Full | CheckStatus::Unknown) {
                expected_success += 1;
            }
            if *from_cache {
                expected_hits += 1;
            }
        }

        let stats = tracker.statistics();
        let total = checks.len() as u64;
        prop_assert_eq!(stats.total_checks, total);
        prop_assert_eq!(stats.successful_checks, expected_success);
        prop_assert_eq!(stats.successful_checks + stats.failed_checks, total);
        prop_assert_eq!(stats.cache_hits + stats.cache_misses, total);

        let rate = expected_success as f64 / total as f64 * 100.0;
        prop_assert!((tracker.success_rate() - rate).abs() < 1e-9);
        let hit_rate = expected_hits as f64 / total as f64 * 100.0;
        prop_assert!((tracker.cache_hit_rate() - hit_rate).abs() < 1e-9);

        // Window average over the most recent samples only.
        let window: Vec<u64> = checks
            .iter()
            .rev()
            .take(LATENCY_WINDOW_SIZE)
            .map(|(_, ms, _)| *ms)
            .collect();
        let mean = (window.iter().sum::<u64>() as f64 / window.len() as f64).round() as u64;
        prop_assert_eq!(stats.average_response_time, mean);
    }

    // Any latency is accepted; the per-country total saturates instead of wrapping.
    #[test]
    fn prop_any_latency_is_recorded(latencies in prop::collection::vec(any::<u64>(), 1..20)) {
        let mut tracker = StatisticsTracker::new();

        for ms in &latencies {
            let outcome = CheckOutcome::new("de", CheckStatus::Full, "", Utc::now());
            tracker.record_check(&outcome, *ms, false);
        }

        let exact: u128 = latencies.iter().map(|&ms| u128::from(ms)).sum();
        let expected_total = u64::try_from(exact).unwrap_or(u64::MAX);
        let de = tracker.country_counters("de").unwrap();
        prop_assert_eq!(de.checks, latencies.len() as u64);
        prop_assert_eq!(de.total_response_time_ms, expected_total);

        let mean = (exact as f64 / latencies.len() as f64).round() as u64;
        prop_assert_eq!(tracker.statistics().average_response_time, mean);
    }
}
