//! Statistics Tracker Module
//!
//! Reduces the stream of check outcomes to counters, a rolling latency
//! average and per-country tallies.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::CountryLookup;
use crate::clock::{SharedClock, SystemClock};
use crate::outcome::{CheckOutcome, CheckStatus};
use crate::statistics::LatencyWindow;

/// Maximum number of entries in `most_checked_countries`.
pub const MOST_CHECKED_LIMIT: usize = 10;

/// Flag shown for countries missing from the lookup.
pub const FALLBACK_FLAG: &str = "🏳️";

// == Country Stat ==
/// Raw per-country counters. Rates are derived on read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CountryStat {
    pub checks: u64,
    pub successes: u64,
    pub total_response_time_ms: u64,
}

impl CountryStat {
    /// Successes over checks as a percentage, 0 with no checks.
    pub fn success_rate(&self) -> f64 {
        if self.checks == 0 {
            0.0
        } else {
            self.successes as f64 / self.checks as f64 * 100.0
        }
    }

    /// Rounded mean response time, 0 with no checks.
    pub fn average_response_time(&self) -> u64 {
        if self.checks == 0 {
            0
        } else {
            (self.total_response_time_ms as f64 / self.checks as f64).round() as u64
        }
    }
}

// == Country Report ==
/// Per-country statistics decorated with display metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryReport {
    pub country: String,
    pub country_name: String,
    pub flag: String,
    pub check_count: u64,
    /// Percentage (0-100)
    pub success_rate: f64,
    /// Milliseconds
    pub average_response_time: u64,
}

// == Aggregate Statistics ==
/// Snapshot returned by [`StatisticsTracker::statistics`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateStatistics {
    pub total_checks: u64,
    pub successful_checks: u64,
    pub failed_checks: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    /// Rounded mean of the last 100 response times, in milliseconds
    pub average_response_time: u64,
    pub most_checked_countries: Vec<CountryReport>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default)]
struct Counters {
    total_checks: u64,
    successful_checks: u64,
    failed_checks: u64,
    cache_hits: u64,
    cache_misses: u64,
}

// == Statistics Tracker ==
/// Accumulates check outcomes in bounded memory.
///
/// Like the result cache, this holds no lock; callers sharing it across
/// tasks must serialize access.
#[derive(Debug)]
pub struct StatisticsTracker {
    counters: Counters,
    latencies: LatencyWindow,
    /// Per-country tallies in first-recorded order
    countries: Vec<(String, CountryStat)>,
    /// Country key -> position in `countries`
    index: HashMap<String, usize>,
    last_updated: DateTime<Utc>,
    lookup: Option<Arc<dyn CountryLookup>>,
    clock: SharedClock,
}

impl StatisticsTracker {
    // == Constructor ==
    /// Creates an empty tracker on the system clock, without display lookup.
    pub fn new() -> Self {
        let clock: SharedClock = Arc::new(SystemClock);
        Self {
            counters: Counters::default(),
            latencies: LatencyWindow::default(),
            countries: Vec::new(),
            index: HashMap::new(),
            last_updated: clock.now_utc(),
            lookup: None,
            clock,
        }
    }

    /// Resolves country names and flags through `lookup`.
    pub fn with_lookup(mut self, lookup: Arc<dyn CountryLookup>) -> Self {
        self.lookup = Some(lookup);
        self
    }

    /// Reads time from `clock`.
    pub fn with_clock(mut self, clock: SharedClock) -> Self {
        self.last_updated = clock.now_utc();
        self.clock = clock;
        self
    }

    // == Record Check ==
    /// Folds one outcome into the statistics.
    pub fn record_check(
        &mut self,
        outcome: &CheckOutcome,
        response_time_ms: u64,
        from_cache: bool,
    ) {
        self.counters.total_checks += 1;

        if matches!(
            outcome.status,
            CheckStatus::Available | CheckStatus::Full | CheckStatus::Unknown
        ) {
            self.counters.successful_checks += 1;
        } else {
            self.counters.failed_checks += 1;
        }

        if from_cache {
            self.counters.cache_hits += 1;
        } else {
            self.counters.cache_misses += 1;
        }

        self.latencies.push(response_time_ms);

        // Per-country success is its own predicate, kept apart from the
        // global classification above.
        let succeeded =
            outcome.status != CheckStatus::Error && outcome.status != CheckStatus::Timeout;
        self.update_country(&outcome.country, succeeded, response_time_ms);

        self.last_updated = self.clock.now_utc();
    }

    fn update_country(&mut self, country: &str, succeeded: bool, response_time_ms: u64) {
        let position = match self.index.get(country) {
            Some(&position) => position,
            None => {
                self.countries.push((country.to_string(), CountryStat::default()));
                let position = self.countries.len() - 1;
                self.index.insert(country.to_string(), position);
                position
            }
        };

        let stat = &mut self.countries[position].1;
        stat.checks += 1;
        if succeeded {
            stat.successes += 1;
        }
        stat.total_response_time_ms = stat.total_response_time_ms.saturating_add(response_time_ms);
    }

    // == Statistics ==
    /// Returns the aggregate counters and a freshly ranked top-10.
    pub fn statistics(&self) -> AggregateStatistics {
        AggregateStatistics {
            total_checks: self.counters.total_checks,
            successful_checks: self.counters.successful_checks,
            failed_checks: self.counters.failed_checks,
            cache_hits: self.counters.cache_hits,
            cache_misses: self.counters.cache_misses,
            average_response_time: self.latencies.average(),
            most_checked_countries: self.most_checked_countries(),
            last_updated: self.last_updated,
        }
    }

    /// Countries ranked by check count, at most [`MOST_CHECKED_LIMIT`].
    ///
    /// Ties keep first-recorded order.
    pub fn most_checked_countries(&self) -> Vec<CountryReport> {
        let mut ranked: Vec<&(String, CountryStat)> = self.countries.iter().collect();
        ranked.sort_by(|a, b| b.1.checks.cmp(&a.1.checks));
        ranked
            .into_iter()
            .take(MOST_CHECKED_LIMIT)
            .map(|(country, stat)| self.report(country, stat))
            .collect()
    }

    // == Country Statistics ==
    /// Decorated statistics for one country, `None` if it was never checked.
    pub fn country_statistics(&self, country: &str) -> Option<CountryReport> {
        let &position = self.index.get(country)?;
        let (key, stat) = &self.countries[position];
        Some(self.report(key, stat))
    }

    /// Raw counters for one country.
    pub fn country_counters(&self, country: &str) -> Option<CountryStat> {
        self.index
            .get(country)
            .map(|&position| self.countries[position].1)
    }

    fn report(&self, country: &str, stat: &CountryStat) -> CountryReport {
        let config = self.lookup.as_ref().and_then(|l| l.country(country));
        CountryReport {
            country: country.to_string(),
            country_name: config.map_or_else(|| country.to_string(), |c| c.name.to_string()),
            flag: config.map_or(FALLBACK_FLAG, |c| c.flag).to_string(),
            check_count: stat.checks,
            success_rate: stat.success_rate(),
            average_response_time: stat.average_response_time(),
        }
    }

    // == Reset ==
    /// Zeroes every counter and forgets all countries and samples.
    pub fn reset(&mut self) {
        self.counters = Counters::default();
        self.latencies.clear();
        self.countries.clear();
        self.index.clear();
        self.last_updated = self.clock.now_utc();
    }

    // == Rates ==
    /// Successful checks over all checks, as a percentage.
    pub fn success_rate(&self) -> f64 {
        if self.counters.total_checks == 0 {
            return 0.0;
        }
        self.counters.successful_checks as f64 / self.counters.total_checks as f64 * 100.0
    }

    /// Cached answers over all answers, as a percentage.
    pub fn cache_hit_rate(&self) -> f64 {
        let total = self.counters.cache_hits + self.counters.cache_misses;
        if total == 0 {
            return 0.0;
        }
        self.counters.cache_hits as f64 / total as f64 * 100.0
    }
}

impl Default for StatisticsTracker {
    fn default() -> Self {
        Self::new()
    }
}
