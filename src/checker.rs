//! Checker Module
//!
//! Facade that answers appointment checks from the result cache when it
//! can, probes the visa centre when it cannot, and feeds every answer into
//! the statistics tracker.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::cache::{CacheOptions, CacheStats, ResultCache};
use crate::catalog::{Catalog, DEFAULT_VISA_TYPE};
use crate::clock::{SharedClock, SystemClock};
use crate::error::{CheckerError, Result};
use crate::outcome::{CheckOutcome, CheckStatus};
use crate::probe::{Probe, ProbeTarget};
use crate::statistics::{AggregateStatistics, CountryReport, StatisticsTracker};

const UNSUPPORTED_MESSAGE: &str = "Automatic checks are not supported for this country yet";

// == Checker Options ==
/// Construction-time checker settings.
#[derive(Debug, Clone)]
pub struct CheckerOptions {
    pub cache: CacheOptions,
    pub statistics_enabled: bool,
    /// City used when a check does not name one
    pub default_city: String,
    /// Pause between consecutive checks of a batch
    pub rate_limit: Duration,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        Self {
            cache: CacheOptions::default(),
            statistics_enabled: true,
            default_city: "ankara".to_string(),
            rate_limit: Duration::from_secs(2),
        }
    }
}

// == Check Options ==
/// Per-check overrides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckOptions {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub visa_type: Option<String>,
}

/// Builds the cache key for a (country, city, visa type) subject.
pub fn cache_key(country: &str, city: &str, visa_type: &str) -> String {
    format!(
        "{}:{}:{}",
        country.to_lowercase(),
        city.to_lowercase(),
        visa_type.to_lowercase()
    )
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

// == Checker ==
/// Owns one result cache and one statistics tracker.
///
/// Checks run one at a time (`&mut self`); share a checker between tasks
/// through a mutex.
pub struct Checker {
    cache: ResultCache<CheckOutcome>,
    stats: StatisticsTracker,
    probe: Arc<dyn Probe>,
    catalog: Catalog,
    clock: SharedClock,
    statistics_enabled: bool,
    default_city: String,
    rate_limit: Duration,
}

impl Checker {
    // == Constructor ==
    pub fn new(options: CheckerOptions, probe: Arc<dyn Probe>) -> Self {
        Self::with_clock(options, probe, Arc::new(SystemClock))
    }

    /// Creates a checker whose cache, statistics and latency timing all read
    /// from `clock`.
    pub fn with_clock(options: CheckerOptions, probe: Arc<dyn Probe>, clock: SharedClock) -> Self {
        let catalog = Catalog;
        Self {
            cache: ResultCache::with_clock(options.cache, clock.clone()),
            stats: StatisticsTracker::new()
                .with_lookup(Arc::new(catalog))
                .with_clock(clock.clone()),
            probe,
            catalog,
            clock,
            statistics_enabled: options.statistics_enabled,
            default_city: normalize(&options.default_city),
            rate_limit: options.rate_limit,
        }
    }

    pub fn is_schengen(&self, country: &str) -> bool {
        self.catalog.is_schengen(country.trim())
    }

    // == Check ==
    /// Checks appointment availability for one country.
    ///
    /// Fails only for non-Schengen countries. A Schengen country without a
    /// known visa centre yields an `unknown` outcome that is neither probed,
    /// cached nor counted.
    pub async fn check(&mut self, country: &str, options: &CheckOptions) -> Result<CheckOutcome> {
        let country = normalize(country);
        if !self.catalog.is_schengen(&country) {
            return Err(CheckerError::NotSchengen(country));
        }

        let Some(centre) = self.catalog.visa_centre(&country) else {
            debug!(country = %country, "no visa centre on file, skipping probe");
            return Ok(CheckOutcome::new(
                country,
                CheckStatus::Unknown,
                UNSUPPORTED_MESSAGE,
                self.clock.now_utc(),
            ));
        };

        let city = options
            .city
            .as_deref()
            .map(normalize)
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| self.default_city.clone());
        let visa_type = options
            .visa_type
            .as_deref()
            .map(normalize)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_VISA_TYPE.to_string());
        let key = cache_key(&country, &city, &visa_type);

        let started = self.clock.now_ms();

        if let Some(cached) = self.cache.get(&key) {
            let elapsed = self.clock.now_ms().saturating_sub(started);
            debug!(key = %key, status = %cached.status, "answered from cache");
            self.record(&cached, elapsed, true);
            return Ok(cached);
        }

        let target = ProbeTarget {
            country: country.clone(),
            city,
            visa_type,
            url: centre.url.to_string(),
        };
        let outcome = self.probe.probe(&target).await;
        let elapsed = self.clock.now_ms().saturating_sub(started);

        self.cache.set(key, outcome.clone(), None);
        self.record(&outcome, elapsed, false);

        info!(
            country = %country,
            status = %outcome.status,
            elapsed_ms = elapsed,
            "appointment check finished"
        );
        Ok(outcome)
    }

    fn record(&mut self, outcome: &CheckOutcome, elapsed_ms: u64, from_cache: bool) {
        if self.statistics_enabled {
            self.stats.record_check(outcome, elapsed_ms, from_cache);
        }
    }

    // == Batch Checks ==
    /// Checks countries one after another, pausing `rate_limit` between them.
    ///
    /// Rejected countries become `error` outcomes instead of aborting the batch.
    pub async fn check_many<S: AsRef<str>>(
        &mut self,
        countries: &[S],
        options: &CheckOptions,
    ) -> Vec<CheckOutcome> {
        let mut outcomes = Vec::with_capacity(countries.len());

        for (i, country) in countries.iter().enumerate() {
            if i > 0 && !self.rate_limit.is_zero() {
                tokio::time::sleep(self.rate_limit).await;
            }
            outcomes.push(self.check_or_error(country.as_ref(), options).await);
        }

        outcomes
    }

    /// Like [`Checker::check`], folding a rejection into an `error` outcome.
    pub async fn check_or_error(&mut self, country: &str, options: &CheckOptions) -> CheckOutcome {
        debug!(country = %country, "checking");
        match self.check(country, options).await {
            Ok(outcome) => outcome,
            Err(e) => CheckOutcome::new(
                normalize(country),
                CheckStatus::Error,
                e.to_string(),
                self.clock.now_utc(),
            ),
        }
    }

    /// Checks every country that has a visa centre on file.
    pub async fn check_all(&mut self, options: &CheckOptions) -> Vec<CheckOutcome> {
        let countries: Vec<&'static str> = self
            .catalog
            .visa_centres()
            .iter()
            .map(|c| c.country)
            .collect();
        info!(count = countries.len(), "checking all supported countries");
        self.check_many(&countries, options).await
    }

    // == Cache Management ==
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn set_cache_enabled(&mut self, enabled: bool) {
        self.cache.set_enabled(enabled);
    }

    pub fn set_cache_ttl(&mut self, ttl: Duration) {
        self.cache.set_ttl(ttl);
    }

    /// Drops stale cache entries, returning how many were removed.
    pub fn clear_expired_cache(&mut self) -> usize {
        self.cache.clear_expired()
    }

    // == Statistics ==
    pub fn statistics(&self) -> AggregateStatistics {
        self.stats.statistics()
    }

    pub fn country_statistics(&self, country: &str) -> Option<CountryReport> {
        self.stats.country_statistics(&normalize(country))
    }

    pub fn reset_statistics(&mut self) {
        self.stats.reset();
    }

    pub fn success_rate(&self) -> f64 {
        self.stats.success_rate()
    }

    pub fn cache_hit_rate(&self) -> f64 {
        self.stats.cache_hit_rate()
    }

    pub fn statistics_enabled(&self) -> bool {
        self.statistics_enabled
    }

    pub fn set_statistics_enabled(&mut self, enabled: bool) {
        self.statistics_enabled = enabled;
    }

    /// Pause between consecutive checks of a batch.
    pub fn rate_limit(&self) -> Duration {
        self.rate_limit
    }

    // == Reference Data ==
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

// == Shared Batch Checks ==
/// Batch check against a checker shared behind a mutex.
///
/// The lock is taken for each check and released during the pauses, so
/// other callers get in between countries.
pub async fn check_many_shared<S: AsRef<str>>(
    checker: &Mutex<Checker>,
    countries: &[S],
    options: &CheckOptions,
) -> Vec<CheckOutcome> {
    let mut outcomes = Vec::with_capacity(countries.len());

    for (i, country) in countries.iter().enumerate() {
        if i > 0 {
            let pause = checker.lock().await.rate_limit();
            if !pause.is_zero() {
                tokio::time::sleep(pause).await;
            }
        }

        let outcome = checker
            .lock()
            .await
            .check_or_error(country.as_ref(), options)
            .await;
        outcomes.push(outcome);
    }

    outcomes
}
