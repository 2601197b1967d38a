//! Statistics Module
//!
//! Rolling check statistics: global counters, a windowed latency average
//! and per-country tallies.

mod tracker;
mod window;

#[cfg(test)]
mod property_tests;

pub use tracker::{
    AggregateStatistics, CountryReport, CountryStat, StatisticsTracker, FALLBACK_FLAG,
    MOST_CHECKED_LIMIT,
};
pub use window::{LatencyWindow, LATENCY_WINDOW_SIZE};
