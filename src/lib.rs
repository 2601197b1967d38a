//! Schengen Watch - Schengen visa appointment availability checker
//!
//! Probes visa centre booking pages, caches the outcomes for a while and
//! keeps running statistics about every check.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod checker;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod outcome;
pub mod probe;
pub mod statistics;
pub mod tasks;

pub use api::{create_router, AppState};
pub use cache::{CacheOptions, CacheStats, ResultCache};
pub use catalog::Catalog;
pub use checker::{CheckOptions, Checker, CheckerOptions};
pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use config::Config;
pub use error::{CheckerError, Result};
pub use outcome::{CheckOutcome, CheckStatus};
pub use probe::{HttpProbe, Probe, ProbeTarget};
pub use statistics::{AggregateStatistics, CountryReport, StatisticsTracker};
pub use tasks::spawn_cleanup_task;
