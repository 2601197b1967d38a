//! Response DTOs for the checker API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::catalog::{CentreKind, VisaCentre};
use crate::outcome::CheckOutcome;
use crate::statistics::AggregateStatistics;

/// Response body for a batch check (POST /check)
#[derive(Debug, Clone, Serialize)]
pub struct BatchCheckResponse {
    pub count: usize,
    pub results: Vec<CheckOutcome>,
}

impl BatchCheckResponse {
    pub fn new(results: Vec<CheckOutcome>) -> Self {
        Self {
            count: results.len(),
            results,
        }
    }
}

/// Response body for the statistics endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub statistics: AggregateStatistics,
    /// Successful checks over all checks, percentage
    pub success_rate: f64,
    /// Cached answers over all answers, percentage
    pub cache_hit_rate: f64,
}

/// Response body for the cache endpoints (GET/PUT /cache)
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    #[serde(flatten)]
    pub stats: CacheStats,
    /// Hit rate formatted for display, e.g. "66.67%"
    pub hit_rate_label: String,
}

impl From<CacheStats> for CacheStatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate_label: stats.hit_rate_label(),
            stats,
        }
    }
}

/// One row of the visa centre listing (GET /centres)
#[derive(Debug, Clone, Serialize)]
pub struct CentreSummary {
    pub country: &'static str,
    pub url: &'static str,
    pub kind: CentreKind,
    pub cities: &'static [&'static str],
    /// Phone of the office in the queried city, if one was queried
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'static str>,
}

impl CentreSummary {
    pub fn new(centre: &'static VisaCentre, city: Option<&str>) -> Self {
        Self {
            country: centre.country,
            url: centre.url,
            kind: centre.kind,
            cities: centre.cities,
            phone: city.and_then(|c| centre.phone(c)),
        }
    }
}

/// Acknowledgement for state-changing calls without a richer body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
