//! Request DTOs for the checker API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::checker::CheckOptions;

/// Upper bound on countries in one batch request.
pub const MAX_BATCH_SIZE: usize = 30;

/// Request body for a batch check (POST /check)
#[derive(Debug, Clone, Deserialize)]
pub struct BatchCheckRequest {
    /// Country ids to check, in order
    pub countries: Vec<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub visa_type: Option<String>,
}

impl BatchCheckRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.countries.is_empty() {
            return Some("At least one country is required".to_string());
        }
        if self.countries.len() > MAX_BATCH_SIZE {
            return Some(format!(
                "Batch exceeds maximum of {} countries",
                MAX_BATCH_SIZE
            ));
        }
        if self.countries.iter().any(|c| c.trim().is_empty()) {
            return Some("Country ids cannot be empty".to_string());
        }
        None
    }

    pub fn options(&self) -> CheckOptions {
        CheckOptions {
            city: self.city.clone(),
            visa_type: self.visa_type.clone(),
        }
    }
}

/// Request body for cache settings (PUT /cache)
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfigRequest {
    #[serde(default)]
    pub enabled: Option<bool>,
    /// New default TTL in seconds
    #[serde(default)]
    pub ttl: Option<u64>,
}

impl CacheConfigRequest {
    pub fn validate(&self) -> Option<String> {
        if self.enabled.is_none() && self.ttl.is_none() {
            return Some("Nothing to update: provide enabled and/or ttl".to_string());
        }
        if self.ttl == Some(0) {
            return Some("TTL must be greater than zero".to_string());
        }
        None
    }
}

/// Query string for visa centre listing (GET /centres)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CityQuery {
    #[serde(default)]
    pub city: Option<String>,
}
