//! Check Outcome Module
//!
//! The record produced by one appointment probe.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Check Status ==
/// Classification of an appointment page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Booking keywords found, nothing says the calendar is full
    Available,
    /// A "no appointment" style keyword was found
    Full,
    /// Page reachable but not classifiable
    Unknown,
    /// Site unreachable, non-200 answer, or the check was rejected
    Error,
    /// Probe gave up waiting for the site
    Timeout,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Available => "available",
            CheckStatus::Full => "full",
            CheckStatus::Unknown => "unknown",
            CheckStatus::Error => "error",
            CheckStatus::Timeout => "timeout",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Check Outcome ==
/// Result of checking one country (and optionally city/visa type).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Country id, e.g. `fr`
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visa_type: Option<String>,
    pub status: CheckStatus,
    /// Human readable summary
    pub message: String,
    /// Page that was probed, empty when nothing was requested
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_reachable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    pub checked_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CheckOutcome {
    // == Constructor ==
    /// Creates a bare outcome; optional fields start empty.
    pub fn new(
        country: impl Into<String>,
        status: CheckStatus,
        message: impl Into<String>,
        checked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            country: country.into(),
            city: None,
            visa_type: None,
            status,
            message: message.into(),
            url: String::new(),
            site_reachable: None,
            http_status: None,
            checked_at,
            note: None,
        }
    }

    pub fn with_subject(mut self, city: impl Into<String>, visa_type: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self.visa_type = Some(visa_type.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}
