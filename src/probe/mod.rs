//! Probe Module
//!
//! Fetches a visa centre's appointment page and turns it into a
//! [`CheckOutcome`].

mod classify;
mod http;

use async_trait::async_trait;

use crate::outcome::CheckOutcome;

pub use classify::{classify_page, status_message, AVAILABLE_KEYWORDS, FULL_KEYWORDS};
pub use http::{HttpProbe, DEFAULT_PROBE_TIMEOUT};

// == Probe Target ==
/// What to check and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    pub country: String,
    pub city: String,
    pub visa_type: String,
    /// Appointment page of the country's visa centre
    pub url: String,
}

// == Probe Trait ==
/// Source of check outcomes.
///
/// Implementations report failures as `error`/`timeout` outcomes rather
/// than returning errors.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, target: &ProbeTarget) -> CheckOutcome;
}
