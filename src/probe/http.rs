//! HTTP probe backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::{redirect, StatusCode};
use tracing::{debug, warn};

use crate::error::{CheckerError, Result};
use crate::outcome::{CheckOutcome, CheckStatus};
use crate::probe::{classify_page, status_message, Probe, ProbeTarget};

/// Request timeout used when none is configured.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

const MAX_REDIRECTS: usize = 5;

const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

const VERIFY_NOTE: &str = "Confirm on the official site before booking";

// == Http Probe ==
/// Fetches appointment pages and classifies them by keyword.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    /// Builds a probe whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("tr-TR,tr;q=0.9,en-US;q=0.8,en;q=0.7"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| CheckerError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    fn base_outcome(target: &ProbeTarget, status: CheckStatus, message: String) -> CheckOutcome {
        CheckOutcome::new(&target.country, status, message, Utc::now())
            .with_subject(&target.city, &target.visa_type)
            .with_url(&target.url)
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn probe(&self, target: &ProbeTarget) -> CheckOutcome {
        debug!(country = %target.country, url = %target.url, "probing appointment page");

        let response = match self.client.get(&target.url).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                warn!(country = %target.country, "appointment page timed out");
                let mut outcome = Self::base_outcome(
                    target,
                    CheckStatus::Timeout,
                    status_message(CheckStatus::Timeout).to_string(),
                );
                outcome.site_reachable = Some(false);
                return outcome;
            }
            Err(e) => {
                warn!(country = %target.country, error = %e, "appointment page request failed");
                return Self::base_outcome(
                    target,
                    CheckStatus::Error,
                    format!("Check failed: {e}"),
                );
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            let mut outcome = Self::base_outcome(
                target,
                CheckStatus::Error,
                format!("Site access problem (HTTP {})", status.as_u16()),
            );
            outcome.site_reachable = Some(false);
            outcome.http_status = Some(status.as_u16());
            return outcome;
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Self::base_outcome(
                    target,
                    CheckStatus::Error,
                    format!("Check failed while reading page: {e}"),
                );
            }
        };

        let classified = classify_page(&body);
        let mut outcome =
            Self::base_outcome(target, classified, status_message(classified).to_string());
        outcome.site_reachable = Some(true);
        outcome.http_status = Some(status.as_u16());
        outcome.note = Some(VERIFY_NOTE.to_string());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(url: &str) -> ProbeTarget {
        ProbeTarget {
            country: "fr".to_string(),
            city: "ankara".to_string(),
            visa_type: "tourist".to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_build_probe() {
        assert!(HttpProbe::new(DEFAULT_PROBE_TIMEOUT).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_error_outcome() {
        let probe = HttpProbe::new(Duration::from_secs(2)).unwrap();

        // Port 9 on loopback (discard) is closed on test machines.
        let outcome = probe.probe(&target("http://127.0.0.1:9/")).await;

        assert!(matches!(
            outcome.status,
            CheckStatus::Error | CheckStatus::Timeout
        ));
        assert_eq!(outcome.country, "fr");
        assert_eq!(outcome.city.as_deref(), Some("ankara"));
        assert_eq!(outcome.url, "http://127.0.0.1:9/");
    }
}
