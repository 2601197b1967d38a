//! Keyword classification of appointment pages.

use crate::outcome::CheckStatus;

/// Phrases that mean the calendar has no free slot. Checked first.
pub const FULL_KEYWORDS: [&str; 4] = ["no appointment", "randevu yok", "dolu", "full"];

/// Phrases that suggest the booking system is open.
pub const AVAILABLE_KEYWORDS: [&str; 4] = ["available", "müsait", "musait", "appointment"];

/// Classifies a page body as full, available or unknown.
///
/// Matching is case-insensitive substring search. "Full" phrases win over
/// "available" ones, since "no appointment" also contains "appointment".
pub fn classify_page(body: &str) -> CheckStatus {
    let html = body.to_lowercase();

    if FULL_KEYWORDS.iter().any(|k| html.contains(k)) {
        CheckStatus::Full
    } else if AVAILABLE_KEYWORDS.iter().any(|k| html.contains(k)) {
        CheckStatus::Available
    } else {
        CheckStatus::Unknown
    }
}

/// Message shown alongside a classified page.
pub fn status_message(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Full => "No appointments available right now",
        CheckStatus::Available => {
            "Appointment system is active - visit the site for open slots"
        }
        CheckStatus::Unknown => "Site reachable but appointment status could not be determined",
        CheckStatus::Error => "Appointment site returned an error",
        CheckStatus::Timeout => "Site did not respond (timeout)",
    }
}
