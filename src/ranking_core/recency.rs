//! Recency decay and post age computation

use chrono::{DateTime, Utc};

/// Default decay constant in hours.
pub const DEFAULT_DECAY_HOURS: f64 = 12.0;

/// Parse an ISO-8601 timestamp with offset ("Z" or numeric).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Elapsed hours between `published_at` and `now`.
///
/// A missing or unparseable timestamp means the post is treated as published
/// at `now` (elapsed 0). This is a data-quality fallback, not an error.
fn hours_since_publish(published_at: Option<&str>, now: DateTime<Utc>) -> f64 {
    match published_at.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => match parse_timestamp(raw) {
            Some(dt) => (now - dt).num_milliseconds() as f64 / 3_600_000.0,
            None => {
                log::debug!("Unparseable published_at {:?}, treating as now", raw);
                0.0
            }
        },
        None => 0.0,
    }
}

/// Exponentially decayed freshness signal: `exp(-hours_since_publish / decay_hours)`.
///
/// The raw values are meant to be min-max normalized against the rest of the
/// comparison set before they enter the composite score.
pub fn raw_recency(published_at: Option<&str>, now: DateTime<Utc>, decay_hours: f64) -> f64 {
    (-hours_since_publish(published_at, now) / decay_hours).exp()
}

/// Elapsed days since publication, 0.0 when the timestamp is missing or bad.
pub fn age_days(published_at: Option<&str>, now: DateTime<Utc>) -> f64 {
    hours_since_publish(published_at, now) / 24.0
}
