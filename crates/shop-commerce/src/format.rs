//! Price and date formatting for display.
//!
//! Output is fixed to en-US conventions: USD prices and UTC dates.

use crate::money::{Currency, Money};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Rendered in place of a date that could not be interpreted.
pub const INVALID_DATE: &str = "Invalid Date";

/// Format a decimal dollar amount as a USD price (e.g., "$1,234.50").
///
/// Non-finite amounts render as zero. Amounts beyond the range of whole
/// cents in an `i64` (about 92 quadrillion dollars) clamp to its bounds.
pub fn format_price(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    Money::from_decimal(amount, Currency::USD).display()
}

/// A value that may be interpreted as a point in time.
#[derive(Debug, Clone, PartialEq)]
pub enum DateLike {
    /// An already-parsed timestamp.
    Timestamp(DateTime<Utc>),
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// RFC 3339, `YYYY-MM-DDTHH:MM:SS` (read as UTC), or `YYYY-MM-DD`.
    Text(String),
}

impl DateLike {
    /// Resolve to a UTC timestamp, or `None` if the value is not a valid date.
    pub fn resolve(&self) -> Option<DateTime<Utc>> {
        match self {
            DateLike::Timestamp(ts) => Some(*ts),
            DateLike::Millis(ms) => DateTime::from_timestamp_millis(*ms),
            DateLike::Text(text) => parse_date_text(text.trim()),
        }
    }
}

fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

impl From<DateTime<Utc>> for DateLike {
    fn from(ts: DateTime<Utc>) -> Self {
        DateLike::Timestamp(ts)
    }
}

impl From<i64> for DateLike {
    fn from(ms: i64) -> Self {
        DateLike::Millis(ms)
    }
}

impl From<&str> for DateLike {
    fn from(s: &str) -> Self {
        DateLike::Text(s.to_string())
    }
}

impl From<String> for DateLike {
    fn from(s: String) -> Self {
        DateLike::Text(s)
    }
}

/// Format as a long-form date (e.g., "January 5, 2024").
pub fn format_date(value: impl Into<DateLike>) -> String {
    match value.into().resolve() {
        Some(ts) => ts.format("%B %-d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Format as an abbreviated date with time (e.g., "Jan 5, 2024, 03:07 PM").
pub fn format_date_time(value: impl Into<DateLike>) -> String {
    match value.into().resolve() {
        Some(ts) => ts.format("%b %-d, %Y, %I:%M %p").to_string(),
        None => INVALID_DATE.to_string(),
    }
}
