//! Serde helpers for backend quirks.
//!
//! The backend formats times as `YYYY-MM-DD HH:MM:SS` without a zone and
//! sometimes sends `null` where a list is expected.

use jiff::{civil::DateTime, tz::TimeZone, Timestamp};
use serde::{Deserialize, Deserializer, Serializer};

/// Format the backend uses for every timestamp.
pub const BACKEND_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a backend timestamp, accepting ISO 8601 forms as a fallback.
///
/// Returns `None` for empty or unparseable input.
///
/// # Examples
///
/// ```rust
/// use wise_core::models::serde_helpers::parse_backend_datetime;
///
/// let dt = parse_backend_datetime("2024-03-01 08:30:00").unwrap();
/// assert_eq!(dt.hour(), 8);
/// assert!(parse_backend_datetime("").is_none());
/// ```
pub fn parse_backend_datetime(raw: &str) -> Option<DateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DateTime::strptime(BACKEND_DATETIME_FORMAT, raw)
        .ok()
        .or_else(|| raw.parse::<DateTime>().ok())
        .or_else(|| {
            raw.parse::<Timestamp>()
                .ok()
                .map(|ts| ts.to_zoned(TimeZone::UTC).datetime())
        })
}

/// `with`-module for optional backend timestamps.
pub mod backend_datetime {
    use super::*;

    pub fn serialize<S>(value: &Option<DateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.strftime(BACKEND_DATETIME_FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        let parsed = raw.as_deref().and_then(parse_backend_datetime);
        if parsed.is_none() {
            if let Some(raw) = raw.as_deref().filter(|s| !s.trim().is_empty()) {
                log::debug!("Ignoring unparseable timestamp {raw:?}");
            }
        }
        Ok(parsed)
    }
}

/// Deserialize `null` as the type's default value.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
