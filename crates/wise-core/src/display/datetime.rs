//! DateTime display utilities.

use std::fmt;

use jiff::{civil::DateTime, tz::TimeZone, Timestamp};

use crate::models::serde_helpers::BACKEND_DATETIME_FORMAT;

/// A wrapper around `Timestamp` that formats it in the system timezone as
/// `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Backend civil time, shown as received. The backend sends no zone, so
/// none is invented here. Missing values render as `-`.
pub struct BackendTime<'a>(pub &'a Option<DateTime>);

impl<'a> fmt::Display for BackendTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(dt) => write!(f, "{}", dt.strftime(BACKEND_DATETIME_FORMAT)),
            None => f.write_str("-"),
        }
    }
}
