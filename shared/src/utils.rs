//! # Shared Utility Functions
//!
//! The backend emits timestamps either as RFC 3339 strings or as naive ISO
//! datetimes without an offset (interpreted as UTC). DTOs keep them as
//! strings on the wire; [`parse_timestamp`] turns them into `chrono` values
//! on demand.
//!
//! ```rust
//! use shared::utils::parse_timestamp;
//!
//! assert!(parse_timestamp("2024-09-01T12:00:00Z").is_some());
//! assert!(parse_timestamp("2024-09-01T12:00:00.123456").is_some());
//! assert!(parse_timestamp("yesterday").is_none());
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a backend timestamp; `None` if the format is not recognised.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_offset_is_normalised_to_utc() {
        let dt = parse_timestamp("2024-09-01T20:00:00+08:00").unwrap();
        assert_eq!(dt.hour(), 12);
    }

    #[test]
    fn test_naive_and_date_only() {
        assert_eq!(parse_timestamp("2024-09-01 08:15:00").unwrap().minute(), 15);
        assert_eq!(parse_timestamp("2024-02-29").unwrap().day(), 29);
        assert!(parse_timestamp("").is_none());
    }
}
