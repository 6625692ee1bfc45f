// SPDX-License-Identifier: MIT
// Copyright 2026 Tunisia Travel Magic contributors

//! Shared helpers for date/time formatting.

use chrono::{DateTime, NaiveTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Format a schedule slot as a 24-hour `HH:MM` clock string.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_utc_rfc3339() {
        let date = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        assert_eq!(format_utc_rfc3339(date), "2026-03-14T09:26:53Z");
    }

    #[test]
    fn test_format_clock_pads_hours() {
        let t = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        assert_eq!(format_clock(t), "08:00");
        let t = NaiveTime::from_hms_opt(19, 30, 0).unwrap();
        assert_eq!(format_clock(t), "19:30");
    }
}
