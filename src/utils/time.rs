//! Time utilities

use chrono::{DateTime, Utc};

/// Format a time window as "HH:MM - HH:MM"
pub fn format_time_window(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    format!("{} - {}", start.format("%H:%M"), end.format("%H:%M"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_time_window() {
        let start = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 6, 1, 10, 30, 0).unwrap();
        assert_eq!(format_time_window(start, end), "08:00 - 10:30");
    }
}
