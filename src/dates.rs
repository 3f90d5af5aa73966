//! Date-range derivation and the two formatting contracts.
//!
//! The wire format is fixed-width `YYYY-MM-DD` and must never vary with
//! locale; the user-facing timestamp format is deliberately locale-shaped
//! and rendered in local time.

use chrono::{DateTime, Days, Local, NaiveDate, Utc};

/// The 3-day horizon requested from the backend.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// `from` is the given day, `to` is exactly 2 calendar days later.
    ///
    /// Computed fresh for every request, never persisted.
    #[must_use]
    pub fn forecast_horizon(today: NaiveDate) -> Self {
        Self { from: today, to: add_days(today, 2) }
    }
}

#[must_use]
pub fn add_days(date: NaiveDate, n: u64) -> NaiveDate {
    date + Days::new(n)
}

/// `YYYY-MM-DD` with zero-padded month and day.
#[must_use]
pub fn format_for_wire(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// User-facing timestamp rendering, converted to local time.
#[must_use]
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%d.%m.%Y, %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_for_wire_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_for_wire(date), "2024-03-05");
    }

    #[test]
    fn test_forecast_horizon_spans_two_days() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let range = DateRange::forecast_horizon(today);
        assert_eq!(format_for_wire(range.from), "2024-06-10");
        assert_eq!(format_for_wire(range.to), "2024-06-12");
    }

    #[test]
    fn test_forecast_horizon_crosses_year_boundary() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let range = DateRange::forecast_horizon(today);
        assert_eq!(format_for_wire(range.to), "2025-01-02");
    }

    #[test]
    fn test_forecast_horizon_crosses_month_boundary() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        let range = DateRange::forecast_horizon(today);
        assert_eq!(format_for_wire(range.to), "2024-03-01");
    }

    #[test]
    fn test_format_timestamp_accepts_any_valid_iso_8601() {
        for raw in ["2024-06-10T01:30:00Z", "2024-06-10T01:30:00+02:00", "2024-12-31T23:59:59.123Z"]
        {
            let parsed = DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc);
            let display = format_timestamp(parsed);
            assert!(display.contains(", "));
        }
    }
}
