//! Calendar-aware lease duration
//!
//! Dates are instants in UTC; a bare `YYYY-MM-DD` is midnight UTC. Month
//! arithmetic always starts from the original start instant and clamps to
//! the last valid day of the target month (chrono `checked_add_months`).
//! Stepping from the previous cursor instead would let a Jan 31 start drift
//! to the 29th after February.

use chrono::{DateTime, Months, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use shared_types::DurationBreakdown;

use crate::error::AgreementError;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Parse an agreement date: `YYYY-MM-DD` (midnight UTC), an RFC 3339
/// timestamp, or a naive `YYYY-MM-DDTHH:MM:SS` timestamp read as UTC.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, AgreementError> {
    let value = value.trim();

    if let Some(midnight) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc());
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(timestamp.and_utc());
    }

    Err(AgreementError::InvalidDate(value.to_string()))
}

/// Parse both dates and break the span down into years, months and days
pub fn calculate_duration(start: &str, end: &str) -> Result<DurationBreakdown, AgreementError> {
    Ok(duration_between(parse_instant(start)?, parse_instant(end)?))
}

/// Break a span into whole years, then whole months, then remaining days.
/// Day counts are whole 24-hour periods, floored.
///
/// When `end <= start` the result has zero years and months and
/// `days == total_days <= 0`.
pub fn duration_between(start: DateTime<Utc>, end: DateTime<Utc>) -> DurationBreakdown {
    let mut years = 0u32;
    while fits(start, (years + 1) * 12, end) {
        years += 1;
    }

    let mut months = 0u32;
    while fits(start, years * 12 + months + 1, end) {
        months += 1;
    }

    let cursor = shift_months(start, years * 12 + months).unwrap_or(start);

    DurationBreakdown {
        years,
        months,
        days: whole_days(end - cursor),
        total_days: whole_days(end - start),
    }
}

fn whole_days(span: TimeDelta) -> i64 {
    span.num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

fn shift_months(start: DateTime<Utc>, months: u32) -> Option<DateTime<Utc>> {
    start.checked_add_months(Months::new(months))
}

fn fits(start: DateTime<Utc>, months: u32, end: DateTime<Utc>) -> bool {
    shift_months(start, months).is_some_and(|candidate| candidate <= end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn breakdown(start: &str, end: &str) -> DurationBreakdown {
        calculate_duration(start, end).unwrap()
    }

    #[test]
    fn test_year_month_day_split() {
        assert_eq!(
            breakdown("2024-01-01", "2025-03-15"),
            DurationBreakdown {
                years: 1,
                months: 2,
                days: 14,
                total_days: 439,
            }
        );
    }

    #[test]
    fn test_exact_year() {
        let duration = breakdown("2023-06-01", "2024-06-01");
        assert_eq!((duration.years, duration.months, duration.days), (1, 0, 0));
        assert_eq!(duration.total_days, 366);
    }

    #[test]
    fn test_month_end_clamps_into_february() {
        let duration = breakdown("2024-01-31", "2024-02-29");
        assert_eq!((duration.years, duration.months, duration.days), (0, 1, 0));
        assert_eq!(duration.total_days, 29);
    }

    #[test]
    fn test_month_end_does_not_drift() {
        // Jan 31 + 2 months is Mar 31, which is past Mar 30
        let duration = breakdown("2024-01-31", "2024-03-30");
        assert_eq!((duration.years, duration.months, duration.days), (0, 1, 30));

        let duration = breakdown("2024-01-31", "2024-03-31");
        assert_eq!((duration.years, duration.months, duration.days), (0, 2, 0));
    }

    #[test]
    fn test_leap_day_anniversary_clamps() {
        let duration = breakdown("2024-02-29", "2025-02-28");
        assert_eq!((duration.years, duration.months, duration.days), (1, 0, 0));
        assert_eq!(duration.total_days, 365);
    }

    #[test]
    fn test_end_before_start_does_not_panic() {
        assert_eq!(
            breakdown("2024-06-01", "2024-05-01"),
            DurationBreakdown {
                years: 0,
                months: 0,
                days: -31,
                total_days: -31,
            }
        );
        assert_eq!(breakdown("2024-06-01", "2024-06-01"), DurationBreakdown::default());
    }

    #[test]
    fn test_parse_normalizes_to_utc() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5)
            .and_then(|date| date.and_hms_opt(18, 0, 0))
            .unwrap()
            .and_utc();

        assert_eq!(parse_instant("2024-03-05T23:30:00+05:30").unwrap(), expected);
        assert_eq!(parse_instant("2024-03-05T18:00:00").unwrap(), expected);
        assert_eq!(
            parse_instant("2024-03-05").unwrap(),
            expected - TimeDelta::hours(18)
        );
    }

    #[test]
    fn test_partial_days_are_floored() {
        let duration = breakdown("2024-01-01T10:00:00Z", "2024-01-01T20:00:00Z");
        assert_eq!(duration, DurationBreakdown::default());

        let duration = breakdown("2024-01-01", "2024-01-03T12:00:00Z");
        assert_eq!((duration.days, duration.total_days), (2, 2));

        // Half a day backwards floors to -1, not 0
        let duration = breakdown("2024-01-02", "2024-01-01T12:00:00Z");
        assert_eq!((duration.days, duration.total_days), (-1, -1));
    }

    #[test]
    fn test_offsets_compare_as_instants() {
        // 2024-01-01T20:00Z to 2024-01-02T22:00Z
        let duration = breakdown("2024-01-02T01:00:00+05:00", "2024-01-02T22:00:00Z");
        assert_eq!((duration.days, duration.total_days), (1, 1));
    }

    #[test]
    fn test_invalid_dates() {
        assert!(matches!(
            calculate_duration("2024-02-30", "2024-12-01"),
            Err(AgreementError::InvalidDate(value)) if value == "2024-02-30"
        ));
        assert!(calculate_duration("2024-01-01", "next year").is_err());
    }
}
