//! Date-range validation applied before any feed request.
//!
//! The four rules run in order and the first failure wins; its message is
//! exactly what the user sees inline next to the form.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// One violation per rule. `Display` is the user-facing inline message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Start date and end date should not be the same")]
    SameDate,
    #[error("Date range should not be greater than 7 days")]
    RangeTooLarge,
    #[error("End date should not be greater than today")]
    EndInFuture,
    #[error("End date should be greater than start date")]
    EndNotAfterStart,
}

/// A submitted query window.
///
/// The endpoints are instants: rules 1-3 look at their calendar-date
/// projections while rule 4 compares the instants themselves. On the wire
/// only the ISO date portion is ever sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    pub fn start_iso(&self) -> String {
        self.start.date().format("%Y-%m-%d").to_string()
    }

    pub fn end_iso(&self) -> String {
        self.end.date().format("%Y-%m-%d").to_string()
    }
}

/// Checks a candidate window against the four business rules, short-circuiting
/// on the first violation. Pure; makes no network call and touches no state.
///
/// Rule 2 uses the absolute calendar-day difference while rule 4 is a signed
/// instant comparison. The asymmetry is part of the published policy; the two
/// checks stay independent.
pub fn validate(
    start: NaiveDateTime,
    end: NaiveDateTime,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    if start.date() == end.date() {
        return Err(ValidationError::SameDate);
    }

    if (end.date() - start.date()).num_days().abs() > 7 {
        return Err(ValidationError::RangeTooLarge);
    }

    if end.date() > today {
        return Err(ValidationError::EndInFuture);
    }

    if end <= start {
        return Err(ValidationError::EndNotAfterStart);
    }

    Ok(())
}

/// The date constraints in prose, shown by the `rules` subcommand.
pub const RULES: [&str; 4] = [
    "Start date and end date should be different",
    "Start date and end date difference should be at most 7 days",
    "End date should not be greater than today",
    "Start date should be less than end date",
];

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn midnight(s: &str) -> NaiveDateTime {
        day(s).and_time(NaiveTime::MIN)
    }

    #[test]
    fn test_same_date_rejected() {
        let today = day("2024-01-10");
        let result = validate(midnight("2024-01-05"), midnight("2024-01-05"), today);
        assert_eq!(result, Err(ValidationError::SameDate));
    }

    #[test]
    fn test_same_date_fires_before_ordering_rule() {
        // Reversed instants on the same calendar day are rule 1's, not rule 4's.
        let today = day("2024-01-10");
        let start = day("2024-01-05").and_hms_opt(10, 0, 0).unwrap();
        let end = day("2024-01-05").and_hms_opt(8, 0, 0).unwrap();
        assert_eq!(validate(start, end, today), Err(ValidationError::SameDate));
    }

    #[test]
    fn test_range_too_large_forward() {
        let today = day("2024-01-20");
        let result = validate(midnight("2024-01-01"), midnight("2024-01-09"), today);
        assert_eq!(result, Err(ValidationError::RangeTooLarge));
    }

    #[test]
    fn test_range_too_large_is_symmetric() {
        // Absolute difference: a reversed 8-day window fails here, not at rule 4.
        let today = day("2024-01-20");
        let result = validate(midnight("2024-01-09"), midnight("2024-01-01"), today);
        assert_eq!(result, Err(ValidationError::RangeTooLarge));
    }

    #[test]
    fn test_seven_day_range_passes_size_rule() {
        let today = day("2024-01-20");
        let result = validate(midnight("2024-01-01"), midnight("2024-01-08"), today);
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_end_in_future_rejected() {
        let today = day("2024-01-05");
        let result = validate(midnight("2024-01-03"), midnight("2024-01-06"), today);
        assert_eq!(result, Err(ValidationError::EndInFuture));
    }

    #[test]
    fn test_reversed_range_rejected() {
        // Small enough to pass rule 2, distinct dates so rule 1 is silent.
        let today = day("2024-01-20");
        let result = validate(midnight("2024-01-05"), midnight("2024-01-03"), today);
        assert_eq!(result, Err(ValidationError::EndNotAfterStart));
    }

    #[test]
    fn test_reversed_by_less_than_a_day_rejected() {
        // Adjacent calendar dates but the end instant precedes the start.
        let today = day("2024-01-20");
        let start = day("2024-01-02").and_hms_opt(0, 30, 0).unwrap();
        let end = day("2024-01-01").and_hms_opt(23, 30, 0).unwrap();
        assert_eq!(
            validate(start, end, today),
            Err(ValidationError::EndNotAfterStart)
        );
    }

    #[test]
    fn test_valid_range_passes() {
        let today = day("2024-01-20");
        let result = validate(midnight("2024-01-01"), midnight("2024-01-05"), today);
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_end_today_allowed() {
        let today = day("2024-01-05");
        let result = validate(midnight("2024-01-03"), midnight("2024-01-05"), today);
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_messages_are_the_inline_strings() {
        assert_eq!(
            ValidationError::SameDate.to_string(),
            "Start date and end date should not be the same"
        );
        assert_eq!(
            ValidationError::RangeTooLarge.to_string(),
            "Date range should not be greater than 7 days"
        );
        assert_eq!(
            ValidationError::EndInFuture.to_string(),
            "End date should not be greater than today"
        );
        assert_eq!(
            ValidationError::EndNotAfterStart.to_string(),
            "End date should be greater than start date"
        );
    }
}
