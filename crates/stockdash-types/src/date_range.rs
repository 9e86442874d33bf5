//! Inclusive date ranges for historical data requests.

use chrono::{NaiveDate, NaiveTime};

use crate::DateRangeError;

/// A range of calendar dates for data retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a date range for a single day.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Parses a `YYYY-MM-DD` string into a date.
    ///
    /// # Errors
    ///
    /// Returns [`DateRangeError::Malformed`] if the string is not a valid date.
    pub fn parse_date(s: &str) -> Result<NaiveDate, DateRangeError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|_| DateRangeError::Malformed(s.to_string()))
    }

    /// Returns true if the range contains the given date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns the half-open range as Unix timestamps (seconds, UTC).
    ///
    /// The upper bound is midnight after `end`, so the whole end day is
    /// covered.
    #[must_use]
    pub fn unix_bounds(&self) -> (i64, i64) {
        let start = self.start.and_time(NaiveTime::MIN).and_utc().timestamp();
        let end = self
            .end
            .succ_opt()
            .unwrap_or(self.end)
            .and_time(NaiveTime::MIN)
            .and_utc()
            .timestamp();
        (start, end)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_new() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let range = DateRange::new(start, end).unwrap();

        assert_eq!(range.start, start);
        assert_eq!(range.end, end);
        assert!(range.contains(start) && range.contains(end));
    }

    #[test]
    fn test_date_range_invalid() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(DateRange::new(start, end).is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            DateRange::parse_date("2018-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2018, 1, 1).unwrap()
        );
        assert_eq!(
            DateRange::parse_date("01/02/2018"),
            Err(DateRangeError::Malformed("01/02/2018".to_string()))
        );
        assert!(DateRange::parse_date("2018-02-30").is_err());
    }

    #[test]
    fn test_unix_bounds_cover_end_day() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let (start, end) = DateRange::single_day(day).unix_bounds();

        assert_eq!(start, 1_705_276_800);
        assert_eq!(end - start, 86_400);
    }

    #[test]
    fn test_contains() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let range = DateRange::new(start, end).unwrap();

        assert!(range.contains(start));
        assert!(range.contains(end));
        assert!(!range.contains(end.succ_opt().unwrap()));
    }
}
