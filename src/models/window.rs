use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::error::AnalyzerError;

/// Inclusive `[start, end]` aggregation window. Both bounds are UTC
/// midnights; `end` doubles as the scan anchor for the newest-first
/// history walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregationWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl AggregationWindow {
    /// Parses two `YYYY-MM-DD` strings. `start <= end` is not checked; an
    /// inverted window simply aggregates nothing.
    pub fn parse(start: &str, end: &str) -> Result<Self, AnalyzerError> {
        Ok(Self {
            start: parse_utc_date(start)?,
            end: parse_utc_date(end)?,
        })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn anchor(&self) -> DateTime<Utc> {
        self.end
    }
}

fn parse_utc_date(input: &str) -> Result<DateTime<Utc>, AnalyzerError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| AnalyzerError::InvalidDate {
            input: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_parse_accepts_dashed_dates_as_utc_midnight() {
        let window = AggregationWindow::parse("2024-01-05", "2024-02-10").unwrap();
        assert_eq!(window.start(), Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap());
        assert_eq!(window.anchor(), Utc.with_ymd_and_hms(2024, 2, 10, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_slashed_dates() {
        let err = AggregationWindow::parse("2024/01/01", "2024-01-15").unwrap_err();
        assert!(matches!(err, AnalyzerError::InvalidDate { ref input } if input == "2024/01/01"));
    }

    #[test]
    fn test_parse_rejects_non_dates() {
        assert!(AggregationWindow::parse("2024-01-01", "yesterday").is_err());
        assert!(AggregationWindow::parse("", "2024-01-01").is_err());
    }

    #[test]
    fn test_inverted_window_parses() {
        // Deliberately unvalidated; the scan just terminates immediately.
        assert!(AggregationWindow::parse("2024-03-01", "2024-01-01").is_ok());
    }
}
