//! Observation date type.

use std::fmt;

use chrono::{Days, NaiveDate};

/// Format used for dates in the store and in URLs.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Error returned when parsing an invalid observation date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date {input:?}: {reason}")]
pub struct InvalidDate {
    input: String,
    reason: &'static str,
}

impl InvalidDate {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A calendar date in `YYYY-MM-DD` form.
///
/// Dates are stored as text in the measurement table, and the zero-padded
/// format sorts lexicographically in the same order as chronologically.
/// This type guarantees that any `ObsDate` renders in that form.
///
/// # Examples
///
/// ```
/// use surfsup_server::domain::ObsDate;
///
/// let date = ObsDate::parse("2017-08-23").unwrap();
/// assert_eq!(date.to_string(), "2017-08-23");
///
/// // Unpadded components are rejected
/// assert!(ObsDate::parse("2017-8-23").is_err());
///
/// // So are impossible dates
/// assert!(ObsDate::parse("2017-02-30").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObsDate(NaiveDate);

impl ObsDate {
    /// Parse a date from a string.
    ///
    /// The input must be exactly `YYYY-MM-DD` with zero-padded month and day.
    pub fn parse(s: &str) -> Result<Self, InvalidDate> {
        let invalid = |reason| InvalidDate {
            input: s.to_string(),
            reason,
        };

        // chrono accepts unpadded fields, which would not compare correctly
        // against the stored text
        let bytes = s.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(invalid("expected YYYY-MM-DD"));
        }
        if !bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
        {
            return Err(invalid("expected YYYY-MM-DD"));
        }

        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(ObsDate)
            .map_err(|_| invalid("not a calendar date"))
    }

    /// Wrap a chrono date.
    pub fn from_naive(date: NaiveDate) -> Self {
        ObsDate(date)
    }

    /// The underlying chrono date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// The date exactly `days` days earlier.
    ///
    /// Saturates at the earliest representable date.
    pub fn days_before(&self, days: u64) -> Self {
        ObsDate(self.0.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN))
    }
}

impl fmt::Debug for ObsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObsDate({})", self.0.format(DATE_FORMAT))
    }
}

impl fmt::Display for ObsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
