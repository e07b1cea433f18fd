//! Error types for the date-time crate.

/// Error type for all fallible operations in the date-time crate.
///
/// Every variant means the requested value does not denote a legal date
/// (or a legal way of producing one). No operation returning this error
/// leaves a partially updated [`Date`](crate::Date) behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDate {
    /// Returned when a `(day, month, year)` triple fails validation.
    #[error("there is no such date: {day}/{month}/{year}")]
    NoSuchDate {
        /// The requested day of the month.
        day: u32,
        /// The requested month.
        month: u32,
        /// The requested year.
        year: i32,
    },

    /// Returned when stepping forward would move past the largest `i32` year.
    #[error("there is no such date: 1/1/{next_year}")]
    YearOverflow {
        /// The year that would have been reached.
        next_year: i64,
    },

    /// Returned when text does not have the expected separator layout.
    #[error("wrong input format: {input:?}")]
    WrongFormat {
        /// The rejected input.
        input: String,
    },

    /// Returned when a date field is not an integer in range.
    #[error("invalid {field} field: {input:?}")]
    InvalidNumber {
        /// Which field failed (`"day"`, `"month"` or `"year"`).
        field: &'static str,
        /// The text of the field.
        input: String,
    },

    /// Returned when a three-letter month abbreviation is not recognised.
    #[error("unknown month abbreviation: {abbr:?}")]
    UnknownMonth {
        /// The unrecognised abbreviation.
        abbr: String,
    },

    /// Returned when a timestamp cannot be represented as a calendar instant.
    #[error("timestamp {secs} is out of range")]
    TimestampOutOfRange {
        /// Seconds since the Unix epoch.
        secs: i64,
    },

    /// Returned when a random-date year range cannot contain a valid date.
    #[error("invalid year range: {min_year}..={max_year} (must start at 1900 or later)")]
    InvalidYearRange {
        /// Lower bound of the range.
        min_year: i32,
        /// Upper bound of the range.
        max_year: i32,
    },

    /// Returned when the rejection-sampling attempt cap is zero.
    #[error("max_attempts must be >= 1")]
    InvalidAttempts,

    /// Returned when rejection sampling did not find a valid date.
    #[error("no valid date found after {attempts} attempts")]
    AttemptsExhausted {
        /// Number of triples drawn.
        attempts: usize,
    },
}

impl InvalidDate {
    pub(crate) fn no_such_date(day: u32, month: u32, year: i32) -> Self {
        Self::NoSuchDate { day, month, year }
    }

    pub(crate) fn wrong_format(input: &str) -> Self {
        Self::WrongFormat {
            input: input.to_string(),
        }
    }
}
