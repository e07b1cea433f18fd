//! Text input and output for [`Date`].
//!
//! | Format | Example | Entry point |
//! |--------|---------|-------------|
//! | slash | `15/6/2023` | [`Date::parse_slash`], [`str::parse`] |
//! | token | `15.6.2023`, `15-6-2023` | [`Date::parse_token`] |
//! | ctime | `Thu Jun 15 09:30:00 2023` | [`Date::from_ctime`] |
//! | canonical (output only) | `15 June 2023 Thursday` | [`Display`](fmt::Display) |

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use tracing::debug;

use crate::date::Date;
use crate::error::InvalidDate;
use crate::month::{month_from_abbr, month_name};

/// `strftime` pattern equivalent to C `ctime` output (without the newline).
const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

fn parse_field<T: FromStr>(text: &str, field: &'static str) -> Result<T, InvalidDate> {
    text.trim().parse().map_err(|_| InvalidDate::InvalidNumber {
        field,
        input: text.to_string(),
    })
}

fn parse_triple(day: &str, month: &str, year: &str) -> Result<Date, InvalidDate> {
    let day = parse_field(day, "day")?;
    let month = parse_field(month, "month")?;
    let year = parse_field(year, "year")?;
    Date::new(day, month, year)
}

impl Date {
    /// Parses `"D/M/Y"`. Exactly two `/` separators are required; fields may
    /// have any width.
    ///
    /// Whitespace around each field is ignored, so `" 15 / 6 / 2023 "` reads
    /// the same as `"15/6/2023"`.
    ///
    /// # Errors
    ///
    /// - [`InvalidDate::WrongFormat`] if the input does not contain exactly
    ///   two `/`.
    /// - [`InvalidDate::InvalidNumber`] if a field is not an integer.
    /// - [`InvalidDate::NoSuchDate`] if the values are not a legal date.
    ///
    /// ```
    /// use date_time::{Date, Weekday};
    ///
    /// let date = Date::parse_slash("15/6/2023").unwrap();
    /// assert_eq!(date.weekday(), Weekday::Thursday);
    /// ```
    pub fn parse_slash(input: &str) -> Result<Self, InvalidDate> {
        let fields: Vec<&str> = input.split('/').collect();
        let [day, month, year] = fields[..] else {
            debug!(input, "slash date needs exactly two separators");
            return Err(InvalidDate::wrong_format(input));
        };
        parse_triple(day, month, year)
    }

    /// Parses the first whitespace-delimited token of `input` as three digit
    /// runs (day, month, year) split by exactly two non-digit characters.
    ///
    /// Any separator character is accepted, so `1.2.2000`, `1-2-2000` and
    /// `1/2/2000` are all 1 February 2000.
    ///
    /// # Errors
    ///
    /// - [`InvalidDate::WrongFormat`] if there is no token or it does not
    ///   contain exactly two non-digit characters.
    /// - [`InvalidDate::InvalidNumber`] if a digit run is empty.
    /// - [`InvalidDate::NoSuchDate`] if the values are not a legal date.
    pub fn parse_token(input: &str) -> Result<Self, InvalidDate> {
        let Some(token) = input.split_whitespace().next() else {
            debug!(input, "no token to read a date from");
            return Err(InvalidDate::wrong_format(input));
        };
        let non_digits = token.chars().filter(|c| !c.is_ascii_digit()).count();
        if non_digits != 2 {
            debug!(token, non_digits, "date token needs exactly two separators");
            return Err(InvalidDate::wrong_format(token));
        }
        let fields: Vec<&str> = token.split(|c: char| !c.is_ascii_digit()).collect();
        match fields[..] {
            [day, month, year] => parse_triple(day, month, year),
            _ => Err(InvalidDate::wrong_format(token)),
        }
    }

    /// Reads the date out of C `ctime`-style text such as
    /// `"Thu Jun 15 09:30:00 2023"`.
    ///
    /// The month is taken from the second field via the three-letter
    /// abbreviation table, the day from the third and the year from the last.
    ///
    /// # Errors
    ///
    /// - [`InvalidDate::WrongFormat`] if fewer than five fields are present.
    /// - [`InvalidDate::UnknownMonth`] if the month abbreviation is unknown.
    /// - [`InvalidDate::InvalidNumber`] if day or year is not an integer.
    /// - [`InvalidDate::NoSuchDate`] if the values are not a legal date.
    pub fn from_ctime(text: &str) -> Result<Self, InvalidDate> {
        let fields: Vec<&str> = text.split_whitespace().collect();
        let [_, month, day, _, .., year] = fields[..] else {
            debug!(text, "ctime text needs five fields");
            return Err(InvalidDate::wrong_format(text));
        };
        let month = month_from_abbr(month)?;
        Date::new(parse_field(day, "day")?, month, parse_field(year, "year")?)
    }

    /// Converts seconds since the Unix epoch to the UTC calendar day.
    ///
    /// # Errors
    ///
    /// - [`InvalidDate::TimestampOutOfRange`] if `secs` is not representable.
    /// - [`InvalidDate::NoSuchDate`] if the day is before 1 January 1900.
    ///
    /// ```
    /// use date_time::Date;
    ///
    /// let date = Date::from_timestamp(1_686_787_200).unwrap();
    /// assert_eq!(date.to_string(), "15 June 2023 Thursday");
    /// ```
    pub fn from_timestamp(secs: i64) -> Result<Self, InvalidDate> {
        let instant =
            DateTime::from_timestamp(secs, 0).ok_or(InvalidDate::TimestampOutOfRange { secs })?;
        Self::from_ctime(&instant.format(CTIME_FORMAT).to_string())
    }

    /// Returns today's date in the local timezone.
    ///
    /// # Errors
    ///
    /// Fails only if the system clock reports a day before 1 January 1900.
    pub fn today() -> Result<Self, InvalidDate> {
        Self::from_ctime(&Local::now().format(CTIME_FORMAT).to_string())
    }

    /// Formats as `"D/M/Y"`, the inverse of [`Date::parse_slash`].
    pub fn to_slash_string(&self) -> String {
        format!("{}/{}/{}", self.day(), self.month(), self.year())
    }
}

impl FromStr for Date {
    type Err = InvalidDate;

    /// Same as [`Date::parse_slash`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_slash(s)
    }
}

/// Canonical form: `"<day> <Month> <year> <Weekday>"`, e.g. `"5 March 2024 Tuesday"`.
impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.day(),
            month_name(self.month()).unwrap_or_default(),
            self.year(),
            self.weekday()
        )
    }
}
