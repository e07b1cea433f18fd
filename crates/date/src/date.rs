//! Gregorian date with a derived weekday.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Sub, SubAssign};

use tracing::debug;

use crate::error::InvalidDate;
use crate::table::{
    self, YEAR_BASE, check, day_of_year, days_before_year, days_in_month, days_in_previous_month,
    days_in_year,
};
use crate::weekday::Weekday;

/// A calendar day in the Gregorian calendar, no earlier than 1 January 1900.
///
/// The weekday is derived from the day, month and year and is recomputed on
/// every successful mutation. It never takes part in equality, ordering or
/// hashing.
#[derive(Debug, Clone, Copy)]
pub struct Date {
    day: u8,
    month: u8,
    year: i32,
    weekday: Weekday,
}

impl Default for Date {
    /// 1 January 1900, a Monday.
    fn default() -> Self {
        Self {
            day: 1,
            month: 1,
            year: YEAR_BASE,
            weekday: Weekday::Monday,
        }
    }
}

impl PartialEq for Date {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Date {}

impl Hash for Date {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

fn derive_weekday(day: u32, month: u32, year: i32) -> Weekday {
    Weekday::from_index(days_before_year(year) + i64::from(day_of_year(day, month, year)))
}

impl Date {
    /// Creates a date from day, month and year.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDate::NoSuchDate`] if the triple is not a legal
    /// calendar date or the year is before 1900.
    ///
    /// ```
    /// use date_time::{Date, Weekday};
    ///
    /// let date = Date::new(29, 2, 2024).unwrap();
    /// assert_eq!(date.weekday(), Weekday::Thursday);
    /// assert!(Date::new(29, 2, 2023).is_err());
    /// ```
    pub fn new(day: u32, month: u32, year: i32) -> Result<Self, InvalidDate> {
        let mut date = Self::default();
        date.commit(day, month, year)?;
        Ok(date)
    }

    /// Creates the date `days` days after 1 January 1900.
    ///
    /// Returns `None` for negative `days` or if the year overflows.
    pub fn from_days_since_epoch(days: i64) -> Option<Self> {
        if days < 0 {
            return None;
        }
        // Every year has at most 366 days, so this never overshoots.
        let mut year = i32::try_from(i64::from(YEAR_BASE) + days / 366).ok()?;
        while let Some(next) = year.checked_add(1) {
            if days_before_year(next) > days {
                break;
            }
            year = next;
        }
        let mut remaining = u32::try_from(days - days_before_year(year)).ok()?;
        // Only short when the year loop stopped at `i32::MAX`.
        if remaining >= days_in_year(year) {
            return None;
        }
        let mut month = 1;
        while remaining >= days_in_month(month, year) {
            remaining -= days_in_month(month, year);
            month += 1;
        }
        Self::new(remaining + 1, month, year).ok()
    }

    fn key(&self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Validates the triple and, only if it is legal, stores it together
    /// with its weekday. On error `self` is untouched.
    fn commit(&mut self, day: u32, month: u32, year: i32) -> Result<(), InvalidDate> {
        if !check(day, month, year) {
            debug!(day, month, year, "rejected date");
            return Err(InvalidDate::no_such_date(day, month, year));
        }
        *self = Self {
            day: day as u8,
            month: month as u8,
            year,
            weekday: derive_weekday(day, month, year),
        };
        Ok(())
    }

    /// Returns the day of the month (1..=31).
    pub fn day(&self) -> u32 {
        u32::from(self.day)
    }

    /// Returns the month (1..=12).
    pub fn month(&self) -> u32 {
        u32::from(self.month)
    }

    /// Returns the year (1900 or later).
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Returns the 1-based day of the year (1..=366).
    pub fn day_of_year(&self) -> u32 {
        day_of_year(self.day(), self.month(), self.year)
    }

    /// Returns `true` if this date falls in a leap year.
    pub fn is_leap_year(&self) -> bool {
        table::is_leap(self.year)
    }

    /// Days elapsed since 1 January 1900 (which is day 0).
    pub fn days_since_epoch(&self) -> i64 {
        days_before_year(self.year) + i64::from(self.day_of_year()) - 1
    }

    /// Sets the day of the month, keeping month and year.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDate::NoSuchDate`] if the resulting date is illegal;
    /// the date is left unchanged.
    pub fn set_day(&mut self, day: u32) -> Result<&mut Self, InvalidDate> {
        self.set(day, self.month(), self.year)
    }

    /// Sets the month, keeping day and year.
    ///
    /// Fails rather than clamping: 30 January cannot become 30 February.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDate::NoSuchDate`] if the resulting date is illegal;
    /// the date is left unchanged.
    pub fn set_month(&mut self, month: u32) -> Result<&mut Self, InvalidDate> {
        self.set(self.day(), month, self.year)
    }

    /// Sets the year, keeping day and month.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDate::NoSuchDate`] if the resulting date is illegal
    /// (e.g. 29 February moved to a non-leap year); the date is left
    /// unchanged.
    pub fn set_year(&mut self, year: i32) -> Result<&mut Self, InvalidDate> {
        self.set(self.day(), self.month(), year)
    }

    /// Sets day, month and year at once.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDate::NoSuchDate`] if the triple is illegal; the
    /// date is left unchanged.
    pub fn set(&mut self, day: u32, month: u32, year: i32) -> Result<&mut Self, InvalidDate> {
        self.commit(day, month, year)?;
        Ok(self)
    }

    /// Moves this date one day forward.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDate::YearOverflow`] when called on 31 December of
    /// `i32::MAX`.
    pub fn increment(&mut self) -> Result<&mut Self, InvalidDate> {
        let (day, month, year) = (self.day(), self.month(), self.year);
        if month == 12 && day == 31 {
            let next_year = year
                .checked_add(1)
                .ok_or(InvalidDate::YearOverflow {
                    next_year: i64::from(year) + 1,
                })?;
            self.set(1, 1, next_year)
        } else if day == days_in_month(month, year) {
            self.set(1, month + 1, year)
        } else {
            self.set_day(day + 1)
        }
    }

    /// Moves this date one day back.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDate::NoSuchDate`] when called on 1 January 1900.
    pub fn decrement(&mut self) -> Result<&mut Self, InvalidDate> {
        let (day, month, year) = (self.day(), self.month(), self.year);
        if month == 1 && day == 1 {
            self.set(31, 12, year - 1)
        } else if day == 1 {
            self.set(days_in_previous_month(month, year), month - 1, year)
        } else {
            self.set_day(day - 1)
        }
    }

    /// Returns the following day.
    ///
    /// # Errors
    ///
    /// See [`Date::increment`].
    pub fn next_day(self) -> Result<Self, InvalidDate> {
        let mut next = self;
        next.increment()?;
        Ok(next)
    }

    /// Returns the preceding day.
    ///
    /// # Errors
    ///
    /// See [`Date::decrement`].
    pub fn previous_day(self) -> Result<Self, InvalidDate> {
        let mut prev = self;
        prev.decrement()?;
        Ok(prev)
    }

    /// Returns the date `n` days later, stepping one day at a time.
    ///
    /// # Errors
    ///
    /// See [`Date::increment`].
    pub fn advance(self, n: u64) -> Result<Self, InvalidDate> {
        let mut date = self;
        for _ in 0..n {
            date.increment()?;
        }
        Ok(date)
    }

    /// Returns the date `n` days earlier, stepping one day at a time.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDate::NoSuchDate`] if the walk would pass
    /// 1 January 1900.
    pub fn retreat(self, n: u64) -> Result<Self, InvalidDate> {
        let mut date = self;
        for _ in 0..n {
            date.decrement()?;
        }
        Ok(date)
    }

    /// Adds a signed number of days. Negative `n` moves backwards.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDate::NoSuchDate`] if the result is out of range.
    pub fn checked_add_days(self, n: i64) -> Result<Self, InvalidDate> {
        if n >= 0 {
            self.advance(n.unsigned_abs())
        } else {
            self.retreat(n.unsigned_abs())
        }
    }

    /// Subtracts a signed number of days. Negative `n` moves forwards.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDate::NoSuchDate`] if the result is out of range.
    pub fn checked_sub_days(self, n: i64) -> Result<Self, InvalidDate> {
        if n >= 0 {
            self.retreat(n.unsigned_abs())
        } else {
            self.advance(n.unsigned_abs())
        }
    }

    /// Signed number of days from `other` to `self`.
    ///
    /// Positive when `self` is later. Always satisfies
    /// `a.difference(&b) == -b.difference(&a)`.
    ///
    /// ```
    /// use date_time::Date;
    ///
    /// let a = Date::new(1, 1, 2001).unwrap();
    /// let b = Date::new(1, 1, 2000).unwrap();
    /// assert_eq!(a.difference(&b), 366);
    /// assert_eq!(b - a, -366);
    /// ```
    pub fn difference(&self, other: &Self) -> i64 {
        if self == other {
            return 0;
        }
        if self.year == other.year {
            return i64::from(self.day_of_year()) - i64::from(other.day_of_year());
        }
        self.days_since_epoch() - other.days_since_epoch()
    }
}

/// # Panics
///
/// Panics if the result is before 1 January 1900 or the year overflows.
/// Use [`Date::checked_add_days`] to handle that case.
impl Add<i64> for Date {
    type Output = Date;

    fn add(self, n: i64) -> Date {
        self.checked_add_days(n)
            .expect("date addition left the supported range")
    }
}

impl Add<Date> for i64 {
    type Output = Date;

    fn add(self, date: Date) -> Date {
        date + self
    }
}

/// # Panics
///
/// Panics if the result is before 1 January 1900 or the year overflows.
/// Use [`Date::checked_sub_days`] to handle that case.
impl Sub<i64> for Date {
    type Output = Date;

    fn sub(self, n: i64) -> Date {
        self.checked_sub_days(n)
            .expect("date subtraction left the supported range")
    }
}

impl AddAssign<i64> for Date {
    fn add_assign(&mut self, n: i64) {
        *self = *self + n;
    }
}

impl SubAssign<i64> for Date {
    fn sub_assign(&mut self, n: i64) {
        *self = *self - n;
    }
}

impl Sub for Date {
    type Output = i64;

    fn sub(self, other: Date) -> i64 {
        self.difference(&other)
    }
}
