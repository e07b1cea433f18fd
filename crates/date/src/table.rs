//! Leap-year rule, days-per-month tables and the date validity check.

/// First valid year; also the reference year for weekday derivation.
pub const YEAR_BASE: i32 = 1900;

/// Days-per-month lookup, indexed by `[category][month]` (index 0 unused).
///
/// Rows 0 and 1 hold the length of each month in ordinary and leap years.
/// Rows 2 and 3 hold the length of the *preceding* month, so that stepping
/// back from the first of a month is a single lookup.
#[rustfmt::skip]
pub(crate) const YEAR_TABLE: [[u8; 13]; 4] = [
    [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
    [0, 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
    [0, 31, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30],
    [0, 31, 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30],
];

/// Returns `true` if `year` is a Gregorian leap year.
///
/// ```
/// use date_time::is_leap;
///
/// assert!(is_leap(2000));
/// assert!(!is_leap(1900));
/// assert!(is_leap(2024));
/// ```
pub const fn is_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `year`.
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap(year) { 366 } else { 365 }
}

/// Number of days in `month` of `year`.
///
/// `month` must be in 1..=12.
pub(crate) fn days_in_month(month: u32, year: i32) -> u32 {
    u32::from(YEAR_TABLE[is_leap(year) as usize][month as usize])
}

/// Number of days in the month before `month` (December for January).
///
/// `month` must be in 1..=12.
pub(crate) fn days_in_previous_month(month: u32, year: i32) -> u32 {
    u32::from(YEAR_TABLE[is_leap(year) as usize + 2][month as usize])
}

/// Returns `true` if `(day, month, year)` is a legal date no earlier than
/// 1 January 1900.
pub fn check(day: u32, month: u32, year: i32) -> bool {
    year >= YEAR_BASE
        && (1..=12).contains(&month)
        && (1..=days_in_month(month, year)).contains(&day)
}

/// 1-based ordinal of `(day, month)` within `year`.
///
/// The triple must already have passed [`check`].
pub(crate) fn day_of_year(day: u32, month: u32, year: i32) -> u32 {
    (1..month).map(|m| days_in_month(m, year)).sum::<u32>() + day
}

/// Number of leap years in `1..year`.
fn leap_years_before(year: i32) -> i64 {
    let y = i64::from(year) - 1;
    y / 4 - y / 100 + y / 400
}

/// Days from 1 January 1900 to 1 January `year`.
///
/// Equal to summing 365 or 366 for every year in `1900..year`.
pub(crate) fn days_before_year(year: i32) -> i64 {
    365 * (i64::from(year) - i64::from(YEAR_BASE)) + leap_years_before(year)
        - leap_years_before(YEAR_BASE)
}
