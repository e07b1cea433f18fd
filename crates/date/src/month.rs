//! English month names and the three-letter abbreviation table.

use crate::error::InvalidDate;

/// Full month names (index 0 = January).
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Three-letter abbreviations as printed by C `ctime`.
const MONTH_ABBRS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Returns the full English name of `month` (1..=12), or `None` if out of range.
///
/// ```
/// assert_eq!(date_time::month_name(3), Some("March"));
/// assert_eq!(date_time::month_name(13), None);
/// ```
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

/// Converts a three-letter abbreviation (`"Jan"`..`"Dec"`) to a month number.
///
/// # Errors
///
/// Returns [`InvalidDate::UnknownMonth`] if `abbr` is not in the table.
pub(crate) fn month_from_abbr(abbr: &str) -> Result<u32, InvalidDate> {
    MONTH_ABBRS
        .iter()
        .position(|&a| a == abbr)
        .map(|i| i as u32 + 1)
        .ok_or_else(|| InvalidDate::UnknownMonth {
            abbr: abbr.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn abbreviations() {
        assert_eq!(month_from_abbr("Jan").unwrap(), 1);
        assert_eq!(month_from_abbr("Jun").unwrap(), 6);
        assert_eq!(month_from_abbr("Dec").unwrap(), 12);
    }

    #[test]
    fn abbreviation_is_case_sensitive() {
        assert_eq!(
            month_from_abbr("jan").unwrap_err(),
            InvalidDate::UnknownMonth {
                abbr: "jan".to_string()
            }
        );
    }

    #[test]
    fn abbreviations_prefix_names() {
        for m in 1..=12u32 {
            let name = month_name(m).unwrap();
            assert_eq!(month_from_abbr(&name[..3]).unwrap(), m);
        }
    }
}
