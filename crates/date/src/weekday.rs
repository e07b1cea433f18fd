//! Day of the week.

use std::fmt;

/// Day of the week, numbered from Sunday (0) to Saturday (6).
///
/// Stepping is cyclic: the successor of Saturday is Sunday and the
/// predecessor of Sunday is Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

const ALL: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

impl Weekday {
    /// Maps any integer onto the week, wrapping modulo 7 (0 = Sunday).
    pub fn from_index(index: i64) -> Self {
        ALL[index.rem_euclid(7) as usize]
    }

    /// Days since the preceding Sunday (0..=6).
    pub fn index(self) -> u32 {
        self as u32
    }

    /// The following day, wrapping Saturday to Sunday.
    pub fn succ(self) -> Self {
        Self::from_index(i64::from(self.index()) + 1)
    }

    /// The preceding day, wrapping Sunday to Saturday.
    pub fn pred(self) -> Self {
        Self::from_index(i64::from(self.index()) - 1)
    }

    /// Full English name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn succ_wraps() {
        assert_eq!(Weekday::Saturday.succ(), Weekday::Sunday);
        assert_eq!(Weekday::Sunday.succ(), Weekday::Monday);
    }

    #[test]
    fn pred_wraps() {
        assert_eq!(Weekday::Sunday.pred(), Weekday::Saturday);
        assert_eq!(Weekday::Monday.pred(), Weekday::Sunday);
    }

    #[test]
    fn seven_steps_is_identity() {
        for day in ALL {
            let mut w = day;
            for _ in 0..7 {
                w = w.succ();
            }
            assert_eq!(w, day);
            assert_eq!(day.succ().pred(), day);
        }
    }

    #[test]
    fn from_index_wraps_negative() {
        assert_eq!(Weekday::from_index(-1), Weekday::Saturday);
        assert_eq!(Weekday::from_index(7), Weekday::Sunday);
        assert_eq!(Weekday::from_index(11), Weekday::Thursday);
    }

    #[test]
    fn index_roundtrip() {
        for (i, day) in ALL.iter().enumerate() {
            assert_eq!(day.index() as usize, i);
            assert_eq!(Weekday::from_index(i as i64), *day);
        }
    }

    #[test]
    fn display_full_name() {
        assert_eq!(Weekday::Wednesday.to_string(), "Wednesday");
        assert_eq!(format!("{}", Weekday::Sunday), "Sunday");
    }
}
