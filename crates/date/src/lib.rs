//! # date-time
//!
//! A Gregorian calendar day, valid from 1 January 1900 onward, with a
//! derived weekday, day-by-day stepping, signed day differences, text
//! parsing/formatting and random generation.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(day, month, year)"] -->|"check()"| B["Date"]
//!     T["\"D/M/Y\", token, ctime text"] -->|"parse"| A
//!     S["Unix seconds"] -->|"from_timestamp()"| T
//!     B -->|"commit"| W["Weekday"]
//!     B -->|".next_day() / .previous_day()"| B
//!     B -->|"- Date"| D["i64 days"]
//!     B -->|"Display"| F["\"5 March 2024 Tuesday\""]
//!     R["RandomDateConfig + Rng"] -->|"random_with()"| B
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use date_time::{Date, Weekday};
//!
//! let date: Date = "15/6/2023".parse().unwrap();
//! assert_eq!(date.weekday(), Weekday::Thursday);
//! assert_eq!(date.to_string(), "15 June 2023 Thursday");
//!
//! let later = date + 17;
//! assert_eq!(later.to_slash_string(), "2/7/2023");
//! assert_eq!(later - date, 17);
//!
//! assert!(Date::new(29, 2, 2023).is_err());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `table` | Leap-year rule, days-per-month tables, validity check |
//! | `weekday` | Cyclic day-of-week enum |
//! | `month` | Month names and abbreviations |
//! | `date` | The `Date` type: setters, stepping, difference, operators |
//! | `parse` | Text input and canonical output |
//! | `random` | Rejection-sampled random dates |
//! | `error` | Error types |

mod date;
mod error;
mod month;
mod parse;
mod random;
mod table;
mod weekday;

pub use date::Date;
pub use error::InvalidDate;
pub use month::month_name;
pub use random::{RANDOM_MAX_YEAR, RANDOM_MIN_YEAR, RandomDateConfig};
pub use table::{YEAR_BASE, check, days_in_year, is_leap};
pub use weekday::Weekday;
