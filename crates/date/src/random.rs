//! Random date generation by rejection sampling.

use rand::Rng;
use tracing::{debug, trace};

use crate::date::Date;
use crate::error::InvalidDate;
use crate::table::{YEAR_BASE, check};

/// Default lower bound of the random year range.
pub const RANDOM_MIN_YEAR: i32 = 1940;

/// Default upper bound of the random year range.
pub const RANDOM_MAX_YEAR: i32 = 2020;

/// Configuration for [`Date::random_with`].
///
/// # Example
///
/// ```
/// use date_time::{Date, RandomDateConfig};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let config = RandomDateConfig::new().with_year_range(2000, 2010);
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let date = Date::random_with(&config, &mut rng).unwrap();
/// assert!((2000..=2010).contains(&date.year()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomDateConfig {
    /// Smallest year that may be drawn.
    min_year: i32,
    /// Largest year that may be drawn.
    max_year: i32,
    /// Upper bound on the number of triples drawn before giving up.
    max_attempts: usize,
}

impl RandomDateConfig {
    /// Creates a configuration with the defaults:
    /// years `1940..=2020`, `max_attempts = 10_000`.
    pub fn new() -> Self {
        Self {
            min_year: RANDOM_MIN_YEAR,
            max_year: RANDOM_MAX_YEAR,
            max_attempts: 10_000,
        }
    }

    /// Sets the inclusive year range.
    pub fn with_year_range(mut self, min_year: i32, max_year: i32) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    /// Sets the attempt cap.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Returns the smallest year that may be drawn.
    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    /// Returns the largest year that may be drawn.
    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    /// Returns the attempt cap.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the year range is empty or starts before 1900,
    /// or if `max_attempts` is zero.
    pub fn validate(&self) -> Result<(), InvalidDate> {
        if self.min_year < YEAR_BASE || self.min_year > self.max_year {
            return Err(InvalidDate::InvalidYearRange {
                min_year: self.min_year,
                max_year: self.max_year,
            });
        }
        if self.max_attempts == 0 {
            return Err(InvalidDate::InvalidAttempts);
        }
        Ok(())
    }
}

impl Default for RandomDateConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws a `(day, month, year)` triple uniformly; the triple may be illegal.
fn draw(min_year: i32, max_year: i32, rng: &mut impl Rng) -> (u32, u32, i32) {
    (
        rng.random_range(1..=31),
        rng.random_range(1..=12),
        rng.random_range(min_year..=max_year),
    )
}

impl Date {
    /// Draws a uniformly distributed date using `config`.
    ///
    /// Triples are drawn uniformly from `1..=31 x 1..=12 x min..=max` and
    /// rejected until one is a legal date, so every legal date in the range
    /// is equally likely.
    ///
    /// # Errors
    ///
    /// Returns the [`RandomDateConfig::validate`] error for a bad config and
    /// [`InvalidDate::AttemptsExhausted`] if no triple was accepted within
    /// `max_attempts` draws.
    #[tracing::instrument(
        skip_all,
        fields(min_year = config.min_year(), max_year = config.max_year())
    )]
    pub fn random_with(
        config: &RandomDateConfig,
        rng: &mut impl Rng,
    ) -> Result<Self, InvalidDate> {
        config.validate()?;
        for attempt in 1..=config.max_attempts() {
            let (day, month, year) = draw(config.min_year(), config.max_year(), rng);
            if check(day, month, year) {
                trace!(attempt, day, month, year, "accepted random date");
                return Self::new(day, month, year);
            }
        }
        debug!(
            attempts = config.max_attempts(),
            "rejection sampling exhausted"
        );
        Err(InvalidDate::AttemptsExhausted {
            attempts: config.max_attempts(),
        })
    }

    /// Draws a uniformly distributed date between 1940 and 2020.
    pub fn random(rng: &mut impl Rng) -> Self {
        loop {
            let (day, month, year) = draw(RANDOM_MIN_YEAR, RANDOM_MAX_YEAR, rng);
            if let Ok(date) = Self::new(day, month, year) {
                return date;
            }
        }
    }

    /// Draws a date between 1940 and 2020 from the thread-local generator.
    pub fn random_date() -> Self {
        Self::random(&mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_defaults() {
        let cfg = RandomDateConfig::default();
        assert_eq!(cfg.min_year(), 1940);
        assert_eq!(cfg.max_year(), 2020);
        assert_eq!(cfg.max_attempts(), 10_000);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_builder_chaining() {
        let cfg = RandomDateConfig::new()
            .with_year_range(1900, 1901)
            .with_max_attempts(5);
        assert_eq!(cfg.min_year(), 1900);
        assert_eq!(cfg.max_year(), 1901);
        assert_eq!(cfg.max_attempts(), 5);
    }

    #[test]
    fn test_validate_year_before_base() {
        let cfg = RandomDateConfig::new().with_year_range(1899, 2000);
        assert_eq!(
            cfg.validate().unwrap_err(),
            InvalidDate::InvalidYearRange {
                min_year: 1899,
                max_year: 2000,
            }
        );
    }

    #[test]
    fn test_validate_inverted_range() {
        let cfg = RandomDateConfig::new().with_year_range(2001, 2000);
        assert!(matches!(
            cfg.validate().unwrap_err(),
            InvalidDate::InvalidYearRange { .. }
        ));
    }

    #[test]
    fn test_validate_zero_attempts() {
        let cfg = RandomDateConfig::new().with_max_attempts(0);
        assert_eq!(cfg.validate().unwrap_err(), InvalidDate::InvalidAttempts);
    }

    #[test]
    fn random_with_rejects_bad_config() {
        let mut rng = StdRng::seed_from_u64(1);
        let cfg = RandomDateConfig::new().with_year_range(1800, 1850);
        assert!(Date::random_with(&cfg, &mut rng).is_err());
    }

    #[test]
    fn random_with_respects_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let cfg = RandomDateConfig::new().with_year_range(1999, 2001);
        for _ in 0..500 {
            let d = Date::random_with(&cfg, &mut rng).unwrap();
            assert!((1999..=2001).contains(&d.year()), "year {}", d.year());
        }
    }

    #[test]
    fn random_default_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let d = Date::random(&mut rng);
            assert!((RANDOM_MIN_YEAR..=RANDOM_MAX_YEAR).contains(&d.year()));
        }
    }

    #[test]
    fn single_attempt_sometimes_exhausts() {
        let cfg = RandomDateConfig::new().with_max_attempts(1);
        let mut accepted = 0;
        let mut exhausted = 0;
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..2000 {
            match Date::random_with(&cfg, &mut rng) {
                Ok(_) => accepted += 1,
                Err(InvalidDate::AttemptsExhausted { attempts: 1 }) => exhausted += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
        assert!(accepted > 0);
        assert!(exhausted > 0);
    }

    #[test]
    fn same_seed_same_dates() {
        let a: Vec<Date> = {
            let mut rng = StdRng::seed_from_u64(99);
            (0..20).map(|_| Date::random(&mut rng)).collect()
        };
        let b: Vec<Date> = {
            let mut rng = StdRng::seed_from_u64(99);
            (0..20).map(|_| Date::random(&mut rng)).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn thread_local_generator() {
        let d = Date::random_date();
        assert!((RANDOM_MIN_YEAR..=RANDOM_MAX_YEAR).contains(&d.year()));
    }
}
