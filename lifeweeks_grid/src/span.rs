// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::{Days, Months, NaiveDate};

use crate::WEEKS_PER_YEAR;

/// Upper bound accepted for a life expectancy, in years.
pub const MAX_LIFE_EXPECTANCY_YEARS: u32 = 120;

/// Length of a grid week in days.
pub const DAYS_PER_WEEK: i64 = 7;

/// Number of whole weeks from `birth` to `date`, rounded toward negative infinity.
///
/// Dates before `birth` yield negative weeks.
///
/// ```rust
/// use chrono::NaiveDate;
/// use lifeweeks_grid::week_at;
///
/// let birth = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// assert_eq!(week_at(NaiveDate::from_ymd_opt(2000, 1, 7).unwrap(), birth), 0);
/// assert_eq!(week_at(NaiveDate::from_ymd_opt(2000, 1, 8).unwrap(), birth), 1);
/// assert_eq!(week_at(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap(), birth), -1);
/// ```
#[must_use]
pub fn week_at(date: NaiveDate, birth: NaiveDate) -> i64 {
    date.signed_duration_since(birth)
        .num_days()
        .div_euclid(DAYS_PER_WEEK)
}

/// A birth date paired with an expected lifespan.
///
/// A lifespan of zero years is representable and means there is nothing to
/// draw. Longer lifespans are clamped to [`MAX_LIFE_EXPECTANCY_YEARS`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LifeSpan {
    birth_date: NaiveDate,
    life_expectancy_years: u32,
}

impl LifeSpan {
    /// Creates a lifespan starting at `birth_date`.
    #[must_use]
    pub fn new(birth_date: NaiveDate, life_expectancy_years: u32) -> Self {
        Self {
            birth_date,
            life_expectancy_years: life_expectancy_years.min(MAX_LIFE_EXPECTANCY_YEARS),
        }
    }

    /// Creates a lifespan for someone who is `age_years` old on `today`.
    ///
    /// Returns `None` if the derived birth date is not representable.
    #[must_use]
    pub fn from_age(age_years: u32, life_expectancy_years: u32, today: NaiveDate) -> Option<Self> {
        let months = age_years.checked_mul(12)?;
        let birth_date = today.checked_sub_months(Months::new(months))?;
        Some(Self::new(birth_date, life_expectancy_years))
    }

    /// Returns the birth date.
    #[must_use]
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Returns the expected lifespan in years.
    #[must_use]
    pub fn life_expectancy_years(&self) -> u32 {
        self.life_expectancy_years
    }

    /// Sets the expected lifespan, clamped to [`MAX_LIFE_EXPECTANCY_YEARS`].
    pub fn set_life_expectancy_years(&mut self, years: u32) {
        self.life_expectancy_years = years.min(MAX_LIFE_EXPECTANCY_YEARS);
    }

    /// Total number of weeks in the grid.
    #[must_use]
    pub fn total_weeks(&self) -> u32 {
        self.life_expectancy_years * WEEKS_PER_YEAR
    }

    /// Whole weeks lived as of `today`, possibly negative when `today`
    /// precedes the birth date.
    #[must_use]
    pub fn weeks_lived_raw(&self, today: NaiveDate) -> i64 {
        week_at(today, self.birth_date)
    }

    /// Whole weeks lived as of `today`, floored at zero.
    ///
    /// The result may exceed [`LifeSpan::total_weeks`]; use
    /// [`LifeSpan::lived_weeks_in_grid`] for rendering.
    #[must_use]
    pub fn weeks_lived(&self, today: NaiveDate) -> u32 {
        u32::try_from(self.weeks_lived_raw(today).max(0)).unwrap_or(u32::MAX)
    }

    /// Weeks lived, clamped into the grid.
    #[must_use]
    pub fn lived_weeks_in_grid(&self, today: NaiveDate) -> u32 {
        self.weeks_lived(today).min(self.total_weeks())
    }

    /// Returns `true` once `today` is past the expected lifespan.
    #[must_use]
    pub fn is_beyond_expectancy(&self, today: NaiveDate) -> bool {
        self.weeks_lived(today) > self.total_weeks()
    }

    /// First day of `week`.
    #[must_use]
    pub fn date_of_week(&self, week: u32) -> Option<NaiveDate> {
        let days = u64::from(week) * 7;
        self.birth_date.checked_add_days(Days::new(days))
    }

    /// Week index of `date` relative to the birth date.
    #[must_use]
    pub fn week_of_date(&self, date: NaiveDate) -> i64 {
        week_at(date, self.birth_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weeks_lived_for_known_dates() {
        let span = LifeSpan::new(date(1990, 1, 1), 80);
        // 34 years with 8 leap days is 12418 days, exactly 1774 weeks.
        assert_eq!(span.weeks_lived(date(2024, 1, 1)), 1774);
        assert_eq!(span.weeks_lived(date(2023, 12, 31)), 1773);
        assert_eq!(span.total_weeks(), 4160);
    }

    #[test]
    fn weeks_lived_floors_at_zero_before_birth() {
        let span = LifeSpan::new(date(2000, 6, 1), 80);
        assert_eq!(span.weeks_lived_raw(date(2000, 5, 31)), -1);
        assert_eq!(span.weeks_lived(date(2000, 5, 31)), 0);
    }

    #[test]
    fn lived_weeks_are_clamped_to_grid() {
        let span = LifeSpan::new(date(1900, 1, 1), 1);
        assert!(span.is_beyond_expectancy(date(2000, 1, 1)));
        assert_eq!(span.lived_weeks_in_grid(date(2000, 1, 1)), 52);
    }

    #[test]
    fn expectancy_is_clamped() {
        let mut span = LifeSpan::new(date(2000, 1, 1), 500);
        assert_eq!(span.life_expectancy_years(), MAX_LIFE_EXPECTANCY_YEARS);
        span.set_life_expectancy_years(0);
        assert_eq!(span.total_weeks(), 0);
    }

    #[test]
    fn from_age_subtracts_whole_years() {
        let span = LifeSpan::from_age(30, 80, date(2024, 3, 15)).unwrap();
        assert_eq!(span.birth_date(), date(1994, 3, 15));
    }

    #[test]
    fn date_of_week_inverts_week_of_date() {
        let span = LifeSpan::new(date(1990, 1, 1), 80);
        for week in [0_u32, 1, 51, 52, 1773, 4159] {
            let first_day = span.date_of_week(week).unwrap();
            assert_eq!(span.week_of_date(first_day), i64::from(week));
        }
    }
}
