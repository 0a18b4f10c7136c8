mod bounds;
mod clock;
mod consts;
mod grid;
mod prelude;
mod types;

pub use bounds::{BoundsConfig, BoundsError, CalendarBounds, Navigation};
pub use clock::{Clock, FixedClock, SystemClock, today};
pub use consts::*;
pub use grid::{CalendarGrid, Week, day_of_week, week_row, weekday_of, weeks_in_month};
pub use types::{Day, Month, Weekday, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use std::str::FromStr;

/// A valid proleptic Gregorian calendar date.
///
/// Navigation never produces an invalid date: moving to a month that is
/// shorter than the current day clamps the day to the month's last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct Date {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Year {} is outside the calendar (must be 1-{})", "_0", MAX_YEAR)]
    YearOutOfRange(i32),
}

impl std::error::Error for DateError {}

impl Date {
    /// Creates a date from raw components
    ///
    /// # Errors
    /// Returns the first component that fails validation.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, month, year)?,
        })
    }

    /// Creates a date from typed components, checking the day against the month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` does not exist in that month.
    pub fn from_parts(year: Year, month: Month, day: Day) -> Result<Self, DateError> {
        let day = Day::new(day.get(), month.get(), year.get())?;
        Ok(Self { year, month, day })
    }

    /// Current UTC date from the system clock
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if the clock is outside the supported years.
    pub fn today() -> Result<Self, DateError> {
        today(&SystemClock)
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    pub const fn weekday(&self) -> Weekday {
        weekday_of(self.day.get(), self.month.get(), self.year.get())
    }

    /// Grid layout of the month this date falls in
    pub fn grid(&self) -> CalendarGrid {
        CalendarGrid::new(self.month, self.year)
    }

    /// Same month and year, different day (picking a day in the grid)
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the month has no such day.
    pub fn with_day(self, day: u8) -> Result<Self, DateError> {
        let day = Day::new(day, self.month.get(), self.year.get())?;
        Ok(Self { day, ..self })
    }

    /// Same year, different month; the day is clamped to the new month's length
    pub fn with_month(self, month: Month) -> Self {
        self.moved_to(self.year, month)
    }

    /// Same month, different year; Feb 29 becomes Feb 28 in a common year
    pub fn with_year(self, year: Year) -> Self {
        self.moved_to(year, self.month)
    }

    /// One month back, rolling into December of the previous year.
    ///
    /// The day is clamped, so `d.previous_month().next_month()` is not always `d`
    /// (Mar 31 -> Feb 29 -> Mar 29). January of year 1 is returned unchanged.
    pub fn previous_month(self) -> Self {
        let year = if self.month.get() == JANUARY {
            let Some(year) = self.year.pred() else {
                log::debug!("{self} is the first month of the calendar, not moving back");
                return self;
            };
            year
        } else {
            self.year
        };
        self.moved_to(year, self.month.previous())
    }

    /// One month forward, rolling into January of the next year.
    ///
    /// The day is clamped like [`Date::previous_month`]. December of
    /// `MAX_YEAR` is returned unchanged.
    pub fn next_month(self) -> Self {
        let year = if self.month.get() == DECEMBER {
            let Some(year) = self.year.succ() else {
                log::debug!("{self} is the last month of the calendar, not moving forward");
                return self;
            };
            year
        } else {
            self.year
        };
        self.moved_to(year, self.month.next())
    }

    fn moved_to(self, year: Year, month: Month) -> Self {
        let day = self.day.clamp_to(month, year);
        if day != self.day {
            log::debug!(
                "clamped day {} to {} moving from {self} to {:04}-{:02}",
                self.day,
                day,
                year.get(),
                month.get()
            );
        }
        Self { year, month, day }
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = u16::try_from(date.year()).map_err(|_| DateError::YearOutOfRange(date.year()))?;
        let year = Year::new(year).map_err(|_| DateError::YearOutOfRange(date.year()))?;
        let month = u8::try_from(date.month()).map_err(|_| DateError::InvalidFormat(date.to_string()))?;
        let day = u8::try_from(date.day()).map_err(|_| DateError::InvalidFormat(date.to_string()))?;
        Self::from_parts(year, Month::new(month)?, Day::new(day, month, year.get())?)
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        // ISO format only: YYYY-MM-DD
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [year, month, day] => {
                let year = Self::parse_u16(year)?;
                let month = Self::parse_u8(month)?;
                let day = Self::parse_u8(day)?;
                Self::from_ymd(year, month, day)
            }
            _ => Err(DateError::InvalidFormat(format!(
                "Expected 2 {} separators, found {}: {s}",
                DATE_SEPARATOR,
                parts.len() - 1
            ))),
        }
    }
}

impl Date {
    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, DateError> {
        s.parse::<u16>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, DateError> {
        s.parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn test_from_ymd_valid() {
        let d = date(2024, 2, 29);
        assert_eq!(d.year(), 2024);
        assert_eq!(d.month(), 2);
        assert_eq!(d.day(), 29);
    }

    #[test]
    fn test_from_ymd_invalid() {
        assert!(matches!(Date::from_ymd(0, 1, 1), Err(DateError::InvalidYear(0))));
        assert!(matches!(Date::from_ymd(2024, 13, 1), Err(DateError::InvalidMonth(13))));
        assert!(matches!(
            Date::from_ymd(2023, 2, 29),
            Err(DateError::InvalidDay {
                month: 2,
                day: 29,
                year: 2023
            })
        ));
    }

    #[test]
    fn test_from_parts_checks_day_against_month() {
        let year = Year::new(2024).unwrap();
        let day: Day = 31.try_into().unwrap();
        assert!(Date::from_parts(year, Month::new(1).unwrap(), day).is_ok());
        assert!(Date::from_parts(year, Month::new(4).unwrap(), day).is_err());
    }

    #[test]
    fn test_weekday() {
        assert_eq!(date(2024, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(date(2024, 2, 29).weekday(), Weekday::Thursday);
    }

    #[test]
    fn test_previous_month_cases() {
        struct TestCase {
            from:        Date,
            expected:    Date,
            description: &'static str,
        }

        let cases = [
            TestCase {
                from:        date(2024, 1, 31),
                expected:    date(2023, 12, 31),
                description: "rolls year back, December keeps day 31",
            },
            TestCase {
                from:        date(2024, 3, 31),
                expected:    date(2024, 2, 29),
                description: "clamps to leap February",
            },
            TestCase {
                from:        date(2023, 3, 30),
                expected:    date(2023, 2, 28),
                description: "clamps to common February",
            },
            TestCase {
                from:        date(2024, 5, 31),
                expected:    date(2024, 4, 30),
                description: "clamps to 30-day month",
            },
            TestCase {
                from:        date(2024, 6, 15),
                expected:    date(2024, 5, 15),
                description: "day unchanged",
            },
        ];

        for case in &cases {
            assert_eq!(case.from.previous_month(), case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_next_month_cases() {
        assert_eq!(date(2024, 1, 31).next_month(), date(2024, 2, 29));
        assert_eq!(date(2023, 1, 31).next_month(), date(2023, 2, 28));
        assert_eq!(date(2023, 12, 31).next_month(), date(2024, 1, 31));
        assert_eq!(date(2024, 8, 31).next_month(), date(2024, 9, 30));
        assert_eq!(date(2024, 2, 29).next_month(), date(2024, 3, 29));
    }

    #[test]
    fn test_navigation_is_not_reversible_after_clamping() {
        let start = date(2024, 3, 31);
        let round_trip = start.previous_month().next_month();
        assert_eq!(round_trip, date(2024, 3, 29));
        assert_ne!(round_trip, start);

        // Without clamping the round trip is exact
        let start = date(2024, 3, 15);
        assert_eq!(start.previous_month().next_month(), start);
    }

    #[test]
    fn test_navigation_stays_put_at_calendar_edges() {
        let first = date(1, 1, 20);
        assert_eq!(first.previous_month(), first);
        assert_eq!(first.next_month(), date(1, 2, 20));

        let last = date(MAX_YEAR, 12, 31);
        assert_eq!(last.next_month(), last);
        assert_eq!(last.previous_month(), date(MAX_YEAR, 11, 30));
    }

    #[test]
    fn test_navigation_always_yields_valid_dates() {
        let mut d = date(1999, 1, 31);
        for _ in 0..(12 * 30) {
            d = d.next_month();
            assert!(d.day() <= days_in_month(d.month(), d.year()));
        }
        for _ in 0..(12 * 30) {
            d = d.previous_month();
            assert!(d.day() <= days_in_month(d.month(), d.year()));
        }
    }

    #[test]
    fn test_with_day() {
        let d = date(2024, 2, 10);
        assert_eq!(d.with_day(29).unwrap(), date(2024, 2, 29));
        assert!(matches!(d.with_day(30), Err(DateError::InvalidDay { .. })));
        assert!(d.with_day(0).is_err());
    }

    #[test]
    fn test_with_month_clamps() {
        let d = date(2024, 1, 31);
        assert_eq!(d.with_month(Month::new(2).unwrap()), date(2024, 2, 29));
        assert_eq!(d.with_month(Month::new(11).unwrap()), date(2024, 11, 30));
        assert_eq!(d.with_month(Month::new(12).unwrap()), date(2024, 12, 31));
    }

    #[test]
    fn test_with_year_clamps_leap_day() {
        let d = date(2024, 2, 29);
        assert_eq!(d.with_year(Year::new(2023).unwrap()), date(2023, 2, 28));
        assert_eq!(d.with_year(Year::new(2028).unwrap()), date(2028, 2, 29));
    }

    #[test]
    fn test_grid_of_date() {
        let grid = date(2024, 1, 17).grid();
        assert_eq!(grid.month().get(), 1);
        assert_eq!(grid.year().get(), 2024);
        assert_eq!(grid.position_of(17), Some((2, 2)));
    }

    #[test]
    fn test_ordering() {
        assert!(date(2023, 12, 31) < date(2024, 1, 1));
        assert!(date(2024, 1, 2) > date(2024, 1, 1));
        assert!(date(2024, 2, 1) > date(2024, 1, 31));
    }

    #[test]
    fn test_display() {
        assert_eq!(date(2024, 2, 9).to_string(), "2024-02-09");
        assert_eq!(date(987, 12, 31).to_string(), "0987-12-31");
    }

    #[test]
    fn test_parse() {
        assert_eq!("2024-02-29".parse::<Date>().unwrap(), date(2024, 2, 29));
        assert_eq!(" 2024-2-9 ".parse::<Date>().unwrap(), date(2024, 2, 9));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("".parse::<Date>(), Err(DateError::EmptyInput)));
        assert!(matches!("2024-02".parse::<Date>(), Err(DateError::InvalidFormat(_))));
        assert!(matches!("2024-02-01-05".parse::<Date>(), Err(DateError::InvalidFormat(_))));
        assert!(matches!("2024-xx-01".parse::<Date>(), Err(DateError::InvalidFormat(_))));
        assert!(matches!("2023-02-29".parse::<Date>(), Err(DateError::InvalidDay { .. })));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            DateError::InvalidDay {
                month: 2,
                day: 30,
                year: 2024
            }
            .to_string(),
            "Invalid day 30 for month 2024-02"
        );
        assert_eq!(
            DateError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(2024, 1, 31);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2024-01-31\"");

        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);

        assert!(serde_json::from_str::<Date>("\"2024-04-31\"").is_err());
    }

    #[test]
    fn test_try_from_naive_date() {
        let naive = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(Date::try_from(naive).unwrap(), date(2026, 10, 19));

        let naive = NaiveDate::from_ymd_opt(-5, 1, 1).unwrap();
        assert!(matches!(Date::try_from(naive), Err(DateError::YearOutOfRange(-5))));

        let naive = NaiveDate::from_ymd_opt(10_000, 1, 1).unwrap();
        assert!(matches!(Date::try_from(naive), Err(DateError::YearOutOfRange(10_000))));
    }
}
