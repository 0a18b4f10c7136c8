use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR, MONTH_NAMES, WEEKDAY_LABELS,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// Longest month length across the calendar
const MAX_DAY: u8 = 31;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
///
/// This is the absolute domain of the engine; the picker's narrower
/// range lives in [`CalendarBounds`](crate::CalendarBounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        let non_zero = NonZeroU16::new(value).ok_or(DateError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(DateError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Builds a year from a compile-time constant
    pub(crate) const fn from_const(value: u16) -> Self {
        assert!(value >= MIN_YEAR && value <= MAX_YEAR, "year out of range");
        match NonZeroU16::new(value) {
            Some(non_zero) => Self(non_zero),
            None => panic!("year out of range"),
        }
    }

    /// The year before this one, if still inside the valid domain
    pub fn pred(self) -> Option<Self> {
        Self::new(self.get() - 1).ok()
    }

    /// The year after this one, if still inside the valid domain
    pub fn succ(self) -> Option<Self> {
        Self::new(self.get() + 1).ok()
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// English name of the month ("January".."December")
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[(self.get() - 1) as usize]
    }

    /// The month before this one, December after January
    pub fn previous(self) -> Self {
        let value = if self.get() == JANUARY {
            DECEMBER
        } else {
            self.get() - 1
        };
        NonZeroU8::new(value).map_or(self, Self)
    }

    /// The month after this one, January after December
    pub fn next(self) -> Self {
        let value = if self.get() == DECEMBER {
            JANUARY
        } else {
            self.get() + 1
        };
        NonZeroU8::new(value).map_or(self, Self)
    }

    /// Number of days this month has in `year`
    pub const fn length(self, year: Year) -> u8 {
        days_in_month(self.get(), year.get())
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given month and year
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or invalid for the given month and year.
    pub fn new(value: u8, month: u8, year: u16) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidDay {
            month,
            day: value,
            year,
        })?;

        let max_day = days_in_month(month, year);
        if value > max_day {
            return Err(DateError::InvalidDay {
                month,
                day: value,
                year,
            });
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Caps the day at the length of `month` in `year`
    pub(crate) fn clamp_to(self, month: Month, year: Year) -> Self {
        let max_day = month.length(year);
        if self.get() <= max_day {
            return self;
        }
        NonZeroU8::new(max_day).map_or(self, Self)
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate against a month without context, so only the calendar-wide range
        if !(MIN_DAY..=MAX_DAY).contains(&value) {
            return Err(DateError::InvalidDay {
                month: 0,
                day: value,
                year: 0,
            });
        }
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidDay {
            month: 0,
            day: value,
            year: 0,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub(crate) const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Maps an ISO weekday number (`Monday = 1` .. `Sunday = 7`)
    pub fn from_number(number: u8) -> Option<Self> {
        let index = usize::from(number.checked_sub(1)?);
        Self::ALL.get(index).copied()
    }

    /// ISO weekday number, `Monday = 1` .. `Sunday = 7`
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Zero-based grid column, Monday in column 0
    pub const fn column(self) -> usize {
        self as usize
    }

    /// Two-letter column header
    pub const fn label(self) -> &'static str {
        WEEKDAY_LABELS[self as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Length of `month` in `year`.
///
/// # Panics
/// If `month` is outside `1..=12`.
pub const fn days_in_month(month: u8, year: u16) -> u8 {
    assert!(month != 0 && month <= MAX_MONTH, "month out of range");

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[(month - 1) as usize]
    }
}
