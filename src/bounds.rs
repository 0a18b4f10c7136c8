use serde::{Deserialize, Serialize};

use crate::{
    Clock, DEFAULT_YEAR_MAX, DEFAULT_YEAR_MIN, DECEMBER, Date, DateError, JANUARY, Year, today,
};

/// The range of years a date picker lets the user navigate (inclusive).
/// The minimum year must be less than or equal to the maximum year.
///
/// Loaded from configuration as `{"min_year": 1970, "max_year": 3000}`;
/// missing fields fall back to [`DEFAULT_YEAR_MIN`] and [`DEFAULT_YEAR_MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoundsConfig", into = "BoundsConfig")]
pub struct CalendarBounds {
    min: Year,
    max: Year,
}

/// Serialized shape of [`CalendarBounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsConfig {
    pub min_year: u16,
    pub max_year: u16,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_YEAR_MIN,
            max_year: DEFAULT_YEAR_MAX,
        }
    }
}

/// Error type for year range configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoundsError {
    /// Minimum year is after maximum year.
    #[error("Invalid year range: min ({min}) is after max ({max})")]
    InvertedRange { min: u16, max: u16 },

    /// A bound is not a valid year.
    #[error(transparent)]
    Date(#[from] DateError),
}

/// Outcome of a bounds-aware month step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// The date moved to the adjacent month.
    Moved(Date),
    /// The date was already at the edge of the range and is returned unchanged.
    AtBoundary(Date),
}

impl Navigation {
    /// The resulting date, moved or not
    pub const fn date(self) -> Date {
        match self {
            Self::Moved(date) | Self::AtBoundary(date) => date,
        }
    }

    pub const fn moved(self) -> bool {
        matches!(self, Self::Moved(_))
    }
}

impl CalendarBounds {
    /// Creates a year range with validation.
    ///
    /// # Errors
    /// Returns `BoundsError::Date` if either year is outside `1..=MAX_YEAR`,
    /// or `BoundsError::InvertedRange` if `min > max`.
    pub fn new(min_year: u16, max_year: u16) -> Result<Self, BoundsError> {
        let min = Year::new(min_year)?;
        let max = Year::new(max_year)?;
        if min > max {
            return Err(BoundsError::InvertedRange {
                min: min_year,
                max: max_year,
            });
        }
        Ok(Self { min, max })
    }

    pub const fn min_year(&self) -> Year {
        self.min
    }

    pub const fn max_year(&self) -> Year {
        self.max
    }

    /// Checks if the date's year lies in the range
    pub fn contains(&self, date: &Date) -> bool {
        (self.min..=self.max).contains(&date.year_typed())
    }

    /// True for any date in January of the minimum year
    pub const fn is_at_lower_bound(&self, date: &Date) -> bool {
        date.month() == JANUARY && date.year() == self.min.get()
    }

    /// True for any date in December of the maximum year
    pub const fn is_at_upper_bound(&self, date: &Date) -> bool {
        date.month() == DECEMBER && date.year() == self.max.get()
    }

    /// Clamps a typed-in year into the range
    pub fn clamp_year(&self, year: i32) -> Year {
        if year <= i32::from(self.min.get()) {
            return self.min;
        }
        if year >= i32::from(self.max.get()) {
            return self.max;
        }
        u16::try_from(year)
            .ok()
            .and_then(|y| Year::new(y).ok())
            .unwrap_or(self.min)
    }

    /// Moves a date into the range, keeping month and (clamped) day
    pub fn clamp(&self, date: Date) -> Date {
        let year = self.clamp_year(i32::from(date.year()));
        if year == date.year_typed() {
            date
        } else {
            date.with_year(year)
        }
    }

    /// Sets the year of `date` from user input, clamping the year to the range
    /// and the day to the resulting month.
    pub fn set_year(&self, date: Date, year: i32) -> Date {
        date.with_year(self.clamp_year(year))
    }

    /// One month back unless that would leave the range
    pub fn previous_month(&self, date: Date) -> Navigation {
        if (date.year(), date.month()) <= (self.min.get(), JANUARY) {
            log::debug!("{date} is at the lower bound {}, not moving back", self.min);
            return Navigation::AtBoundary(date);
        }
        Navigation::Moved(date.previous_month())
    }

    /// One month forward unless that would leave the range
    pub fn next_month(&self, date: Date) -> Navigation {
        if (date.year(), date.month()) >= (self.max.get(), DECEMBER) {
            log::debug!("{date} is at the upper bound {}, not moving forward", self.max);
            return Navigation::AtBoundary(date);
        }
        Navigation::Moved(date.next_month())
    }

    /// Today's UTC date from `clock`, moved into the range
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if the clock is outside the supported years.
    pub fn today(&self, clock: &impl Clock) -> Result<Date, DateError> {
        today(clock).map(|date| self.clamp(date))
    }
}

impl Default for CalendarBounds {
    fn default() -> Self {
        Self {
            min: Year::from_const(DEFAULT_YEAR_MIN),
            max: Year::from_const(DEFAULT_YEAR_MAX),
        }
    }
}

impl TryFrom<BoundsConfig> for CalendarBounds {
    type Error = BoundsError;

    fn try_from(config: BoundsConfig) -> Result<Self, Self::Error> {
        Self::new(config.min_year, config.max_year)
    }
}

impl From<CalendarBounds> for BoundsConfig {
    fn from(bounds: CalendarBounds) -> Self {
        Self {
            min_year: bounds.min.get(),
            max_year: bounds.max.get(),
        }
    }
}
