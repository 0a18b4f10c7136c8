//! Wall-clock access for "jump to today".
//!
//! Everything else in the crate is a pure function of its inputs; reading the
//! clock goes through [`Clock`] so callers and tests can pin the date.

use chrono::{DateTime, Utc};

use crate::{Date, DateError};

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Current calendar date in UTC.
///
/// # Errors
/// Returns `DateError::YearOutOfRange` if the clock is outside the supported years.
pub fn today(clock: &impl Clock) -> Result<Date, DateError> {
    Date::try_from(clock.now().date_naive())
}
