//! Month grid layout: weekday arithmetic and week rows.
//!
//! A month is laid out as rows of seven columns, Monday first. Slots
//! before day 1 and after the last day of the month are empty.

use crate::consts::{DAYS_PER_WEEK, FEBRUARY, MAX_MONTH};
use crate::types::{Month, Weekday, Year, days_in_month};

/// Day of the week for a date, `Monday = 1` .. `Sunday = 7`.
///
/// Zeller's congruence on integers. January and February count as months
/// 13 and 14 of the previous year.
///
/// # Panics
/// If `month` is outside `1..=12` or `year` is 0.
pub const fn day_of_week(day: u8, month: u8, year: u16) -> u8 {
    assert!(month != 0 && month <= MAX_MONTH, "month out of range");
    assert!(year != 0, "year out of range");

    let (m, y) = if month <= FEBRUARY {
        (month as u32 + 12, year as u32 - 1)
    } else {
        (month as u32, year as u32)
    };

    // 0 = Saturday, 1 = Sunday, 2 = Monday, ...
    let h = (day as u32 + (13 * (m + 1)) / 5 + y + y / 4 - y / 100 + y / 400) % 7;

    (((h + 5) % 7) + 1) as u8
}

/// Typed form of [`day_of_week`].
pub const fn weekday_of(day: u8, month: u8, year: u16) -> Weekday {
    Weekday::ALL[(day_of_week(day, month, year) - 1) as usize]
}

/// Number of week rows needed to display `month` of `year`.
pub const fn weeks_in_month(month: u8, year: u16) -> u8 {
    let days = days_in_month(month, year);
    let first_day = day_of_week(1, month, year);

    (days + first_day - 1).div_ceil(DAYS_PER_WEEK)
}

/// Day numbers for one row of the grid; 0 marks an empty slot.
///
/// `week` is 1-based and `first_day` is the weekday number (`Monday = 1`)
/// of the 1st of the month.
///
/// # Panics
/// If `week` is 0 or `first_day` is outside `1..=7`.
pub fn week_row(week: u8, first_day: u8, days_in_month: u8) -> [u8; 7] {
    assert!(week >= 1, "week index is 1-based");
    assert!(
        (1..=DAYS_PER_WEEK).contains(&first_day),
        "first day must be a weekday number 1-7"
    );

    let start = i16::from(DAYS_PER_WEEK) * (i16::from(week) - 1) + 1 - (i16::from(first_day) - 1);
    let last = i16::from(days_in_month);

    let mut row = [0; 7];
    for (column, slot) in (0_i16..).zip(row.iter_mut()) {
        let day = start + column;
        if (1..=last).contains(&day) {
            *slot = u8::try_from(day).unwrap_or(0);
        }
    }
    row
}

/// One row of a [`CalendarGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Week([Option<u8>; 7]);

impl Week {
    fn from_row(row: [u8; 7]) -> Self {
        Self(row.map(|day| (day != 0).then_some(day)))
    }

    /// Slots in column order, Monday first
    pub const fn slots(&self) -> &[Option<u8>; 7] {
        &self.0
    }

    /// Day numbers present in this row
    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().flatten().copied()
    }
}

/// Week-by-week layout of a single month.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalendarGrid {
    year:          Year,
    month:         Month,
    first_weekday: Weekday,
    days_in_month: u8,
    weeks:         Vec<Week>,
}

impl CalendarGrid {
    pub fn new(month: Month, year: Year) -> Self {
        let (m, y) = (month.get(), year.get());
        let first_day = day_of_week(1, m, y);
        let days = days_in_month(m, y);
        let week_count = weeks_in_month(m, y);

        log::trace!("building grid for {y:04}-{m:02}: {week_count} weeks, first day {first_day}");

        let weeks = (1..=week_count)
            .map(|week| Week::from_row(week_row(week, first_day, days)))
            .collect();

        Self {
            year,
            month,
            first_weekday: weekday_of(1, m, y),
            days_in_month: days,
            weeks,
        }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    /// Weekday the 1st of the month falls on
    pub const fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    pub const fn days_in_month(&self) -> u8 {
        self.days_in_month
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// All day numbers in row-major order
    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        self.weeks.iter().flat_map(Week::days)
    }

    /// `(row, column)` of `day`, both zero-based; `None` if the month has no such day
    pub fn position_of(&self, day: u8) -> Option<(usize, usize)> {
        if day == 0 || day > self.days_in_month {
            return None;
        }
        let index = usize::from(day - 1) + self.first_weekday.column();
        let per_week = usize::from(DAYS_PER_WEEK);
        Some((index / per_week, index % per_week))
    }
}
