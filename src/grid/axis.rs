//! The time axis: which 7 days and which hour window the grid shows.

use chrono::{Datelike, Duration, NaiveDate};

use super::error::GridError;

/// One visible day column, derived once per render from the week start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub index: usize,
}

/// Immutable grid configuration: 7 consecutive days starting at
/// `week_start`, showing hours `[start_hour, end_hour)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeAxis {
    week_start: NaiveDate,
    start_hour: u32,
    end_hour: u32,
}

impl TimeAxis {
    /// Create an axis, validating the hour window.
    ///
    /// A window where `start_hour >= end_hour` (or either bound is outside
    /// `0..=24`) is a programmer error in the composing page and fails here
    /// rather than producing a silently empty grid.
    pub fn new(week_start: NaiveDate, start_hour: u32, end_hour: u32) -> Result<Self, GridError> {
        if start_hour >= end_hour || end_hour > 24 {
            return Err(GridError::InvalidHourRange {
                start_hour,
                end_hour,
            });
        }
        Ok(Self {
            week_start,
            start_hour,
            end_hour,
        })
    }

    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// The axis shifted by whole weeks (for prev/next-week navigation).
    pub fn shifted_weeks(&self, weeks: i64) -> Self {
        Self {
            week_start: self.week_start + Duration::weeks(weeks),
            ..*self
        }
    }

    /// The 7 visible day columns, in display order.
    pub fn day_columns(&self) -> Vec<DayColumn> {
        (0..7)
            .map(|index| DayColumn {
                date: self.week_start + Duration::days(index as i64),
                index,
            })
            .collect()
    }

    /// Column index for a date, `None` when the date is outside the week.
    pub fn day_index_of(&self, date: NaiveDate) -> Option<usize> {
        let offset = (date - self.week_start).num_days();
        (0..7).contains(&offset).then_some(offset as usize)
    }

    /// First visible minute of the day (inclusive).
    pub fn window_start_minutes(&self) -> i32 {
        self.start_hour as i32 * 60
    }

    /// Last visible minute of the day (exclusive).
    pub fn window_end_minutes(&self) -> i32 {
        self.end_hour as i32 * 60
    }

    pub fn visible_minutes(&self) -> i32 {
        self.window_end_minutes() - self.window_start_minutes()
    }

    pub fn visible_hours(&self) -> std::ops::Range<u32> {
        self.start_hour..self.end_hour
    }
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn week_start_for(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64 + 7) % 7;
    date - Duration::days(offset)
}
