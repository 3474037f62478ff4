use std::ops::RangeInclusive;

use chrono::{Datelike, Month};

use crate::domain::shift_model::CalendarDate;
use crate::error::RotationError;

/// Years offered either side of the current one by the month/year picker.
pub const YEAR_PICKER_SPAN: i32 = 10;

/// The month currently on screen.
/// `month` runs from 0 (January) to 11 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Result<Self, RotationError> {
        if month > 11 {
            return Err(RotationError::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    /// Month that contains `date`.
    pub fn containing(date: CalendarDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn prev(self) -> Self {
        self.shifted(-1)
    }

    pub fn next(self) -> Self {
        self.shifted(1)
    }

    /// Moves `months` forward (or backward when negative), wrapping years.
    pub fn shifted(self, months: i32) -> Self {
        let total = self.year as i64 * 12 + self.month as i64 + months as i64;
        Self {
            year: total.div_euclid(12) as i32,
            month: total.rem_euclid(12) as u32,
        }
    }

    /// Picks a month within the same year.
    pub fn with_month(self, month: u32) -> Result<Self, RotationError> {
        Self::new(self.year, month)
    }

    /// Picks a year, keeping the month.
    pub fn with_year(self, year: i32) -> Self {
        Self { year, ..self }
    }

    /// e.g. "January 2024"
    pub fn title(&self) -> String {
        month_title(self.year, self.month)
    }
}

/// Heading for a zero-based month, e.g. "January 2024".
pub fn month_title(year: i32, month: u32) -> String {
    format!("{} {}", month_name(month), year)
}

/// English name of a zero-based month index.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_add(1)
        .and_then(|m| u8::try_from(m).ok())
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("")
}

/// Years the picker lists around `current_year`.
pub fn year_options(current_year: i32) -> RangeInclusive<i32> {
    (current_year - YEAR_PICKER_SPAN)..=(current_year + YEAR_PICKER_SPAN)
}
