use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::domain::pattern_logic::classify;
use crate::domain::shift_model::{
    CalendarCell,
    CalendarDate,
    MonthGrid,
    PatternAnchor,
    Week,
    DAYS_PER_WEEK,
};
use crate::error::RotationError;

/// First day of the month. `month` is 0 (January) to 11 (December).
fn first_day(year: i32, month: u32) -> Result<CalendarDate, RotationError> {
    if month > 11 {
        return Err(RotationError::InvalidMonth { month });
    }
    // NaiveDate expects 1-12
    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .ok_or(RotationError::DateOutOfRange { year, month })
}

/// Number of days in the month, leap years included.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, RotationError> {
    let first = first_day(year, month)?;

    // first day of the following month minus the first day of this one
    let next_month = if month == 11 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 2, 1)
    }
    .ok_or(RotationError::DateOutOfRange { year, month })?;

    Ok(next_month.signed_duration_since(first).num_days() as u32)
}

/// Blank cells before day 1 in a Monday-first week (Monday = 0, Sunday = 6).
pub fn first_weekday_offset(year: i32, month: u32) -> Result<usize, RotationError> {
    Ok(first_day(year, month)?.weekday().num_days_from_monday() as usize)
}

/// Lays out one month as Monday-first weeks of seven cells.
///
/// ```text
///      May 2024
/// Mo Tu We Th Fr Sa Su
///  .  .  1  2  3  4  5   <- two leading blanks
///  6  7  8  9 10 11 12
/// 13 14 15 16 17 18 19
/// 20 21 22 23 24 25 26
/// 27 28 29 30 31  .  .   <- padded to seven
/// ```
///
/// Occupied cells carry no shift yet; see [`project`].
pub fn build_month(year: i32, month: u32) -> Result<MonthGrid, RotationError> {
    let first = first_day(year, month)?;
    let offset = first.weekday().num_days_from_monday() as usize;
    let days = days_in_month(year, month)?;

    let mut weeks: Vec<Week> = Vec::with_capacity(6);
    let mut current: Week = [CalendarCell::Empty; DAYS_PER_WEEK];
    let mut slot = offset;

    for date in first.iter_days().take(days as usize) {
        current[slot] = CalendarCell::Occupied { date, shift: None };
        slot += 1;
        if slot == DAYS_PER_WEEK {
            weeks.push(current);
            current = [CalendarCell::Empty; DAYS_PER_WEEK];
            slot = 0;
        }
    }

    // trailing partial week
    if slot > 0 {
        weeks.push(current);
    }

    debug!(year, month, offset, days, weeks = weeks.len(), "built month grid");

    Ok(MonthGrid { year, month, weeks })
}

/// Attaches the shift worked on every occupied cell. Rows and blanks are kept as they are.
pub fn project(grid: &MonthGrid, anchor: &PatternAnchor) -> MonthGrid {
    let weeks = grid
        .weeks
        .iter()
        .map(|week| {
            week.map(|cell| match cell {
                CalendarCell::Occupied { date, .. } => CalendarCell::Occupied {
                    date,
                    shift: Some(classify(anchor, date)),
                },
                CalendarCell::Empty => CalendarCell::Empty,
            })
        })
        .collect();

    MonthGrid {
        year: grid.year,
        month: grid.month,
        weeks,
    }
}

/// [`build_month`] followed by [`project`].
pub fn project_month(
    year: i32,
    month: u32,
    anchor: &PatternAnchor,
) -> Result<MonthGrid, RotationError> {
    let grid = project(&build_month(year, month)?, anchor);
    debug!(
        year,
        month,
        anchor_date = %anchor.date,
        anchor_shift = %anchor.shift,
        "projected month"
    );
    Ok(grid)
}

#[cfg(test)]
mod calendar_logic {
    use super::*;
    use crate::domain::shift_model::{AnchorShift, ShiftType};

    #[test]
    fn day_counts() {
        assert_eq!(days_in_month(2024, 0).unwrap(), 31);
        assert_eq!(days_in_month(2024, 1).unwrap(), 29);
        assert_eq!(days_in_month(2023, 1).unwrap(), 28);
        assert_eq!(days_in_month(1900, 1).unwrap(), 28);
        assert_eq!(days_in_month(2000, 1).unwrap(), 29);
        assert_eq!(days_in_month(2024, 3).unwrap(), 30);
        assert_eq!(days_in_month(2024, 11).unwrap(), 31);
    }

    #[test]
    fn weekday_offsets() {
        // 2024-01-01 Monday, 2024-05-01 Wednesday, 2024-09-01 Sunday
        assert_eq!(first_weekday_offset(2024, 0).unwrap(), 0);
        assert_eq!(first_weekday_offset(2024, 4).unwrap(), 2);
        assert_eq!(first_weekday_offset(2024, 8).unwrap(), 6);
    }

    #[test]
    fn january_2024_layout() {
        let grid = build_month(2024, 0).unwrap();
        assert_eq!(grid.weeks.len(), 5);
        assert_eq!(grid.leading_blanks(), 0);
        assert_eq!(grid.occupied_count(), 31);
        // 29, 30, 31 then four blanks
        let last = grid.weeks[4];
        assert_eq!(last[2].date(), NaiveDate::from_ymd_opt(2024, 1, 31));
        assert!(last[3..].iter().all(CalendarCell::is_empty));
    }

    #[test]
    fn february_2021_fits_in_four_weeks() {
        // starts on Monday, 28 days
        let grid = build_month(2021, 1).unwrap();
        assert_eq!(grid.weeks.len(), 4);
        assert!(grid.cells().all(|cell| !cell.is_empty()));
    }

    #[test]
    fn september_2024_needs_six_weeks() {
        let grid = build_month(2024, 8).unwrap();
        assert_eq!(grid.weeks.len(), 6);
        assert_eq!(grid.leading_blanks(), 6);
    }

    #[test]
    fn month_out_of_range() {
        assert!(matches!(
            build_month(2024, 12),
            Err(RotationError::InvalidMonth { month: 12 })
        ));
    }

    #[test]
    fn built_cells_have_no_shift() {
        let grid = build_month(2024, 6).unwrap();
        assert!(grid.cells().all(|cell| cell.shift().is_none()));
    }

    #[test]
    fn project_keeps_shape_and_fills_shifts() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let anchor = PatternAnchor::new(start, AnchorShift::Day);
        let grid = build_month(2024, 0).unwrap();
        let projected = project(&grid, &anchor);

        assert_eq!(projected.weeks.len(), grid.weeks.len());
        for (before, after) in grid.cells().zip(projected.cells()) {
            assert_eq!(before.date(), after.date());
            assert_eq!(before.is_empty(), after.shift().is_none());
        }
        assert_eq!(projected.weeks[0][0].shift(), Some(ShiftType::Day));
        assert_eq!(projected.weeks[0][4].shift(), Some(ShiftType::Rest));
        assert_eq!(projected.weeks[0][6].shift(), Some(ShiftType::Night));
    }
}
