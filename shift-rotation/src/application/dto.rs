use chrono::Datelike;
use serde::Serialize;

use crate::application::time::month_title;
use crate::domain::pattern_logic::classify;
use crate::domain::shift_model::{
    CalendarCell, CalendarDate, MonthGrid, PatternAnchor, ShiftType,
};

/// One occupied calendar cell, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyShiftDto {
    pub day: u32,
    pub date: CalendarDate,
    pub shift: ShiftType,
    pub is_today: bool,
}

/// One calendar row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyShiftDto {
    // 0 (Mon) ~ 6 (Sun); None = padding outside the month
    pub days: Vec<Option<DailyShiftDto>>,
}

/// Everything a renderer needs for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyShiftResult {
    pub year: i32,
    /// 0 (January) to 11 (December)
    pub month: u32,
    pub title: String,
    pub anchor: PatternAnchor,
    pub weeks: Vec<WeeklyShiftDto>,
}

impl MonthlyShiftResult {
    /// Flattens a projected grid. Cells the projector has not reached are classified here.
    pub fn from_grid(grid: &MonthGrid, anchor: &PatternAnchor, today: CalendarDate) -> Self {
        let weeks = grid
            .weeks
            .iter()
            .map(|week| WeeklyShiftDto {
                days: week
                    .iter()
                    .map(|cell| match *cell {
                        CalendarCell::Occupied { date, shift } => Some(DailyShiftDto {
                            day: date.day(),
                            date,
                            shift: shift.unwrap_or_else(|| classify(anchor, date)),
                            is_today: date == today,
                        }),
                        CalendarCell::Empty => None,
                    })
                    .collect(),
            })
            .collect();

        Self {
            year: grid.year,
            month: grid.month,
            title: month_title(grid.year, grid.month),
            anchor: *anchor,
            weeks,
        }
    }

    pub fn days(&self) -> impl Iterator<Item = &DailyShiftDto> {
        self.weeks.iter().flat_map(|week| week.days.iter().flatten())
    }

    pub fn today(&self) -> Option<&DailyShiftDto> {
        self.days().find(|day| day.is_today)
    }
}
