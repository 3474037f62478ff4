// =====================
// Domain model
// =====================

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::RotationError;

/// A whole calendar day. No time of day, no timezone.
pub type CalendarDate = NaiveDate;

/// Text form used when a date is stored or typed.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const DAYS_PER_WEEK: usize = 7;
pub const PATTERN_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftType {
    Day,
    Night,
    Rest,
}

/// One full repeat period: 4 day shifts, 2 rest days, 4 night shifts, 2 rest days.
pub const SHIFT_PATTERN: [ShiftType; PATTERN_LEN] = [
    ShiftType::Day,
    ShiftType::Day,
    ShiftType::Day,
    ShiftType::Day,
    ShiftType::Rest,
    ShiftType::Rest,
    ShiftType::Night,
    ShiftType::Night,
    ShiftType::Night,
    ShiftType::Night,
    ShiftType::Rest,
    ShiftType::Rest,
];

impl ShiftType {
    pub const ALL: [ShiftType; 3] = [ShiftType::Day, ShiftType::Night, ShiftType::Rest];

    /// Lowercase name, as stored in preferences.
    pub fn as_str(self) -> &'static str {
        match self {
            ShiftType::Day => "day",
            ShiftType::Night => "night",
            ShiftType::Rest => "rest",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShiftType::Day => "Day",
            ShiftType::Night => "Night",
            ShiftType::Rest => "Rest",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShiftType {
    type Err = RotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        ShiftType::ALL
            .into_iter()
            .find(|shift| shift.as_str().eq_ignore_ascii_case(text))
            .ok_or_else(|| RotationError::InvalidShift(s.to_string()))
    }
}

/// Shift the pattern may start on. `Rest` is not a valid starting shift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorShift {
    #[default]
    Day,
    Night,
}

impl AnchorShift {
    pub fn as_str(self) -> &'static str {
        ShiftType::from(self).as_str()
    }
}

impl From<AnchorShift> for ShiftType {
    fn from(shift: AnchorShift) -> Self {
        match shift {
            AnchorShift::Day => ShiftType::Day,
            AnchorShift::Night => ShiftType::Night,
        }
    }
}

impl TryFrom<ShiftType> for AnchorShift {
    type Error = RotationError;

    fn try_from(shift: ShiftType) -> Result<Self, Self::Error> {
        match shift {
            ShiftType::Day => Ok(AnchorShift::Day),
            ShiftType::Night => Ok(AnchorShift::Night),
            ShiftType::Rest => Err(RotationError::RestAnchor),
        }
    }
}

impl FromStr for AnchorShift {
    type Err = RotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnchorShift::try_from(s.parse::<ShiftType>()?)
    }
}

impl fmt::Display for AnchorShift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ShiftType::from(*self).label())
    }
}

/// Aligns the pattern with the calendar: `shift` is worked on `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternAnchor {
    pub date: CalendarDate,
    pub shift: AnchorShift,
}

impl PatternAnchor {
    pub fn new(date: CalendarDate, shift: AnchorShift) -> Self {
        Self { date, shift }
    }

    /// Rebuilds an anchor from stored preference text.
    ///
    /// A missing or unparseable date becomes `today`; a missing or invalid
    /// shift (including `rest`) becomes [`AnchorShift::Day`].
    pub fn from_stored(date: Option<&str>, shift: Option<&str>, today: CalendarDate) -> Self {
        let date = match date {
            Some(text) => parse_date(text).unwrap_or_else(|e| {
                warn!(error = %e, "stored start date is invalid, using today");
                today
            }),
            None => today,
        };

        let shift = match shift {
            Some(text) => text.parse::<AnchorShift>().unwrap_or_else(|e| {
                warn!(error = %e, "stored start shift is invalid, using day");
                AnchorShift::Day
            }),
            None => AnchorShift::Day,
        };

        Self { date, shift }
    }
}

pub fn parse_date(text: &str) -> Result<CalendarDate, RotationError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| RotationError::InvalidDate(text.to_string()))
}

pub fn format_date(date: CalendarDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// One slot of a month grid.
///
/// The grid builder leaves `shift` empty; the projector fills it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    Empty,
    Occupied {
        date: CalendarDate,
        shift: Option<ShiftType>,
    },
}

impl CalendarCell {
    pub fn date(&self) -> Option<CalendarDate> {
        match self {
            CalendarCell::Occupied { date, .. } => Some(*date),
            CalendarCell::Empty => None,
        }
    }

    pub fn shift(&self) -> Option<ShiftType> {
        match self {
            CalendarCell::Occupied { shift, .. } => *shift,
            CalendarCell::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CalendarCell::Empty)
    }
}

/// Monday-first row of a month grid.
pub type Week = [CalendarCell; DAYS_PER_WEEK];

/// Week-aligned layout of one month. `month` is zero based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Week>,
}

impl MonthGrid {
    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.weeks.iter().flatten()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells().filter(|cell| !cell.is_empty()).count()
    }

    /// Number of empty cells before day 1.
    pub fn leading_blanks(&self) -> usize {
        self.cells().take_while(|cell| cell.is_empty()).count()
    }
}
