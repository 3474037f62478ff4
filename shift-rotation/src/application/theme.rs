use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::domain::shift_model::ShiftType;
use crate::error::RotationError;

/// 24-bit colour written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor([u8; 3]);

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub fn channels(&self) -> [u8; 3] {
        self.0
    }

    /// Adds `round(255 * percent)` to every channel, saturating at 255.
    pub fn lighten(&self, percent: f64) -> Self {
        let step = channel_step(percent);
        Self(self.0.map(|c| c.saturating_add(step)))
    }

    /// Subtracts `round(255 * percent)` from every channel, saturating at 0.
    pub fn darken(&self, percent: f64) -> Self {
        let step = channel_step(percent);
        Self(self.0.map(|c| c.saturating_sub(step)))
    }
}

fn channel_step(percent: f64) -> u8 {
    (255.0 * percent).round().clamp(0.0, 255.0) as u8
}

impl FromStr for HexColor {
    type Err = RotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let text = text.strip_prefix('#').unwrap_or(text);
        if text.len() != 6 || !text.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(RotationError::InvalidColor(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&text[range], 16)
                .map_err(|_| RotationError::InvalidColor(s.to_string()))
        };
        Ok(Self([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub const DEFAULT_DAY_COLOR: HexColor = HexColor::rgb(0xbf, 0xdb, 0xfe);
pub const DEFAULT_NIGHT_COLOR: HexColor = HexColor::rgb(0xc7, 0xd2, 0xfe);
pub const DEFAULT_REST_COLOR: HexColor = HexColor::rgb(0xdc, 0xfc, 0xe7);

/// Lightening applied to the background of today's cell.
pub const BACKGROUND_LIGHTEN: f64 = 0.15;
/// Darkening applied to label text so it stays readable on the shift colour.
pub const TEXT_DARKEN: f64 = 0.4;

/// Colour per shift type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShiftColors {
    pub day: HexColor,
    pub night: HexColor,
    pub rest: HexColor,
}

impl Default for ShiftColors {
    fn default() -> Self {
        Self {
            day: DEFAULT_DAY_COLOR,
            night: DEFAULT_NIGHT_COLOR,
            rest: DEFAULT_REST_COLOR,
        }
    }
}

impl ShiftColors {
    pub fn default_for(shift: ShiftType) -> HexColor {
        Self::default().get(shift)
    }

    pub fn get(&self, shift: ShiftType) -> HexColor {
        match shift {
            ShiftType::Day => self.day,
            ShiftType::Night => self.night,
            ShiftType::Rest => self.rest,
        }
    }

    pub fn set(&mut self, shift: ShiftType, color: HexColor) {
        match shift {
            ShiftType::Day => self.day = color,
            ShiftType::Night => self.night = color,
            ShiftType::Rest => self.rest = color,
        }
    }

    /// Background and text colour for a cell of `shift`.
    pub fn cell_style(&self, shift: ShiftType) -> (HexColor, HexColor) {
        let base = self.get(shift);
        (base, base.darken(TEXT_DARKEN))
    }
}
