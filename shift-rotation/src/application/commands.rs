use crate::application::dto::MonthlyShiftResult;
use crate::application::theme::{HexColor, ShiftColors};
use crate::domain::calendar_logic::project_month;
use crate::domain::pattern_logic::classify;
use crate::domain::shift_model::{CalendarDate, PatternAnchor, ShiftType};
use crate::error::RotationError;
use crate::AppServices;

// --- Calendar ---

/// Projects one month with the stored anchor.
///
/// `month` is 0 (January) to 11 (December); `today` comes from the caller's clock.
pub async fn derive_monthly_shift(
    services: &AppServices,
    year: i32,
    month: u32,
    today: CalendarDate,
) -> Result<MonthlyShiftResult, RotationError> {
    let anchor = services.preferences.load_anchor(today).await?;
    let grid = project_month(year, month, &anchor)?;
    Ok(MonthlyShiftResult::from_grid(&grid, &anchor, today))
}

pub async fn shift_on(
    services: &AppServices,
    date: CalendarDate,
    today: CalendarDate,
) -> Result<ShiftType, RotationError> {
    let anchor = services.preferences.load_anchor(today).await?;
    Ok(classify(&anchor, date))
}

// --- Anchor ---

pub async fn get_anchor(
    services: &AppServices,
    today: CalendarDate,
) -> Result<PatternAnchor, RotationError> {
    services.preferences.load_anchor(today).await
}

pub async fn update_anchor(
    services: &AppServices,
    anchor: PatternAnchor,
) -> Result<PatternAnchor, RotationError> {
    services.preferences.save_anchor(&anchor).await?;
    Ok(anchor)
}

/// Removes the stored anchor and returns the fallback that now applies.
pub async fn clear_anchor(
    services: &AppServices,
    today: CalendarDate,
) -> Result<PatternAnchor, RotationError> {
    services.preferences.clear_anchor().await?;
    services.preferences.load_anchor(today).await
}

// --- Colours ---

pub async fn get_colors(services: &AppServices) -> Result<ShiftColors, RotationError> {
    services.preferences.load_colors().await
}

/// Stores one colour and returns the full palette as it now stands.
pub async fn update_color(
    services: &AppServices,
    shift: ShiftType,
    color: HexColor,
) -> Result<ShiftColors, RotationError> {
    services.preferences.save_color(shift, color).await?;
    services.preferences.load_colors().await
}

pub async fn reset_colors(services: &AppServices) -> Result<ShiftColors, RotationError> {
    services.preferences.reset_colors().await?;
    Ok(ShiftColors::default())
}
