use crate::domain::shift_model::{
    AnchorShift,
    CalendarDate,
    PatternAnchor,
    ShiftType,
    PATTERN_LEN,
    SHIFT_PATTERN,
};

/// Position of the first occurrence of `shift` in [`SHIFT_PATTERN`].
///
/// Day -> 0, Night -> 6.
pub fn base_offset(shift: AnchorShift) -> usize {
    let shift = ShiftType::from(shift);
    SHIFT_PATTERN
        .iter()
        .position(|s| *s == shift)
        .unwrap_or(0)
}

/// Number of midnights between `from` and `to`; negative when `to` is earlier.
pub fn day_difference(from: CalendarDate, to: CalendarDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Index into [`SHIFT_PATTERN`] worked on `target`.
pub fn pattern_index(anchor: &PatternAnchor, target: CalendarDate) -> usize {
    let shifted = day_difference(anchor.date, target) + base_offset(anchor.shift) as i64;
    // rem_euclid keeps dates before the anchor inside 0..PATTERN_LEN
    shifted.rem_euclid(PATTERN_LEN as i64) as usize
}

/// Shift worked on `target` for a pattern anchored at `anchor`.
pub fn classify(anchor: &PatternAnchor, target: CalendarDate) -> ShiftType {
    SHIFT_PATTERN[pattern_index(anchor, target)]
}
