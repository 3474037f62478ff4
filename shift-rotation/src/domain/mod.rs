pub mod calendar_logic;
pub mod pattern_logic;
pub mod shift_model;
