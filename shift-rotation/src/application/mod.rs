pub mod commands;
pub mod dto;
pub mod theme;
pub mod time;
