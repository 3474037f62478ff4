use crossterm::style::{Color, Stylize};

use shift_rotation::application::dto::{DailyShiftDto, MonthlyShiftResult};
use shift_rotation::application::theme::{HexColor, ShiftColors, BACKGROUND_LIGHTEN};
use shift_rotation::application::time::{year_options, MonthCursor};
use shift_rotation::domain::shift_model::{PatternAnchor, ShiftType, DAYS_PER_WEEK};

const DAY_LABELS: [&str; DAYS_PER_WEEK] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

// "31* Night" is the widest cell
const CELL_WIDTH: usize = 9;

/// Month grid as terminal text. Today is marked with `*`.
pub fn render_month(result: &MonthlyShiftResult, colors: &ShiftColors, use_color: bool) -> String {
    let width = CELL_WIDTH * DAYS_PER_WEEK + (DAYS_PER_WEEK - 1);
    let header: Vec<String> = DAY_LABELS
        .iter()
        .map(|label| format!("{label:^CELL_WIDTH$}"))
        .collect();

    let mut lines = vec![format!("{:^width$}", result.title), header.join(" ")];
    lines.extend(result.weeks.iter().map(|week| {
        week.days
            .iter()
            .map(|day| render_cell(day.as_ref(), colors, use_color))
            .collect::<Vec<_>>()
            .join(" ")
    }));
    lines.push(String::new());
    lines.push(render_legend(colors, use_color));
    lines.push(render_anchor(&result.anchor));
    lines.join("\n")
}

/// Neighbouring months, e.g. `< December 2023    February 2024 >`.
pub fn render_navigation(cursor: MonthCursor) -> String {
    format!("< {}    {} >", cursor.prev().title(), cursor.next().title())
}

/// Years the picker offers around `current`, one per line, `current` marked with `*`.
pub fn render_years(current: i32) -> String {
    year_options(current)
        .map(|year| {
            if year == current {
                format!("{year} *")
            } else {
                year.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_cell(day: Option<&DailyShiftDto>, colors: &ShiftColors, use_color: bool) -> String {
    let Some(day) = day else {
        return " ".repeat(CELL_WIDTH);
    };
    let marker = if day.is_today { '*' } else { ' ' };
    let text = format!("{:>2}{marker} {:<5}", day.day, day.shift.label());
    paint(text, colors, day.shift, day.is_today, use_color)
}

pub fn render_legend(colors: &ShiftColors, use_color: bool) -> String {
    ShiftType::ALL
        .iter()
        .map(|shift| paint(format!(" {} ", shift.label()), colors, *shift, false, use_color))
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn render_anchor(anchor: &PatternAnchor) -> String {
    format!("Pattern starts {} on {} shifts", anchor.date, anchor.shift)
}

/// `2024-01-07 (Sunday): Night`
pub fn render_day(
    date: chrono::NaiveDate,
    shift: ShiftType,
    colors: &ShiftColors,
    use_color: bool,
) -> String {
    format!(
        "{} ({}): {}",
        date,
        date.format("%A"),
        paint(shift.label().to_string(), colors, shift, false, use_color)
    )
}

pub fn render_colors(colors: &ShiftColors, use_color: bool) -> String {
    ShiftType::ALL
        .iter()
        .map(|shift| {
            let swatch = paint("      ".to_string(), colors, *shift, false, use_color);
            format!("{:<6} {} {}", shift.label(), colors.get(*shift), swatch)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn paint(
    text: String,
    colors: &ShiftColors,
    shift: ShiftType,
    highlight: bool,
    use_color: bool,
) -> String {
    if !use_color {
        return text;
    }
    let (background, foreground) = colors.cell_style(shift);
    let background = if highlight {
        background.lighten(BACKGROUND_LIGHTEN)
    } else {
        background
    };
    text.with(to_color(foreground))
        .on(to_color(background))
        .to_string()
}

fn to_color(color: HexColor) -> Color {
    let [r, g, b] = color.channels();
    Color::Rgb { r, g, b }
}
