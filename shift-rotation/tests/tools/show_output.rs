use shift_rotation::application::dto::MonthlyShiftResult;
use shift_rotation::domain::shift_model::MonthGrid;

const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[allow(dead_code)]
pub fn show_month_grid_debug_data(grid: &MonthGrid) {
    println!("\n=======================================================");
    println!("[DEBUG] month grid {}-{:02} ({} weeks)", grid.year, grid.month + 1, grid.weeks.len());
    println!("=======================================================");
    println!("{}", DAY_LABELS.map(|l| format!("{l:>5}")).join(""));
    for week in &grid.weeks {
        let row: String = week
            .iter()
            .map(|cell| match cell.date() {
                Some(date) => format!("{:>5}", date.format("%d")),
                None => "    .".to_string(),
            })
            .collect();
        println!("{row}");
    }
    println!("=======================================================\n");
}

#[allow(dead_code)]
pub fn show_monthly_shift_result_debug_data(result: &MonthlyShiftResult) {
    println!("\n=======================================================");
    println!("[DEBUG] {} (anchor {} {})", result.title, result.anchor.date, result.anchor.shift);
    println!("=======================================================");

    for (week_idx, week) in result.weeks.iter().enumerate() {
        println!("[Week {}] ------------------------------------------", week_idx + 1);
        for (day_idx, day) in week.days.iter().enumerate() {
            let label = DAY_LABELS.get(day_idx).unwrap_or(&"???");
            match day {
                Some(day) => println!(
                    "   {} : {:>2} {:<5}{}",
                    label,
                    day.day,
                    day.shift.label(),
                    if day.is_today { " (today)" } else { "" }
                ),
                None => println!("   {} : --", label),
            }
        }
    }
    println!("=======================================================\n");
}
