mod cli;
mod config;
mod logging;
mod render;

use std::process;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use tracing::debug;

use shift_rotation::application::commands;
use shift_rotation::application::time::MonthCursor;
use shift_rotation::domain::shift_model::PatternAnchor;
use shift_rotation::{open_pool, AppServices};

use crate::cli::{AnchorCommand, Cli, ColorsCommand, Command, MonthArgs};
use crate::config::ToolsConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = tokio::runtime::Runtime::new()
        .context("failed to start async runtime")
        .and_then(|runtime| runtime.block_on(run(cli)));

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = ToolsConfig::load(&cli.config)?;
    let db_path = cli.db.unwrap_or(config.database);

    // the only clock read in the program
    let today = Local::now().date_naive();

    // no storage needed
    if let Command::Years { year } = cli.command {
        println!("{}", render::render_years(year.unwrap_or(today.year())));
        return Ok(());
    }

    let pool = open_pool(&db_path)
        .await
        .with_context(|| format!("failed to open preference database {}", db_path.display()))?;
    let services = AppServices::new(pool);
    debug!(%today, db = %db_path.display(), "starting");

    match cli.command {
        Command::Month(args) => show_month(&services, args, today, config.color).await,
        Command::Day { date } => show_day(&services, date, today, config.color).await,
        Command::Anchor(command) => anchor_cmd(&services, command, today).await,
        Command::Colors(command) => colors_cmd(&services, command, config.color).await,
        Command::Years { .. } => Ok(()),
    }
}

/// Month picked by the `month` arguments.
///
/// YEAR and MONTH replace the parts of today's month they name, then
/// `--prev`/`--next` step from there.
fn select_month(args: &MonthArgs, today: NaiveDate) -> Result<MonthCursor> {
    let mut cursor = MonthCursor::containing(today);
    if let Some(year) = args.year {
        cursor = cursor.with_year(year);
    }
    if let Some(month) = args.month {
        // typed as 1-12
        let month = month.checked_sub(1).context("months are numbered 1-12")?;
        cursor = cursor.with_month(month)?;
    }
    let steps = i64::from(args.next) - i64::from(args.prev);
    let steps = i32::try_from(steps).context("month step is too large")?;
    Ok(cursor.shifted(steps))
}

async fn show_month(
    services: &AppServices,
    args: MonthArgs,
    today: NaiveDate,
    use_color: bool,
) -> Result<()> {
    let cursor = select_month(&args, today)?;

    let result = commands::derive_monthly_shift(services, cursor.year(), cursor.month(), today)
        .await
        .with_context(|| format!("failed to build {}", cursor.title()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let colors = commands::get_colors(services).await?;
    let use_color = use_color && !args.no_color;
    println!("{}", render::render_month(&result, &colors, use_color));
    println!("{}", render::render_navigation(cursor));
    Ok(())
}

async fn show_day(
    services: &AppServices,
    date: NaiveDate,
    today: NaiveDate,
    use_color: bool,
) -> Result<()> {
    let shift = commands::shift_on(services, date, today).await?;
    let colors = commands::get_colors(services).await?;
    println!("{}", render::render_day(date, shift, &colors, use_color));
    Ok(())
}

async fn anchor_cmd(
    services: &AppServices,
    command: AnchorCommand,
    today: NaiveDate,
) -> Result<()> {
    let anchor = match command {
        AnchorCommand::Show => commands::get_anchor(services, today).await?,
        AnchorCommand::Set { date, shift } => {
            commands::update_anchor(services, PatternAnchor::new(date, shift))
                .await
                .context("failed to save the pattern start")?
        }
        AnchorCommand::Clear => commands::clear_anchor(services, today)
            .await
            .context("failed to clear the pattern start")?,
    };
    println!("{}", render::render_anchor(&anchor));
    Ok(())
}

async fn colors_cmd(
    services: &AppServices,
    command: ColorsCommand,
    use_color: bool,
) -> Result<()> {
    let colors = match command {
        ColorsCommand::Show => commands::get_colors(services).await?,
        ColorsCommand::Set { shift, color } => commands::update_color(services, shift, color)
            .await
            .context("failed to save the colour")?,
        ColorsCommand::Reset => commands::reset_colors(services).await?,
    };
    println!("{}", render::render_colors(&colors, use_color));
    Ok(())
}
