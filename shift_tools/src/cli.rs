use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use shift_rotation::application::theme::HexColor;
use shift_rotation::domain::shift_model::{AnchorShift, ShiftType};

/// Rotating 4x2 day/night shift calendar.
#[derive(Parser)]
#[command(name = "shift_tools")]
#[command(version)]
#[command(
    about = "Shows which shift falls on each day of a 4 day / 2 rest / 4 night / 2 rest rotation",
    long_about = None
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the TOML configuration file.
    #[arg(short, long, global = true, default_value = "shift_tools.toml")]
    pub config: PathBuf,

    /// Override the preference database path from the config.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print a month with the shift of every day
    Month(MonthArgs),

    /// Print the shift worked on one date
    Day {
        /// Date as YYYY-MM-DD
        date: NaiveDate,
    },

    /// Show or change the date and shift the pattern starts on
    #[command(subcommand)]
    Anchor(AnchorCommand),

    /// Show or change the colour of each shift
    #[command(subcommand)]
    Colors(ColorsCommand),

    /// List the years offered around YEAR (defaults to the current year)
    Years { year: Option<i32> },
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Year to show (defaults to the current year)
    pub year: Option<i32>,

    /// Month to show, 1-12 (defaults to the current month)
    #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Step this many months back from the selected month
    #[arg(long, default_value_t = 0, conflicts_with = "next")]
    pub prev: u32,

    /// Step this many months forward from the selected month
    #[arg(long, default_value_t = 0)]
    pub next: u32,

    /// Print the month as JSON instead of a grid
    #[arg(long)]
    pub json: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum AnchorCommand {
    /// Print the current start date and shift
    Show,
    /// Set the start date and shift
    Set {
        /// First day of a block, as YYYY-MM-DD
        date: NaiveDate,
        /// Shift worked on that day: day or night
        shift: AnchorShift,
    },
    /// Forget the stored start so the pattern starts today on days
    Clear,
}

#[derive(Subcommand)]
pub enum ColorsCommand {
    /// Print the colour of each shift
    Show,
    /// Change the colour of one shift
    Set {
        /// day, night or rest
        shift: ShiftType,
        /// Colour as #rrggbb
        color: HexColor,
    },
    /// Go back to the default colours
    Reset,
}
