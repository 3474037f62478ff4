//! Rotating 4x2 shift calendar.
//!
//! One person works four day shifts, rests two days, works four night shifts and
//! rests two more, forever. Given the date the pattern started on (and whether it
//! started on days or nights) this crate answers which shift falls on any date and
//! lays months out as Monday-first week grids for display.
//!
//! - [`domain`]: the pure rotation engine and month grid builder.
//! - [`application`]: navigation, colours and the monthly view handed to renderers.
//! - [`infrastructure`]: SQLite-backed preference storage.

use std::path::Path;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use tracing::debug;

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::RotationError;

use infrastructure::preference_repo::PreferenceRepository;

// Holds every repository the commands need
pub struct AppServices {
    pub preferences: PreferenceRepository,
}

impl AppServices {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            preferences: PreferenceRepository::new(pool),
        }
    }
}

/// Opens (creating if missing) the preference database and brings its schema up to date.
pub async fn open_pool(db_path: &Path) -> Result<SqlitePool, RotationError> {
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    debug!(path = %db_path.display(), "preference database ready");
    Ok(pool)
}
