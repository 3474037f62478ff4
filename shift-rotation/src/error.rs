//! Error type shared by the calendar core and the preference store.

/// Everything that can go wrong in this crate.
///
/// The rotation engine itself is total; these variants cover caller input
/// (month indices, typed dates, shift names, colours) and storage.
#[derive(Debug, thiserror::Error)]
pub enum RotationError {
    /// Month index outside `0..=11`.
    #[error("month index must be 0-11, got {month}")]
    InvalidMonth { month: u32 },

    /// The year/month pair cannot be represented as a calendar date.
    #[error("no calendar date exists for year {year}, month index {month}")]
    DateOutOfRange { year: i32, month: u32 },

    /// Text that is not `day`, `night` or `rest`.
    #[error("unknown shift type {0:?}")]
    InvalidShift(String),

    /// `rest` was given where only `day` or `night` may start the pattern.
    #[error("the pattern can only start on a day or night shift")]
    RestAnchor,

    /// Text that is not a `YYYY-MM-DD` date.
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Text that is not a `#rrggbb` colour.
    #[error("invalid colour {0:?}, expected #rrggbb")]
    InvalidColor(String),

    #[error("preference storage failed")]
    Storage(#[from] sqlx::Error),

    #[error("preference database migration failed")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
