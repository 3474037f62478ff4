use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::application::theme::{HexColor, ShiftColors};
use crate::domain::shift_model::{format_date, CalendarDate, PatternAnchor, ShiftType};
use crate::error::RotationError;

// =====================
// Preference keys
// =====================

pub const KEY_START_DATE: &str = "shift-calendar.start-date";
pub const KEY_START_SHIFT: &str = "shift-calendar.start-shift";
pub const KEY_COLOR_DAY: &str = "shift-calendar.color.day";
pub const KEY_COLOR_NIGHT: &str = "shift-calendar.color.night";
pub const KEY_COLOR_REST: &str = "shift-calendar.color.rest";

pub fn color_key(shift: ShiftType) -> &'static str {
    match shift {
        ShiftType::Day => KEY_COLOR_DAY,
        ShiftType::Night => KEY_COLOR_NIGHT,
        ShiftType::Rest => KEY_COLOR_REST,
    }
}

const UPSERT_SQL: &str = "INSERT INTO preferences (key, value) VALUES (?1, ?2)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value";

/// String key/value store for user preferences.
pub struct PreferenceRepository {
    pool: SqlitePool,
}

impl PreferenceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // =================================================================
    // 1. Raw key/value access
    // =================================================================

    pub async fn get(&self, key: &str) -> Result<Option<String>, RotationError> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM preferences WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;
        Ok(value)
    }

    pub async fn set(&self, key: &str, value: &str) -> Result<(), RotationError> {
        sqlx::query(UPSERT_SQL)
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Returns whether the key existed.
    pub async fn remove(&self, key: &str) -> Result<bool, RotationError> {
        let result = sqlx::query("DELETE FROM preferences WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // =================================================================
    // 2. Pattern anchor
    // =================================================================

    /// Stored anchor, or `today` / Day for whatever is missing or invalid.
    pub async fn load_anchor(&self, today: CalendarDate) -> Result<PatternAnchor, RotationError> {
        let date = self.get(KEY_START_DATE).await?;
        let shift = self.get(KEY_START_SHIFT).await?;
        Ok(PatternAnchor::from_stored(date.as_deref(), shift.as_deref(), today))
    }

    /// Writes date and shift together.
    pub async fn save_anchor(&self, anchor: &PatternAnchor) -> Result<(), RotationError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(UPSERT_SQL)
            .bind(KEY_START_DATE)
            .bind(format_date(anchor.date))
            .execute(&mut *tx)
            .await?;

        sqlx::query(UPSERT_SQL)
            .bind(KEY_START_SHIFT)
            .bind(anchor.shift.as_str())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(date = %anchor.date, shift = %anchor.shift, "saved pattern anchor");
        Ok(())
    }

    /// Forgets the stored anchor. Returns whether anything was stored.
    pub async fn clear_anchor(&self) -> Result<bool, RotationError> {
        let date = self.remove(KEY_START_DATE).await?;
        let shift = self.remove(KEY_START_SHIFT).await?;
        if date || shift {
            info!("cleared pattern anchor");
        }
        Ok(date || shift)
    }

    // =================================================================
    // 3. Shift colours
    // =================================================================

    pub async fn load_colors(&self) -> Result<ShiftColors, RotationError> {
        let mut colors = ShiftColors::default();
        for shift in ShiftType::ALL {
            let Some(text) = self.get(color_key(shift)).await? else {
                continue;
            };
            match text.parse::<HexColor>() {
                Ok(color) => colors.set(shift, color),
                Err(e) => warn!(error = %e, %shift, "stored colour is invalid, using default"),
            }
        }
        Ok(colors)
    }

    pub async fn save_color(&self, shift: ShiftType, color: HexColor) -> Result<(), RotationError> {
        self.set(color_key(shift), &color.to_string()).await?;
        info!(%shift, %color, "saved shift colour");
        Ok(())
    }

    /// Drops every stored colour so the defaults apply again. Returns how many were removed.
    pub async fn reset_colors(&self) -> Result<u64, RotationError> {
        let mut tx = self.pool.begin().await?;
        let mut removed = 0;
        for shift in ShiftType::ALL {
            removed += sqlx::query("DELETE FROM preferences WHERE key = ?1")
                .bind(color_key(shift))
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }
        tx.commit().await?;

        info!(removed, "reset shift colours");
        Ok(removed)
    }
}
