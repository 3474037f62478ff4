// Preferences round-trip through SQLite and fall back when stored text is bad

#[cfg(test)]
mod preference_repo_tests {
    use chrono::NaiveDate;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    use shift_rotation::{
        application::theme::{HexColor, ShiftColors},
        domain::shift_model::{AnchorShift, PatternAnchor, ShiftType},
        infrastructure::preference_repo::{
            color_key,
            PreferenceRepository,
            KEY_START_DATE,
            KEY_START_SHIFT,
        },
    };

    // ========================================================================
    // Setup
    // ========================================================================

    async fn setup_test_db() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create memory pool");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        pool
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2026, 10, 19)
    }

    // ========================================================================
    // Anchor
    // ========================================================================

    #[tokio::test]
    async fn test_empty_store_defaults_to_today_day() {
        let repo = PreferenceRepository::new(setup_test_db().await);

        let anchor = repo.load_anchor(today()).await.expect("Failed to load");
        assert_eq!(anchor, PatternAnchor::new(today(), AnchorShift::Day));
    }

    #[tokio::test]
    async fn test_invalid_stored_values_fall_back() {
        let pool = setup_test_db().await;
        let repo = PreferenceRepository::new(pool.clone());

        // written behind the repository's back, as an older build or a hand edit might
        sqlx::query("INSERT INTO preferences (key, value) VALUES (?1, 'not a date'), (?2, 'rest')")
            .bind(KEY_START_DATE)
            .bind(KEY_START_SHIFT)
            .execute(&pool)
            .await
            .unwrap();

        let anchor = repo.load_anchor(today()).await.expect("Failed to load");
        assert_eq!(anchor, PatternAnchor::new(today(), AnchorShift::Day));
    }

    #[tokio::test]
    async fn test_partial_anchor_keeps_valid_half() {
        let repo = PreferenceRepository::new(setup_test_db().await);
        repo.set(KEY_START_SHIFT, "night").await.unwrap();

        let anchor = repo.load_anchor(today()).await.unwrap();
        assert_eq!(anchor, PatternAnchor::new(today(), AnchorShift::Night));
    }

    #[tokio::test]
    async fn test_save_anchor_overwrites_previous() {
        let pool = setup_test_db().await;
        let repo = PreferenceRepository::new(pool.clone());
        let first = PatternAnchor::new(date(2024, 1, 1), AnchorShift::Day);
        let second = PatternAnchor::new(date(2025, 6, 30), AnchorShift::Night);

        repo.save_anchor(&first).await.unwrap();
        repo.save_anchor(&second).await.unwrap();

        assert_eq!(repo.load_anchor(today()).await.unwrap(), second);

        let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM preferences")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(rows, 2, "upsert should not duplicate keys");
    }

    // ========================================================================
    // Colours
    // ========================================================================

    #[tokio::test]
    async fn test_colors_default_then_persist() {
        let repo = PreferenceRepository::new(setup_test_db().await);
        assert_eq!(repo.load_colors().await.unwrap(), ShiftColors::default());

        let black = HexColor::rgb(0, 0, 0);
        repo.save_color(ShiftType::Night, black).await.unwrap();

        let colors = repo.load_colors().await.unwrap();
        assert_eq!(colors.night, black);
        assert_eq!(colors.day, ShiftColors::default().day);
        let stored = repo.get(color_key(ShiftType::Night)).await.unwrap();
        assert_eq!(stored.as_deref(), Some("#000000"));
    }

    #[tokio::test]
    async fn test_invalid_color_uses_default() {
        let repo = PreferenceRepository::new(setup_test_db().await);
        repo.set(color_key(ShiftType::Rest), "chartreuse").await.unwrap();

        let colors = repo.load_colors().await.unwrap();
        assert_eq!(colors.rest, ShiftColors::default().rest);
    }

    #[tokio::test]
    async fn test_reset_colors_removes_only_colors() {
        let repo = PreferenceRepository::new(setup_test_db().await);
        repo.save_color(ShiftType::Day, HexColor::rgb(1, 2, 3)).await.unwrap();
        repo.save_color(ShiftType::Rest, HexColor::rgb(4, 5, 6)).await.unwrap();
        repo.set(KEY_START_SHIFT, "night").await.unwrap();

        let removed = repo.reset_colors().await.unwrap();
        assert_eq!(removed, 2);
        assert_eq!(repo.load_colors().await.unwrap(), ShiftColors::default());
        assert_eq!(repo.get(KEY_START_SHIFT).await.unwrap().as_deref(), Some("night"));
    }
}
