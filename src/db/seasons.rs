use sqlx::sqlite::SqlitePool;

use crate::models::{NewSeason, Season, SeasonPatch};

pub async fn get_all_seasons(pool: &SqlitePool) -> Result<Vec<Season>, sqlx::Error> {
    sqlx::query_as::<_, Season>(
        r#"SELECT * FROM seasons ORDER BY year DESC"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_season_by_id(pool: &SqlitePool, season_id: i64) -> Result<Option<Season>, sqlx::Error> {
    sqlx::query_as::<_, Season>(
        r#"SELECT * FROM seasons WHERE id = ?"#
    )
    .bind(season_id)
    .fetch_optional(pool)
    .await
}

/// Every season flagged active, latest year first. Normally at most one.
pub async fn get_active_seasons(pool: &SqlitePool) -> Result<Vec<Season>, sqlx::Error> {
    sqlx::query_as::<_, Season>(
        r#"SELECT * FROM seasons WHERE is_active = 1 ORDER BY year DESC"#
    )
    .fetch_all(pool)
    .await
}

pub async fn create_season(pool: &SqlitePool, season: &NewSeason) -> Result<Season, sqlx::Error> {
    sqlx::query_as::<_, Season>(
        r#"INSERT INTO seasons (year, is_active) VALUES (?, ?) RETURNING *"#
    )
    .bind(season.year)
    .bind(season.is_active)
    .fetch_one(pool)
    .await
}

pub async fn update_season(pool: &SqlitePool, season_id: i64, patch: &SeasonPatch) -> Result<Option<Season>, sqlx::Error> {
    sqlx::query_as::<_, Season>(
        r#"UPDATE seasons
           SET year = COALESCE(?, year),
               is_active = COALESCE(?, is_active),
               updated_at = CURRENT_TIMESTAMP
           WHERE id = ?
           RETURNING *"#
    )
    .bind(patch.year)
    .bind(patch.is_active)
    .bind(season_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_season(pool: &SqlitePool, season_id: i64) -> Result<bool, sqlx::Error> {
    super::delete_by_id(pool, "seasons", season_id).await
}
