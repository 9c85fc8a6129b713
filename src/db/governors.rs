use sqlx::sqlite::SqlitePool;

use crate::models::{GovernorCareer, GovernorCareerPatch, NewGovernorCareer};

pub async fn get_all_governor_careers(pool: &SqlitePool) -> Result<Vec<GovernorCareer>, sqlx::Error> {
    sqlx::query_as::<_, GovernorCareer>(
        r#"SELECT * FROM governor_careers ORDER BY governor"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_governor_career_by_id(pool: &SqlitePool, career_id: i64) -> Result<Option<GovernorCareer>, sqlx::Error> {
    sqlx::query_as::<_, GovernorCareer>(
        r#"SELECT * FROM governor_careers WHERE id = ?"#
    )
    .bind(career_id)
    .fetch_optional(pool)
    .await
}

pub async fn create_governor_career(pool: &SqlitePool, career: &NewGovernorCareer) -> Result<GovernorCareer, sqlx::Error> {
    sqlx::query_as::<_, GovernorCareer>(
        r#"INSERT INTO governor_careers
               (governor, championships, playoff_wins, wins, losses, average_finish)
           VALUES (?, ?, ?, ?, ?, ?)
           RETURNING *"#
    )
    .bind(&career.governor)
    .bind(career.championships)
    .bind(career.playoff_wins)
    .bind(career.wins)
    .bind(career.losses)
    .bind(career.average_finish)
    .fetch_one(pool)
    .await
}

pub async fn update_governor_career(
    pool: &SqlitePool,
    career_id: i64,
    patch: &GovernorCareerPatch,
) -> Result<Option<GovernorCareer>, sqlx::Error> {
    sqlx::query_as::<_, GovernorCareer>(
        r#"UPDATE governor_careers
           SET governor = COALESCE(?, governor),
               championships = COALESCE(?, championships),
               playoff_wins = COALESCE(?, playoff_wins),
               wins = COALESCE(?, wins),
               losses = COALESCE(?, losses),
               average_finish = COALESCE(?, average_finish),
               updated_at = CURRENT_TIMESTAMP
           WHERE id = ?
           RETURNING *"#
    )
    .bind(&patch.governor)
    .bind(patch.championships)
    .bind(patch.playoff_wins)
    .bind(patch.wins)
    .bind(patch.losses)
    .bind(patch.average_finish)
    .bind(career_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_governor_career(pool: &SqlitePool, career_id: i64) -> Result<bool, sqlx::Error> {
    super::delete_by_id(pool, "governor_careers", career_id).await
}
