use sqlx::sqlite::SqlitePool;

use crate::models::{NewPlayoffOutcome, PlayoffOutcome, PlayoffOutcomePatch};

pub async fn get_all_playoff_outcomes(pool: &SqlitePool) -> Result<Vec<PlayoffOutcome>, sqlx::Error> {
    sqlx::query_as::<_, PlayoffOutcome>(
        r#"SELECT * FROM playoff_outcomes ORDER BY season_id, rank"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_playoff_outcome_by_id(pool: &SqlitePool, outcome_id: i64) -> Result<Option<PlayoffOutcome>, sqlx::Error> {
    sqlx::query_as::<_, PlayoffOutcome>(
        r#"SELECT * FROM playoff_outcomes WHERE id = ?"#
    )
    .bind(outcome_id)
    .fetch_optional(pool)
    .await
}

pub async fn get_playoff_outcomes_by_season(pool: &SqlitePool, season_id: i64) -> Result<Vec<PlayoffOutcome>, sqlx::Error> {
    sqlx::query_as::<_, PlayoffOutcome>(
        r#"SELECT * FROM playoff_outcomes WHERE season_id = ? ORDER BY rank"#
    )
    .bind(season_id)
    .fetch_all(pool)
    .await
}

pub async fn create_playoff_outcome(pool: &SqlitePool, outcome: &NewPlayoffOutcome) -> Result<PlayoffOutcome, sqlx::Error> {
    sqlx::query_as::<_, PlayoffOutcome>(
        r#"INSERT INTO playoff_outcomes
               (team_id, season_id, rank, is_finalist, semifinal_score, finals_score)
           VALUES (?, ?, ?, ?, ?, ?)
           RETURNING *"#
    )
    .bind(outcome.team_id)
    .bind(outcome.season_id)
    .bind(outcome.rank)
    .bind(outcome.is_finalist)
    .bind(outcome.semifinal_score)
    .bind(outcome.finals_score)
    .fetch_one(pool)
    .await
}

// Nullable columns use `CASE WHEN ? THEN ? ELSE col END` so an explicit null clears them.
pub async fn update_playoff_outcome(
    pool: &SqlitePool,
    outcome_id: i64,
    patch: &PlayoffOutcomePatch,
) -> Result<Option<PlayoffOutcome>, sqlx::Error> {
    sqlx::query_as::<_, PlayoffOutcome>(
        r#"UPDATE playoff_outcomes
           SET rank = COALESCE(?, rank),
               is_finalist = COALESCE(?, is_finalist),
               semifinal_score = CASE WHEN ? THEN ? ELSE semifinal_score END,
               finals_score = CASE WHEN ? THEN ? ELSE finals_score END,
               updated_at = CURRENT_TIMESTAMP
           WHERE id = ?
           RETURNING *"#
    )
    .bind(patch.rank)
    .bind(patch.is_finalist)
    .bind(patch.semifinal_score.is_some())
    .bind(patch.semifinal_score.flatten())
    .bind(patch.finals_score.is_some())
    .bind(patch.finals_score.flatten())
    .bind(outcome_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_playoff_outcome(pool: &SqlitePool, outcome_id: i64) -> Result<bool, sqlx::Error> {
    super::delete_by_id(pool, "playoff_outcomes", outcome_id).await
}
