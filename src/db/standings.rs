use sqlx::sqlite::SqlitePool;

use crate::models::{NewStanding, RegularSeasonStanding, StandingPatch};

pub async fn get_all_standings(pool: &SqlitePool) -> Result<Vec<RegularSeasonStanding>, sqlx::Error> {
    sqlx::query_as::<_, RegularSeasonStanding>(
        r#"SELECT * FROM regular_season_standings ORDER BY season_id, rank"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_standing_by_id(pool: &SqlitePool, standing_id: i64) -> Result<Option<RegularSeasonStanding>, sqlx::Error> {
    sqlx::query_as::<_, RegularSeasonStanding>(
        r#"SELECT * FROM regular_season_standings WHERE id = ?"#
    )
    .bind(standing_id)
    .fetch_optional(pool)
    .await
}

pub async fn get_standings_by_season(pool: &SqlitePool, season_id: i64) -> Result<Vec<RegularSeasonStanding>, sqlx::Error> {
    sqlx::query_as::<_, RegularSeasonStanding>(
        r#"SELECT * FROM regular_season_standings WHERE season_id = ? ORDER BY rank"#
    )
    .bind(season_id)
    .fetch_all(pool)
    .await
}

pub async fn create_standing(pool: &SqlitePool, standing: &NewStanding) -> Result<RegularSeasonStanding, sqlx::Error> {
    sqlx::query_as::<_, RegularSeasonStanding>(
        r#"INSERT INTO regular_season_standings
               (team_id, season_id, rank, wins, losses, points_accumulated,
                total_points_for, average_ppw, median_ppw, average_finish)
           VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
           RETURNING *"#
    )
    .bind(standing.team_id)
    .bind(standing.season_id)
    .bind(standing.rank)
    .bind(standing.wins)
    .bind(standing.losses)
    .bind(standing.points_accumulated)
    .bind(standing.total_points_for)
    .bind(standing.average_ppw)
    .bind(standing.median_ppw)
    .bind(standing.average_finish)
    .fetch_one(pool)
    .await
}

pub async fn update_standing(
    pool: &SqlitePool,
    standing_id: i64,
    patch: &StandingPatch,
) -> Result<Option<RegularSeasonStanding>, sqlx::Error> {
    sqlx::query_as::<_, RegularSeasonStanding>(
        r#"UPDATE regular_season_standings
           SET rank = COALESCE(?, rank),
               wins = COALESCE(?, wins),
               losses = COALESCE(?, losses),
               points_accumulated = COALESCE(?, points_accumulated),
               total_points_for = COALESCE(?, total_points_for),
               average_ppw = COALESCE(?, average_ppw),
               median_ppw = COALESCE(?, median_ppw),
               average_finish = COALESCE(?, average_finish),
               updated_at = CURRENT_TIMESTAMP
           WHERE id = ?
           RETURNING *"#
    )
    .bind(patch.rank)
    .bind(patch.wins)
    .bind(patch.losses)
    .bind(patch.points_accumulated)
    .bind(patch.total_points_for)
    .bind(patch.average_ppw)
    .bind(patch.median_ppw)
    .bind(patch.average_finish)
    .bind(standing_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_standing(pool: &SqlitePool, standing_id: i64) -> Result<bool, sqlx::Error> {
    super::delete_by_id(pool, "regular_season_standings", standing_id).await
}
