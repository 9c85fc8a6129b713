use sqlx::sqlite::SqlitePool;

use crate::models::{
    NewRivalry, NewRivalryMatchup, Rivalry, RivalryMatchup, RivalryMatchupPatch, RivalryPatch,
};

pub async fn get_all_rivalries(pool: &SqlitePool) -> Result<Vec<Rivalry>, sqlx::Error> {
    sqlx::query_as::<_, Rivalry>(
        r#"SELECT * FROM rivalries ORDER BY name"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_rivalry_by_id(pool: &SqlitePool, rivalry_id: i64) -> Result<Option<Rivalry>, sqlx::Error> {
    sqlx::query_as::<_, Rivalry>(
        r#"SELECT * FROM rivalries WHERE id = ?"#
    )
    .bind(rivalry_id)
    .fetch_optional(pool)
    .await
}

pub async fn create_rivalry(pool: &SqlitePool, rivalry: &NewRivalry) -> Result<Rivalry, sqlx::Error> {
    sqlx::query_as::<_, Rivalry>(
        r#"INSERT INTO rivalries (name, team1_name, team2_name) VALUES (?, ?, ?) RETURNING *"#
    )
    .bind(&rivalry.name)
    .bind(&rivalry.team1_name)
    .bind(&rivalry.team2_name)
    .fetch_one(pool)
    .await
}

pub async fn update_rivalry(pool: &SqlitePool, rivalry_id: i64, patch: &RivalryPatch) -> Result<Option<Rivalry>, sqlx::Error> {
    sqlx::query_as::<_, Rivalry>(
        r#"UPDATE rivalries
           SET name = COALESCE(?, name),
               team1_name = COALESCE(?, team1_name),
               team2_name = COALESCE(?, team2_name),
               updated_at = CURRENT_TIMESTAMP
           WHERE id = ?
           RETURNING *"#
    )
    .bind(&patch.name)
    .bind(&patch.team1_name)
    .bind(&patch.team2_name)
    .bind(rivalry_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_rivalry(pool: &SqlitePool, rivalry_id: i64) -> Result<bool, sqlx::Error> {
    super::delete_by_id(pool, "rivalries", rivalry_id).await
}

// Matchup queries
pub async fn get_matchups_by_rivalry(pool: &SqlitePool, rivalry_id: i64) -> Result<Vec<RivalryMatchup>, sqlx::Error> {
    sqlx::query_as::<_, RivalryMatchup>(
        r#"SELECT * FROM rivalry_matchups WHERE rivalry_id = ? ORDER BY season_year"#
    )
    .bind(rivalry_id)
    .fetch_all(pool)
    .await
}

pub async fn get_matchup_by_id(pool: &SqlitePool, matchup_id: i64) -> Result<Option<RivalryMatchup>, sqlx::Error> {
    sqlx::query_as::<_, RivalryMatchup>(
        r#"SELECT * FROM rivalry_matchups WHERE id = ?"#
    )
    .bind(matchup_id)
    .fetch_optional(pool)
    .await
}

pub async fn create_matchup(
    pool: &SqlitePool,
    rivalry_id: i64,
    matchup: &NewRivalryMatchup,
) -> Result<RivalryMatchup, sqlx::Error> {
    sqlx::query_as::<_, RivalryMatchup>(
        r#"INSERT INTO rivalry_matchups (rivalry_id, season_year, team1_score, team2_score, winner)
           VALUES (?, ?, ?, ?, ?)
           RETURNING *"#
    )
    .bind(rivalry_id)
    .bind(matchup.season_year)
    .bind(matchup.team1_score)
    .bind(matchup.team2_score)
    .bind(matchup.winner)
    .fetch_one(pool)
    .await
}

pub async fn update_matchup(
    pool: &SqlitePool,
    matchup_id: i64,
    patch: &RivalryMatchupPatch,
) -> Result<Option<RivalryMatchup>, sqlx::Error> {
    sqlx::query_as::<_, RivalryMatchup>(
        r#"UPDATE rivalry_matchups
           SET season_year = COALESCE(?, season_year),
               team1_score = COALESCE(?, team1_score),
               team2_score = COALESCE(?, team2_score),
               winner = COALESCE(?, winner),
               updated_at = CURRENT_TIMESTAMP
           WHERE id = ?
           RETURNING *"#
    )
    .bind(patch.season_year)
    .bind(patch.team1_score)
    .bind(patch.team2_score)
    .bind(patch.winner)
    .bind(matchup_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_matchup(pool: &SqlitePool, matchup_id: i64) -> Result<bool, sqlx::Error> {
    super::delete_by_id(pool, "rivalry_matchups", matchup_id).await
}
