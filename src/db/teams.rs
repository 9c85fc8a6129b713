use sqlx::sqlite::SqlitePool;

use crate::models::{NewTeam, Team, TeamPatch};

pub async fn get_all_teams(pool: &SqlitePool) -> Result<Vec<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"SELECT * FROM teams ORDER BY name"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_team_by_id(pool: &SqlitePool, team_id: i64) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"SELECT * FROM teams WHERE id = ?"#
    )
    .bind(team_id)
    .fetch_optional(pool)
    .await
}

pub async fn create_team(pool: &SqlitePool, team: &NewTeam) -> Result<Team, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"INSERT INTO teams (name, governor) VALUES (?, ?) RETURNING *"#
    )
    .bind(&team.name)
    .bind(&team.governor)
    .fetch_one(pool)
    .await
}

pub async fn update_team(pool: &SqlitePool, team_id: i64, patch: &TeamPatch) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"UPDATE teams
           SET name = COALESCE(?, name),
               governor = COALESCE(?, governor),
               updated_at = CURRENT_TIMESTAMP
           WHERE id = ?
           RETURNING *"#
    )
    .bind(&patch.name)
    .bind(&patch.governor)
    .bind(team_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_team(pool: &SqlitePool, team_id: i64) -> Result<bool, sqlx::Error> {
    super::delete_by_id(pool, "teams", team_id).await
}
