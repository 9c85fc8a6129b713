use sqlx::sqlite::SqlitePool;

use crate::models::{
    DraftPick, DraftPickPatch, NewDraftPick, NewRookiePlayer, RookiePlayer, RookiePlayerPatch,
};

// Rookie pool queries
pub async fn get_all_rookies(pool: &SqlitePool) -> Result<Vec<RookiePlayer>, sqlx::Error> {
    sqlx::query_as::<_, RookiePlayer>(
        r#"SELECT * FROM rookie_players ORDER BY draft_year DESC, name"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_rookie_by_id(pool: &SqlitePool, rookie_id: i64) -> Result<Option<RookiePlayer>, sqlx::Error> {
    sqlx::query_as::<_, RookiePlayer>(
        r#"SELECT * FROM rookie_players WHERE id = ?"#
    )
    .bind(rookie_id)
    .fetch_optional(pool)
    .await
}

pub async fn get_rookies_by_year(pool: &SqlitePool, draft_year: i64) -> Result<Vec<RookiePlayer>, sqlx::Error> {
    sqlx::query_as::<_, RookiePlayer>(
        r#"SELECT * FROM rookie_players WHERE draft_year = ? ORDER BY name"#
    )
    .bind(draft_year)
    .fetch_all(pool)
    .await
}

pub async fn create_rookie(pool: &SqlitePool, rookie: &NewRookiePlayer) -> Result<RookiePlayer, sqlx::Error> {
    sqlx::query_as::<_, RookiePlayer>(
        r#"INSERT INTO rookie_players (name, position, college, draft_year)
           VALUES (?, ?, ?, ?)
           RETURNING *"#
    )
    .bind(&rookie.name)
    .bind(&rookie.position)
    .bind(&rookie.college)
    .bind(rookie.draft_year)
    .fetch_one(pool)
    .await
}

pub async fn update_rookie(
    pool: &SqlitePool,
    rookie_id: i64,
    patch: &RookiePlayerPatch,
) -> Result<Option<RookiePlayer>, sqlx::Error> {
    sqlx::query_as::<_, RookiePlayer>(
        r#"UPDATE rookie_players
           SET name = COALESCE(?, name),
               position = CASE WHEN ? THEN ? ELSE position END,
               college = CASE WHEN ? THEN ? ELSE college END,
               draft_year = COALESCE(?, draft_year),
               updated_at = CURRENT_TIMESTAMP
           WHERE id = ?
           RETURNING *"#
    )
    .bind(&patch.name)
    .bind(patch.position.is_some())
    .bind(patch.position.clone().flatten())
    .bind(patch.college.is_some())
    .bind(patch.college.clone().flatten())
    .bind(patch.draft_year)
    .bind(rookie_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_rookie(pool: &SqlitePool, rookie_id: i64) -> Result<bool, sqlx::Error> {
    super::delete_by_id(pool, "rookie_players", rookie_id).await
}

// Draft pick queries
pub async fn get_all_draft_picks(pool: &SqlitePool) -> Result<Vec<DraftPick>, sqlx::Error> {
    sqlx::query_as::<_, DraftPick>(
        r#"SELECT * FROM draft_picks ORDER BY draft_year DESC, round, pick_number"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_draft_pick_by_id(pool: &SqlitePool, pick_id: i64) -> Result<Option<DraftPick>, sqlx::Error> {
    sqlx::query_as::<_, DraftPick>(
        r#"SELECT * FROM draft_picks WHERE id = ?"#
    )
    .bind(pick_id)
    .fetch_optional(pool)
    .await
}

pub async fn get_draft_picks_by_year(pool: &SqlitePool, draft_year: i64) -> Result<Vec<DraftPick>, sqlx::Error> {
    sqlx::query_as::<_, DraftPick>(
        r#"SELECT * FROM draft_picks WHERE draft_year = ? ORDER BY round, pick_number"#
    )
    .bind(draft_year)
    .fetch_all(pool)
    .await
}

pub async fn create_draft_pick(pool: &SqlitePool, pick: &NewDraftPick) -> Result<DraftPick, sqlx::Error> {
    sqlx::query_as::<_, DraftPick>(
        r#"INSERT INTO draft_picks (draft_year, round, pick_number, team_id)
           VALUES (?, ?, ?, ?)
           RETURNING *"#
    )
    .bind(pick.draft_year)
    .bind(pick.round)
    .bind(pick.pick_number)
    .bind(pick.team_id)
    .fetch_one(pool)
    .await
}

pub async fn update_draft_pick(pool: &SqlitePool, pick_id: i64, patch: &DraftPickPatch) -> Result<Option<DraftPick>, sqlx::Error> {
    sqlx::query_as::<_, DraftPick>(
        r#"UPDATE draft_picks
           SET draft_year = COALESCE(?, draft_year),
               round = COALESCE(?, round),
               pick_number = COALESCE(?, pick_number),
               team_id = CASE WHEN ? THEN ? ELSE team_id END,
               updated_at = CURRENT_TIMESTAMP
           WHERE id = ?
           RETURNING *"#
    )
    .bind(patch.draft_year)
    .bind(patch.round)
    .bind(patch.pick_number)
    .bind(patch.team_id.is_some())
    .bind(patch.team_id.flatten())
    .bind(pick_id)
    .fetch_optional(pool)
    .await
}

/// Set or clear the rookie taken with a pick. The unique index on
/// `selected_player_id` backs up the check done before calling this.
pub async fn set_draft_selection(
    pool: &SqlitePool,
    pick_id: i64,
    player_id: Option<i64>,
) -> Result<Option<DraftPick>, sqlx::Error> {
    sqlx::query_as::<_, DraftPick>(
        r#"UPDATE draft_picks
           SET selected_player_id = ?,
               updated_at = CURRENT_TIMESTAMP
           WHERE id = ?
           RETURNING *"#
    )
    .bind(player_id)
    .bind(pick_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_draft_pick(pool: &SqlitePool, pick_id: i64) -> Result<bool, sqlx::Error> {
    super::delete_by_id(pool, "draft_picks", pick_id).await
}
