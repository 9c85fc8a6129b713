use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;

use crate::auth::Session;
use crate::db;
use crate::error::ApiError;
use crate::league;
use crate::models::{
    DraftBoardResponse, DraftPick, DraftPickPatch, DraftSelection, NewDraftPick, NewRookiePlayer,
    RookiePlayer, RookiePlayerPatch,
};

// GET /api/rookies - List the rookie pool
pub async fn get_rookies(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<RookiePlayer>>, ApiError> {
    let rookies = db::get_all_rookies(&pool).await?;
    Ok(Json(rookies))
}

// GET /api/rookies/{id} - Get rookie by ID
pub async fn get_rookie_by_id(
    State(pool): State<SqlitePool>,
    Path(rookie_id): Path<i64>,
) -> Result<Json<RookiePlayer>, ApiError> {
    let rookie = db::get_rookie_by_id(&pool, rookie_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(rookie))
}

// POST /api/rookies - Add a rookie to the pool
pub async fn create_rookie(
    State(pool): State<SqlitePool>,
    session: Session,
    Json(payload): Json<NewRookiePlayer>,
) -> Result<(StatusCode, Json<RookiePlayer>), ApiError> {
    session.require_admin()?;
    let rookie = db::create_rookie(&pool, &payload).await?;
    tracing::info!("Created rookie {} ({})", rookie.id, rookie.name);

    Ok((StatusCode::CREATED, Json(rookie)))
}

// PATCH /api/rookies/{id} - Update a rookie
pub async fn update_rookie(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(rookie_id): Path<i64>,
    Json(patch): Json<RookiePlayerPatch>,
) -> Result<Json<RookiePlayer>, ApiError> {
    session.require_admin()?;
    let rookie = db::update_rookie(&pool, rookie_id, &patch)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!("Updated rookie {}", rookie_id);

    Ok(Json(rookie))
}

// DELETE /api/rookies/{id} - Remove a rookie from the pool
pub async fn delete_rookie(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(rookie_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    session.require_admin()?;
    if !db::delete_rookie(&pool, rookie_id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!("Deleted rookie {}", rookie_id);

    Ok(StatusCode::NO_CONTENT)
}

// GET /api/draft/picks - List every draft pick
pub async fn get_draft_picks(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<DraftPick>>, ApiError> {
    let picks = db::get_all_draft_picks(&pool).await?;
    Ok(Json(picks))
}

// GET /api/draft/picks/{id} - Get draft pick by ID
pub async fn get_draft_pick_by_id(
    State(pool): State<SqlitePool>,
    Path(pick_id): Path<i64>,
) -> Result<Json<DraftPick>, ApiError> {
    let pick = db::get_draft_pick_by_id(&pool, pick_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(pick))
}

/// GET /api/draft/board/{year} - Picks in draft order plus the undrafted pool
pub async fn get_draft_board(
    State(pool): State<SqlitePool>,
    Path(draft_year): Path<i64>,
) -> Result<Json<DraftBoardResponse>, ApiError> {
    let picks = db::get_draft_picks_by_year(&pool, draft_year).await?;
    let rookies = db::get_rookies_by_year(&pool, draft_year).await?;
    // A rookie may have been taken with a pick from another year's board.
    let all_picks = db::get_all_draft_picks(&pool).await?;
    let available = league::available_rookies(rookies, &all_picks);

    Ok(Json(DraftBoardResponse {
        draft_year,
        picks,
        available,
    }))
}

// POST /api/draft/picks - Create a draft pick
pub async fn create_draft_pick(
    State(pool): State<SqlitePool>,
    session: Session,
    Json(payload): Json<NewDraftPick>,
) -> Result<(StatusCode, Json<DraftPick>), ApiError> {
    session.require_admin()?;
    let pick = db::create_draft_pick(&pool, &payload).await?;
    tracing::info!(
        "Created {} draft pick {}.{:02}",
        pick.draft_year,
        pick.round,
        pick.pick_number
    );

    Ok((StatusCode::CREATED, Json(pick)))
}

// PATCH /api/draft/picks/{id} - Update a pick (e.g. traded to another team)
pub async fn update_draft_pick(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(pick_id): Path<i64>,
    Json(patch): Json<DraftPickPatch>,
) -> Result<Json<DraftPick>, ApiError> {
    session.require_admin()?;
    let pick = db::update_draft_pick(&pool, pick_id, &patch)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!("Updated draft pick {}", pick_id);

    Ok(Json(pick))
}

/// PUT /api/draft/picks/{id}/selection - Put a rookie on a pick, or clear it
///
/// A rookie from another draft class, or one already held by a different
/// pick, is rejected before the write.
pub async fn set_draft_selection(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(pick_id): Path<i64>,
    Json(selection): Json<DraftSelection>,
) -> Result<Json<DraftPick>, ApiError> {
    session.require_admin()?;
    let pick = db::get_draft_pick_by_id(&pool, pick_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    if let Some(player_id) = selection.player_id {
        let rookie = db::get_rookie_by_id(&pool, player_id)
            .await?
            .ok_or_else(|| ApiError::Validation(format!("rookie {} does not exist", player_id)))?;
        let picks = db::get_all_draft_picks(&pool).await?;
        league::check_selection(&picks, &pick, &rookie)?;
    }

    let pick = db::set_draft_selection(&pool, pick_id, selection.player_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!("Draft pick {} selection set to {:?}", pick_id, selection.player_id);

    Ok(Json(pick))
}

// DELETE /api/draft/picks/{id} - Delete a draft pick
pub async fn delete_draft_pick(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(pick_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    session.require_admin()?;
    if !db::delete_draft_pick(&pool, pick_id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!("Deleted draft pick {}", pick_id);

    Ok(StatusCode::NO_CONTENT)
}
