use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;

use crate::auth::Session;
use crate::db;
use crate::error::ApiError;
use crate::league::{self, MatchupResult};
use crate::models::{
    NewRivalry, NewRivalryMatchup, Rivalry, RivalryMatchup, RivalryMatchupPatch, RivalryPatch,
    RivalryRecordResponse,
};

// GET /api/rivalries - List rivalries
pub async fn get_rivalries(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Rivalry>>, ApiError> {
    let rivalries = db::get_all_rivalries(&pool).await?;
    Ok(Json(rivalries))
}

// GET /api/rivalries/{id} - Get rivalry by ID
pub async fn get_rivalry_by_id(
    State(pool): State<SqlitePool>,
    Path(rivalry_id): Path<i64>,
) -> Result<Json<Rivalry>, ApiError> {
    let rivalry = db::get_rivalry_by_id(&pool, rivalry_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(rivalry))
}

// GET /api/rivalries/{id}/record - Lifetime head-to-head, counted from the matchups
pub async fn get_rivalry_record(
    State(pool): State<SqlitePool>,
    Path(rivalry_id): Path<i64>,
) -> Result<Json<RivalryRecordResponse>, ApiError> {
    let rivalry = db::get_rivalry_by_id(&pool, rivalry_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let matchups = db::get_matchups_by_rivalry(&pool, rivalry_id).await?;

    let results: Vec<MatchupResult> = matchups.iter().map(|m| m.to_matchup_result()).collect();
    let record = league::head_to_head(&results);

    Ok(Json(RivalryRecordResponse {
        rivalry,
        record,
        matchups,
    }))
}

// POST /api/rivalries - Create a rivalry
pub async fn create_rivalry(
    State(pool): State<SqlitePool>,
    session: Session,
    Json(payload): Json<NewRivalry>,
) -> Result<(StatusCode, Json<Rivalry>), ApiError> {
    session.require_admin()?;
    let rivalry = db::create_rivalry(&pool, &payload).await?;
    tracing::info!("Created rivalry {} ({})", rivalry.id, rivalry.name);

    Ok((StatusCode::CREATED, Json(rivalry)))
}

// PATCH /api/rivalries/{id} - Update a rivalry
pub async fn update_rivalry(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(rivalry_id): Path<i64>,
    Json(patch): Json<RivalryPatch>,
) -> Result<Json<Rivalry>, ApiError> {
    session.require_admin()?;
    let rivalry = db::update_rivalry(&pool, rivalry_id, &patch)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!("Updated rivalry {}", rivalry_id);

    Ok(Json(rivalry))
}

// DELETE /api/rivalries/{id} - Delete a rivalry and its matchups
pub async fn delete_rivalry(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(rivalry_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    session.require_admin()?;
    if !db::delete_rivalry(&pool, rivalry_id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!("Deleted rivalry {}", rivalry_id);

    Ok(StatusCode::NO_CONTENT)
}

// GET /api/rivalries/{id}/matchups - Season-by-season results
pub async fn get_matchups(
    State(pool): State<SqlitePool>,
    Path(rivalry_id): Path<i64>,
) -> Result<Json<Vec<RivalryMatchup>>, ApiError> {
    db::get_rivalry_by_id(&pool, rivalry_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let matchups = db::get_matchups_by_rivalry(&pool, rivalry_id).await?;

    Ok(Json(matchups))
}

// GET /api/matchups/{id} - Get a matchup by ID
pub async fn get_matchup_by_id(
    State(pool): State<SqlitePool>,
    Path(matchup_id): Path<i64>,
) -> Result<Json<RivalryMatchup>, ApiError> {
    let matchup = db::get_matchup_by_id(&pool, matchup_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(matchup))
}

// POST /api/rivalries/{id}/matchups - Record a season's meeting
pub async fn create_matchup(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(rivalry_id): Path<i64>,
    Json(payload): Json<NewRivalryMatchup>,
) -> Result<(StatusCode, Json<RivalryMatchup>), ApiError> {
    session.require_admin()?;
    db::get_rivalry_by_id(&pool, rivalry_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let matchup = db::create_matchup(&pool, rivalry_id, &payload).await?;
    tracing::info!("Recorded {} matchup for rivalry {}", matchup.season_year, rivalry_id);

    Ok((StatusCode::CREATED, Json(matchup)))
}

// PATCH /api/matchups/{id} - Update a matchup
pub async fn update_matchup(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(matchup_id): Path<i64>,
    Json(patch): Json<RivalryMatchupPatch>,
) -> Result<Json<RivalryMatchup>, ApiError> {
    session.require_admin()?;
    let matchup = db::update_matchup(&pool, matchup_id, &patch)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!("Updated matchup {}", matchup_id);

    Ok(Json(matchup))
}

// DELETE /api/matchups/{id} - Delete a matchup
pub async fn delete_matchup(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(matchup_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    session.require_admin()?;
    if !db::delete_matchup(&pool, matchup_id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!("Deleted matchup {}", matchup_id);

    Ok(StatusCode::NO_CONTENT)
}
