use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;

use crate::auth::Session;
use crate::db;
use crate::error::ApiError;
use crate::league::{self, CareerRecord, LeaderboardEntry};
use crate::models::{GovernorCareer, GovernorCareerPatch, NewGovernorCareer};

// GET /api/governors - List governor career records
pub async fn get_governor_careers(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<GovernorCareer>>, ApiError> {
    let careers = db::get_all_governor_careers(&pool).await?;
    Ok(Json(careers))
}

// GET /api/governors/{id} - Get a career record by ID
pub async fn get_governor_career_by_id(
    State(pool): State<SqlitePool>,
    Path(career_id): Path<i64>,
) -> Result<Json<GovernorCareer>, ApiError> {
    let career = db::get_governor_career_by_id(&pool, career_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(career))
}

// GET /api/governors/leaderboard - Governors ranked by Historical Dominance Index
pub async fn get_dominance_leaderboard(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
    let careers = db::get_all_governor_careers(&pool).await?;
    let records: Vec<CareerRecord> = careers.iter().map(|c| c.to_career_record()).collect();

    Ok(Json(league::dominance_leaderboard(&records)))
}

// POST /api/governors - Create a career record
pub async fn create_governor_career(
    State(pool): State<SqlitePool>,
    session: Session,
    Json(payload): Json<NewGovernorCareer>,
) -> Result<(StatusCode, Json<GovernorCareer>), ApiError> {
    session.require_admin()?;
    let career = db::create_governor_career(&pool, &payload).await?;
    tracing::info!("Created career record {} ({})", career.id, career.governor);

    Ok((StatusCode::CREATED, Json(career)))
}

// PATCH /api/governors/{id} - Update a career record
pub async fn update_governor_career(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(career_id): Path<i64>,
    Json(patch): Json<GovernorCareerPatch>,
) -> Result<Json<GovernorCareer>, ApiError> {
    session.require_admin()?;
    let career = db::update_governor_career(&pool, career_id, &patch)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!("Updated career record {}", career_id);

    Ok(Json(career))
}

// DELETE /api/governors/{id} - Delete a career record
pub async fn delete_governor_career(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(career_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    session.require_admin()?;
    if !db::delete_governor_career(&pool, career_id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!("Deleted career record {}", career_id);

    Ok(StatusCode::NO_CONTENT)
}
