use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;

use crate::auth::Session;
use crate::db;
use crate::error::ApiError;
use crate::models::{NewSeason, Season, SeasonPatch};

// GET /api/seasons - List seasons, latest first
pub async fn get_seasons(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Season>>, ApiError> {
    let seasons = db::get_all_seasons(&pool).await?;
    Ok(Json(seasons))
}

// GET /api/seasons/{id} - Get season by ID
pub async fn get_season_by_id(
    State(pool): State<SqlitePool>,
    Path(season_id): Path<i64>,
) -> Result<Json<Season>, ApiError> {
    let season = db::get_season_by_id(&pool, season_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(season))
}

/// GET /api/seasons/active - The season currently in progress
///
/// Only one season should be active but nothing enforces it; when several
/// are flagged the latest year wins.
pub async fn get_active_season(
    State(pool): State<SqlitePool>,
) -> Result<Json<Season>, ApiError> {
    let mut active = db::get_active_seasons(&pool).await?;
    if active.len() > 1 {
        let years: Vec<i64> = active.iter().map(|s| s.year).collect();
        tracing::warn!("Multiple active seasons {:?}, using {}", years, years[0]);
    }
    if active.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(active.swap_remove(0)))
}

// POST /api/seasons - Create a season
pub async fn create_season(
    State(pool): State<SqlitePool>,
    session: Session,
    Json(payload): Json<NewSeason>,
) -> Result<(StatusCode, Json<Season>), ApiError> {
    session.require_admin()?;
    let season = db::create_season(&pool, &payload).await?;
    tracing::info!("Created season {} ({})", season.id, season.year);

    Ok((StatusCode::CREATED, Json(season)))
}

// PATCH /api/seasons/{id} - Update a season
pub async fn update_season(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(season_id): Path<i64>,
    Json(patch): Json<SeasonPatch>,
) -> Result<Json<Season>, ApiError> {
    session.require_admin()?;
    let season = db::update_season(&pool, season_id, &patch)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!("Updated season {}", season_id);

    Ok(Json(season))
}

// DELETE /api/seasons/{id} - Delete a season and everything scoped to it
pub async fn delete_season(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(season_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    session.require_admin()?;
    if !db::delete_season(&pool, season_id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!("Deleted season {}", season_id);

    Ok(StatusCode::NO_CONTENT)
}
