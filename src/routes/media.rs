use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;

use crate::auth::Session;
use crate::db;
use crate::error::ApiError;
use crate::models::{Media, MediaPatch, NewMedia};

// GET /api/media - List media, newest first
pub async fn get_media(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Media>>, ApiError> {
    let media = db::get_all_media(&pool).await?;
    Ok(Json(media))
}

// GET /api/media/{id} - Get media by ID
pub async fn get_media_by_id(
    State(pool): State<SqlitePool>,
    Path(media_id): Path<i64>,
) -> Result<Json<Media>, ApiError> {
    let media = db::get_media_by_id(&pool, media_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(media))
}

// GET /api/seasons/{id}/media - Media tagged with a season
pub async fn get_media_by_season(
    State(pool): State<SqlitePool>,
    Path(season_id): Path<i64>,
) -> Result<Json<Vec<Media>>, ApiError> {
    db::get_season_by_id(&pool, season_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let media = db::get_media_by_season(&pool, season_id).await?;

    Ok(Json(media))
}

// POST /api/media - Record an uploaded file
pub async fn create_media(
    State(pool): State<SqlitePool>,
    session: Session,
    Json(payload): Json<NewMedia>,
) -> Result<(StatusCode, Json<Media>), ApiError> {
    session.require_admin()?;
    let media = db::create_media(&pool, &payload).await?;
    tracing::info!("Created media {} ({})", media.id, media.title);

    Ok((StatusCode::CREATED, Json(media)))
}

// PATCH /api/media/{id} - Update media metadata
pub async fn update_media(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(media_id): Path<i64>,
    Json(patch): Json<MediaPatch>,
) -> Result<Json<Media>, ApiError> {
    session.require_admin()?;
    let media = db::update_media(&pool, media_id, &patch)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!("Updated media {}", media_id);

    Ok(Json(media))
}

// DELETE /api/media/{id} - Delete a media record
pub async fn delete_media(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(media_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    session.require_admin()?;
    if !db::delete_media(&pool, media_id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!("Deleted media {}", media_id);

    Ok(StatusCode::NO_CONTENT)
}
