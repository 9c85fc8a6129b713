use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;

use crate::auth::Session;
use crate::db;
use crate::error::ApiError;
use crate::league::{self, PlayoffEntry};
use crate::models::{NewPlayoffOutcome, PlayoffOutcome, PlayoffOutcomePatch, PlayoffResultsResponse};

// GET /api/playoffs - List all playoff outcome rows
pub async fn get_playoff_outcomes(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<PlayoffOutcome>>, ApiError> {
    let outcomes = db::get_all_playoff_outcomes(&pool).await?;
    Ok(Json(outcomes))
}

// GET /api/playoffs/{id} - Get a playoff outcome by ID
pub async fn get_playoff_outcome_by_id(
    State(pool): State<SqlitePool>,
    Path(outcome_id): Path<i64>,
) -> Result<Json<PlayoffOutcome>, ApiError> {
    let outcome = db::get_playoff_outcome_by_id(&pool, outcome_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(outcome))
}

// GET /api/seasons/{id}/playoffs - Raw playoff rows for one season
pub async fn get_playoff_outcomes_by_season(
    State(pool): State<SqlitePool>,
    Path(season_id): Path<i64>,
) -> Result<Json<Vec<PlayoffOutcome>>, ApiError> {
    db::get_season_by_id(&pool, season_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let outcomes = db::get_playoff_outcomes_by_season(&pool, season_id).await?;

    Ok(Json(outcomes))
}

/// GET /api/seasons/{id}/playoffs/results - Champion, runner-up, 3rd and 4th
///
/// A season without playoff rows answers with `noData` for both games.
pub async fn get_playoff_results(
    State(pool): State<SqlitePool>,
    Path(season_id): Path<i64>,
) -> Result<Json<PlayoffResultsResponse>, ApiError> {
    db::get_season_by_id(&pool, season_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let outcomes = db::get_playoff_outcomes_by_season(&pool, season_id).await?;
    let bracket: Vec<PlayoffEntry> = outcomes.iter().map(|o| o.to_playoff_entry()).collect();

    let championship = league::championship(&bracket).inspect_err(|e| {
        tracing::warn!("Season {} playoff data is inconsistent: {}", season_id, e);
    })?;
    let consolation = league::consolation(&bracket).inspect_err(|e| {
        tracing::warn!("Season {} consolation data is inconsistent: {}", season_id, e);
    })?;

    Ok(Json(PlayoffResultsResponse {
        season_id,
        championship,
        consolation,
        bracket,
    }))
}

// POST /api/playoffs - Create a playoff outcome
pub async fn create_playoff_outcome(
    State(pool): State<SqlitePool>,
    session: Session,
    Json(payload): Json<NewPlayoffOutcome>,
) -> Result<(StatusCode, Json<PlayoffOutcome>), ApiError> {
    session.require_admin()?;
    let outcome = db::create_playoff_outcome(&pool, &payload).await?;
    tracing::info!(
        "Created playoff outcome {} for team {} in season {}",
        outcome.id,
        outcome.team_id,
        outcome.season_id
    );

    Ok((StatusCode::CREATED, Json(outcome)))
}

// PATCH /api/playoffs/{id} - Update a playoff outcome
pub async fn update_playoff_outcome(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(outcome_id): Path<i64>,
    Json(patch): Json<PlayoffOutcomePatch>,
) -> Result<Json<PlayoffOutcome>, ApiError> {
    session.require_admin()?;
    let outcome = db::update_playoff_outcome(&pool, outcome_id, &patch)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!("Updated playoff outcome {}", outcome_id);

    Ok(Json(outcome))
}

// DELETE /api/playoffs/{id} - Delete a playoff outcome
pub async fn delete_playoff_outcome(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(outcome_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    session.require_admin()?;
    if !db::delete_playoff_outcome(&pool, outcome_id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!("Deleted playoff outcome {}", outcome_id);

    Ok(StatusCode::NO_CONTENT)
}
