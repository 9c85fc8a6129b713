use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;

use crate::auth::Session;
use crate::db;
use crate::error::ApiError;
use crate::models::{NewTeam, Team, TeamPatch};

// GET /api/teams - List all teams
pub async fn get_teams(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Team>>, ApiError> {
    let teams = db::get_all_teams(&pool).await?;
    Ok(Json(teams))
}

// GET /api/teams/{id} - Get team by ID
pub async fn get_team_by_id(
    State(pool): State<SqlitePool>,
    Path(team_id): Path<i64>,
) -> Result<Json<Team>, ApiError> {
    let team = db::get_team_by_id(&pool, team_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(team))
}

// POST /api/teams - Create a team
pub async fn create_team(
    State(pool): State<SqlitePool>,
    session: Session,
    Json(payload): Json<NewTeam>,
) -> Result<(StatusCode, Json<Team>), ApiError> {
    session.require_admin()?;
    let team = db::create_team(&pool, &payload).await?;
    tracing::info!("Created team {} ({})", team.id, team.name);

    Ok((StatusCode::CREATED, Json(team)))
}

// PATCH /api/teams/{id} - Update a team
pub async fn update_team(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(team_id): Path<i64>,
    Json(patch): Json<TeamPatch>,
) -> Result<Json<Team>, ApiError> {
    session.require_admin()?;
    let team = db::update_team(&pool, team_id, &patch)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!("Updated team {}", team_id);

    Ok(Json(team))
}

// DELETE /api/teams/{id} - Delete a team
pub async fn delete_team(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(team_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    session.require_admin()?;
    if !db::delete_team(&pool, team_id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!("Deleted team {}", team_id);

    Ok(StatusCode::NO_CONTENT)
}
