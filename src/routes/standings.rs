use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;

use crate::auth::Session;
use crate::db;
use crate::error::ApiError;
use crate::league::{self, StandingInput};
use crate::models::{
    NewStanding, RegularSeasonStanding, StandingPatch, StandingsTableResponse, StandingsTableRow, Team,
};

// GET /api/standings - List all standings rows
pub async fn get_standings(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<RegularSeasonStanding>>, ApiError> {
    let standings = db::get_all_standings(&pool).await?;
    Ok(Json(standings))
}

// GET /api/standings/{id} - Get a standings row by ID
pub async fn get_standing_by_id(
    State(pool): State<SqlitePool>,
    Path(standing_id): Path<i64>,
) -> Result<Json<RegularSeasonStanding>, ApiError> {
    let standing = db::get_standing_by_id(&pool, standing_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(standing))
}

// GET /api/seasons/{id}/standings - Raw standings rows for one season
pub async fn get_standings_by_season(
    State(pool): State<SqlitePool>,
    Path(season_id): Path<i64>,
) -> Result<Json<Vec<RegularSeasonStanding>>, ApiError> {
    db::get_season_by_id(&pool, season_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let standings = db::get_standings_by_season(&pool, season_id).await?;

    Ok(Json(standings))
}

/// GET /api/seasons/{id}/standings/table - Ranked and tiered standings
///
/// Ranks come from the accumulated ranking points, not the stored `rank`
/// column, with ties broken by points-for and then team id.
pub async fn get_standings_table(
    State(pool): State<SqlitePool>,
    Path(season_id): Path<i64>,
) -> Result<Json<StandingsTableResponse>, ApiError> {
    let season = db::get_season_by_id(&pool, season_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let rows = db::get_standings_by_season(&pool, season_id).await?;
    let teams = db::get_all_teams(&pool).await?;
    let teams_by_id: HashMap<i64, &Team> = teams.iter().map(|t| (t.id, t)).collect();
    let rows_by_team: HashMap<i64, &RegularSeasonStanding> = rows.iter().map(|r| (r.team_id, r)).collect();

    let inputs: Vec<StandingInput> = rows.iter().map(|r| r.to_standing_input()).collect();
    let standings: Vec<StandingsTableRow> = league::rank_standings(&inputs)
        .into_iter()
        .map(|ranked| {
            let team = teams_by_id.get(&ranked.team_id);
            let row = rows_by_team.get(&ranked.team_id);
            StandingsTableRow {
                team_name: team.map(|t| t.name.clone()),
                governor: team.map(|t| t.governor.clone()),
                average_ppw: row.map(|r| r.average_ppw).unwrap_or_default(),
                median_ppw: row.map(|r| r.median_ppw).unwrap_or_default(),
                average_finish: row.map(|r| r.average_finish).unwrap_or_default(),
                standing: ranked,
            }
        })
        .collect();

    let count = standings.len();
    Ok(Json(StandingsTableResponse {
        season_id,
        year: season.year,
        standings,
        count,
    }))
}

// POST /api/standings - Create a standings row
pub async fn create_standing(
    State(pool): State<SqlitePool>,
    session: Session,
    Json(payload): Json<NewStanding>,
) -> Result<(StatusCode, Json<RegularSeasonStanding>), ApiError> {
    session.require_admin()?;
    let standing = db::create_standing(&pool, &payload).await?;
    tracing::info!(
        "Created standing {} for team {} in season {}",
        standing.id,
        standing.team_id,
        standing.season_id
    );

    Ok((StatusCode::CREATED, Json(standing)))
}

// PATCH /api/standings/{id} - Update a standings row
pub async fn update_standing(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(standing_id): Path<i64>,
    Json(patch): Json<StandingPatch>,
) -> Result<Json<RegularSeasonStanding>, ApiError> {
    session.require_admin()?;
    let standing = db::update_standing(&pool, standing_id, &patch)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!("Updated standing {}", standing_id);

    Ok(Json(standing))
}

// DELETE /api/standings/{id} - Delete a standings row
pub async fn delete_standing(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(standing_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    session.require_admin()?;
    if !db::delete_standing(&pool, standing_id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!("Deleted standing {}", standing_id);

    Ok(StatusCode::NO_CONTENT)
}
