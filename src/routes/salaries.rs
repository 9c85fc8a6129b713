use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;
use sqlx::sqlite::SqlitePool;

use crate::auth::Session;
use crate::db;
use crate::error::ApiError;
use crate::league::{self, TeamPayroll};
use crate::models::{NewPlayer, NewPlayerSalary, Player, PlayerPatch, PlayerSalary, PlayerSalaryPatch};

// GET /api/players - List all players
pub async fn get_players(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let players = db::get_all_players(&pool).await?;
    Ok(Json(players))
}

// GET /api/players/{id} - Get player by ID
pub async fn get_player_by_id(
    State(pool): State<SqlitePool>,
    Path(player_id): Path<i64>,
) -> Result<Json<Player>, ApiError> {
    let player = db::get_player_by_id(&pool, player_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(player))
}

// POST /api/players - Create a player
pub async fn create_player(
    State(pool): State<SqlitePool>,
    session: Session,
    Json(payload): Json<NewPlayer>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    session.require_admin()?;
    let player = db::create_player(&pool, &payload).await?;
    tracing::info!("Created player {} ({})", player.id, player.name);

    Ok((StatusCode::CREATED, Json(player)))
}

// PATCH /api/players/{id} - Update a player
pub async fn update_player(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(player_id): Path<i64>,
    Json(patch): Json<PlayerPatch>,
) -> Result<Json<Player>, ApiError> {
    session.require_admin()?;
    let player = db::update_player(&pool, player_id, &patch)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!("Updated player {}", player_id);

    Ok(Json(player))
}

// DELETE /api/players/{id} - Delete a player and their contracts
pub async fn delete_player(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(player_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    session.require_admin()?;
    if !db::delete_player(&pool, player_id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!("Deleted player {}", player_id);

    Ok(StatusCode::NO_CONTENT)
}

// GET /api/salaries - List all contracts
pub async fn get_salaries(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<PlayerSalary>>, ApiError> {
    let salaries = db::get_all_salaries(&pool).await?;
    Ok(Json(salaries))
}

// GET /api/salaries/{id} - Get contract by ID
pub async fn get_salary_by_id(
    State(pool): State<SqlitePool>,
    Path(salary_id): Path<i64>,
) -> Result<Json<PlayerSalary>, ApiError> {
    let salary = db::get_salary_by_id(&pool, salary_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(salary))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPayrollRow {
    team_name: Option<String>,
    #[serde(flatten)]
    payroll: TeamPayroll,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollResponse {
    franchise_tag_salary: f64,
    teams: Vec<TeamPayrollRow>,
}

// GET /api/salaries/payroll - Salary totals per team and contract year
pub async fn get_payroll(
    State(pool): State<SqlitePool>,
) -> Result<Json<PayrollResponse>, ApiError> {
    let salaries = db::get_all_salaries(&pool).await?;
    let teams = db::get_all_teams(&pool).await?;
    let names: HashMap<i64, &str> = teams.iter().map(|t| (t.id, t.name.as_str())).collect();

    let teams = league::team_payrolls(&salaries)
        .into_iter()
        .map(|payroll| TeamPayrollRow {
            team_name: names.get(&payroll.team_id).map(|n| n.to_string()),
            payroll,
        })
        .collect();

    Ok(Json(PayrollResponse {
        franchise_tag_salary: league::FRANCHISE_TAG_SALARY,
        teams,
    }))
}

// POST /api/salaries - Create a contract
pub async fn create_salary(
    State(pool): State<SqlitePool>,
    session: Session,
    Json(payload): Json<NewPlayerSalary>,
) -> Result<(StatusCode, Json<PlayerSalary>), ApiError> {
    session.require_admin()?;
    let salary = db::create_salary(&pool, &payload).await?;
    tracing::info!("Created contract {} for player {}", salary.id, salary.player_id);

    Ok((StatusCode::CREATED, Json(salary)))
}

// PATCH /api/salaries/{id} - Update a contract; `"team_id": null` releases the player
pub async fn update_salary(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(salary_id): Path<i64>,
    Json(patch): Json<PlayerSalaryPatch>,
) -> Result<Json<PlayerSalary>, ApiError> {
    session.require_admin()?;
    let salary = db::update_salary(&pool, salary_id, &patch)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!("Updated contract {}", salary_id);

    Ok(Json(salary))
}

// DELETE /api/salaries/{id} - Delete a contract
pub async fn delete_salary(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(salary_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    session.require_admin()?;
    if !db::delete_salary(&pool, salary_id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!("Deleted contract {}", salary_id);

    Ok(StatusCode::NO_CONTENT)
}
