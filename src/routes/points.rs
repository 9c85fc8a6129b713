use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::league::{self, PointsTableEntry};

// GET /api/points-table - Weekly finish to ranking points
pub async fn get_points_table() -> Json<Vec<PointsTableEntry>> {
    Json(league::points_table())
}

#[derive(Deserialize)]
pub struct AccumulateRequest {
    finishes: Vec<i64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccumulateResponse {
    weeks: usize,
    points_accumulated: i64,
}

// POST /api/points/accumulate - Total ranking points for a run of weekly finishes
pub async fn accumulate_points(
    Json(payload): Json<AccumulateRequest>,
) -> Result<Json<AccumulateResponse>, ApiError> {
    let points_accumulated = league::season_points(&payload.finishes)?;

    Ok(Json(AccumulateResponse {
        weeks: payload.finishes.len(),
        points_accumulated,
    }))
}
