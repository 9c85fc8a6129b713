use serde::{Deserialize, Serialize};

use crate::league::{RankedStanding, StandingInput};

/// Regular season totals for one team in one season, entered by an admin.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RegularSeasonStanding {
    pub id: i64,
    pub team_id: i64,
    pub season_id: i64,
    pub rank: i64,
    pub wins: i64,
    pub losses: i64,
    pub points_accumulated: i64,
    pub total_points_for: f64,
    pub average_ppw: f64,
    pub median_ppw: f64,
    pub average_finish: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl RegularSeasonStanding {
    pub fn to_standing_input(&self) -> StandingInput {
        StandingInput {
            team_id: self.team_id,
            total_points: self.points_accumulated,
            points_for: self.total_points_for,
            wins: self.wins,
            losses: self.losses,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NewStanding {
    pub team_id: i64,
    pub season_id: i64,
    pub rank: i64,
    #[serde(default)]
    pub wins: i64,
    #[serde(default)]
    pub losses: i64,
    #[serde(default)]
    pub points_accumulated: i64,
    #[serde(default)]
    pub total_points_for: f64,
    #[serde(default)]
    pub average_ppw: f64,
    #[serde(default)]
    pub median_ppw: f64,
    #[serde(default)]
    pub average_finish: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct StandingPatch {
    pub rank: Option<i64>,
    pub wins: Option<i64>,
    pub losses: Option<i64>,
    pub points_accumulated: Option<i64>,
    pub total_points_for: Option<f64>,
    pub average_ppw: Option<f64>,
    pub median_ppw: Option<f64>,
    pub average_finish: Option<f64>,
}

/// Derived standings row for the public table
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsTableRow {
    #[serde(flatten)]
    pub standing: RankedStanding,
    pub team_name: Option<String>,
    pub governor: Option<String>,
    pub average_ppw: f64,
    pub median_ppw: f64,
    pub average_finish: f64,
}

/// Response wrapper for the standings table endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsTableResponse {
    pub season_id: i64,
    pub year: i64,
    pub standings: Vec<StandingsTableRow>,
    pub count: usize,
}
