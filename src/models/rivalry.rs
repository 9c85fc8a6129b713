use serde::{Deserialize, Serialize};

use crate::league::{MatchupResult, RivalryRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MatchupSide {
    Team1,
    Team2,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Rivalry {
    pub id: i64,
    pub name: String,
    pub team1_name: String,
    pub team2_name: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewRivalry {
    pub name: String,
    pub team1_name: String,
    pub team2_name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RivalryPatch {
    pub name: Option<String>,
    pub team1_name: Option<String>,
    pub team2_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RivalryMatchup {
    pub id: i64,
    pub rivalry_id: i64,
    pub season_year: i64,
    pub team1_score: f64,
    pub team2_score: f64,
    pub winner: MatchupSide,
    pub created_at: String,
    pub updated_at: String,
}

impl RivalryMatchup {
    pub fn to_matchup_result(&self) -> MatchupResult {
        MatchupResult {
            team1_score: self.team1_score,
            team2_score: self.team2_score,
            winner: self.winner,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NewRivalryMatchup {
    pub season_year: i64,
    pub team1_score: f64,
    pub team2_score: f64,
    pub winner: MatchupSide,
}

#[derive(Debug, Default, Deserialize)]
pub struct RivalryMatchupPatch {
    pub season_year: Option<i64>,
    pub team1_score: Option<f64>,
    pub team2_score: Option<f64>,
    pub winner: Option<MatchupSide>,
}

/// Rivalry with its lifetime record, derived on every request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RivalryRecordResponse {
    pub rivalry: Rivalry,
    pub record: RivalryRecord,
    pub matchups: Vec<RivalryMatchup>,
}
