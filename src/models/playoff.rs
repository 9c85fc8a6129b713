use serde::{Deserialize, Serialize};

use crate::league::{Championship, Consolation, PlayoffEntry};

/// Where a team finished in the postseason bracket.
///
/// Champion, runner-up and the consolation places are never stored; they are
/// derived from `is_finalist` and `finals_score` on every read.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlayoffOutcome {
    pub id: i64,
    pub team_id: i64,
    pub season_id: i64,
    pub rank: i64,
    pub is_finalist: bool,
    pub semifinal_score: Option<f64>,
    pub finals_score: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
}

impl PlayoffOutcome {
    pub fn to_playoff_entry(&self) -> PlayoffEntry {
        PlayoffEntry {
            team_id: self.team_id,
            seed: self.rank,
            is_finalist: self.is_finalist,
            semifinal_score: self.semifinal_score,
            finals_score: self.finals_score,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NewPlayoffOutcome {
    pub team_id: i64,
    pub season_id: i64,
    pub rank: i64,
    #[serde(default)]
    pub is_finalist: bool,
    pub semifinal_score: Option<f64>,
    pub finals_score: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayoffOutcomePatch {
    pub rank: Option<i64>,
    pub is_finalist: Option<bool>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub semifinal_score: Option<Option<f64>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub finals_score: Option<Option<f64>>,
}

/// Response wrapper for the derived playoff results
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayoffResultsResponse {
    pub season_id: i64,
    pub championship: Championship,
    pub consolation: Consolation,
    pub bracket: Vec<PlayoffEntry>,
}
