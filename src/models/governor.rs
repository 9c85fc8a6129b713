use serde::{Deserialize, Serialize};

use crate::league::CareerRecord;

/// Career totals used for the Historical Dominance Index leaderboard.
/// Historical seasons are entered by hand rather than recomputed.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct GovernorCareer {
    pub id: i64,
    pub governor: String,
    pub championships: i64,
    pub playoff_wins: i64,
    pub wins: i64,
    pub losses: i64,
    pub average_finish: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl GovernorCareer {
    pub fn to_career_record(&self) -> CareerRecord {
        CareerRecord {
            governor_id: self.id,
            governor: self.governor.clone(),
            championships: self.championships,
            playoff_wins: self.playoff_wins,
            wins: self.wins,
            losses: self.losses,
            average_finish: self.average_finish,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NewGovernorCareer {
    pub governor: String,
    #[serde(default)]
    pub championships: i64,
    #[serde(default)]
    pub playoff_wins: i64,
    #[serde(default)]
    pub wins: i64,
    #[serde(default)]
    pub losses: i64,
    pub average_finish: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct GovernorCareerPatch {
    pub governor: Option<String>,
    pub championships: Option<i64>,
    pub playoff_wins: Option<i64>,
    pub wins: Option<i64>,
    pub losses: Option<i64>,
    pub average_finish: Option<f64>,
}
