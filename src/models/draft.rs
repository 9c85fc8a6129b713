use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RookiePlayer {
    pub id: i64,
    pub name: String,
    pub position: Option<String>,
    pub college: Option<String>,
    pub draft_year: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewRookiePlayer {
    pub name: String,
    pub position: Option<String>,
    pub college: Option<String>,
    pub draft_year: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct RookiePlayerPatch {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub position: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub college: Option<Option<String>>,
    pub draft_year: Option<i64>,
}

/// A slot on the rookie draft board.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DraftPick {
    pub id: i64,
    pub draft_year: i64,
    pub round: i64,
    pub pick_number: i64,
    pub team_id: Option<i64>,
    pub selected_player_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewDraftPick {
    pub draft_year: i64,
    pub round: i64,
    pub pick_number: i64,
    pub team_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DraftPickPatch {
    pub draft_year: Option<i64>,
    pub round: Option<i64>,
    pub pick_number: Option<i64>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub team_id: Option<Option<i64>>,
}

/// Body for assigning (or clearing) the rookie taken with a pick
#[derive(Debug, Deserialize)]
pub struct DraftSelection {
    pub player_id: Option<i64>,
}

/// Response wrapper for the draft board
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftBoardResponse {
    pub draft_year: i64,
    pub picks: Vec<DraftPick>,
    pub available: Vec<RookiePlayer>,
}
