use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Season {
    pub id: i64,
    pub year: i64,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewSeason {
    pub year: i64,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct SeasonPatch {
    pub year: Option<i64>,
    pub is_active: Option<bool>,
}
