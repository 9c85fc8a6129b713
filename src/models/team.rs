use serde::{Deserialize, Serialize};

/// A fantasy franchise and the governor who runs it.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub governor: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewTeam {
    pub name: String,
    pub governor: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamPatch {
    pub name: Option<String>,
    pub governor: Option<String>,
}
