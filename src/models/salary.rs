use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub position: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    pub position: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayerPatch {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub position: Option<Option<String>>,
}

/// A player's contract. `team_id` of `None` means free agent.
///
/// Salaries are kept as the strings the admins typed in (`"$25"`, `"12.5"`).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlayerSalary {
    pub id: i64,
    pub player_id: i64,
    pub team_id: Option<i64>,
    pub salary_2025: Option<String>,
    pub salary_2026: Option<String>,
    pub salary_2027: Option<String>,
    pub salary_2028: Option<String>,
    pub salary_2029: Option<String>,
    pub franchise_tag: bool,
    pub acquired_via_waivers: bool,
    pub rookie_draft_round: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

impl PlayerSalary {
    pub fn salary_for(&self, year: i32) -> Option<&str> {
        let salary = match year {
            2025 => &self.salary_2025,
            2026 => &self.salary_2026,
            2027 => &self.salary_2027,
            2028 => &self.salary_2028,
            2029 => &self.salary_2029,
            _ => return None,
        };
        salary.as_deref()
    }
}

#[derive(Debug, Deserialize)]
pub struct NewPlayerSalary {
    pub player_id: i64,
    pub team_id: Option<i64>,
    pub salary_2025: Option<String>,
    pub salary_2026: Option<String>,
    pub salary_2027: Option<String>,
    pub salary_2028: Option<String>,
    pub salary_2029: Option<String>,
    #[serde(default)]
    pub franchise_tag: bool,
    #[serde(default)]
    pub acquired_via_waivers: bool,
    pub rookie_draft_round: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayerSalaryPatch {
    pub player_id: Option<i64>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub team_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub salary_2025: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub salary_2026: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub salary_2027: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub salary_2028: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub salary_2029: Option<Option<String>>,
    pub franchise_tag: Option<bool>,
    pub acquired_via_waivers: Option<bool>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub rookie_draft_round: Option<Option<i64>>,
}
