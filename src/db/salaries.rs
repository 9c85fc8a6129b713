use sqlx::sqlite::SqlitePool;

use crate::models::{NewPlayer, NewPlayerSalary, Player, PlayerPatch, PlayerSalary, PlayerSalaryPatch};

// Player queries
pub async fn get_all_players(pool: &SqlitePool) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT * FROM players ORDER BY name"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_player_by_id(pool: &SqlitePool, player_id: i64) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT * FROM players WHERE id = ?"#
    )
    .bind(player_id)
    .fetch_optional(pool)
    .await
}

pub async fn create_player(pool: &SqlitePool, player: &NewPlayer) -> Result<Player, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"INSERT INTO players (name, position) VALUES (?, ?) RETURNING *"#
    )
    .bind(&player.name)
    .bind(&player.position)
    .fetch_one(pool)
    .await
}

pub async fn update_player(pool: &SqlitePool, player_id: i64, patch: &PlayerPatch) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"UPDATE players
           SET name = COALESCE(?, name),
               position = CASE WHEN ? THEN ? ELSE position END,
               updated_at = CURRENT_TIMESTAMP
           WHERE id = ?
           RETURNING *"#
    )
    .bind(&patch.name)
    .bind(patch.position.is_some())
    .bind(patch.position.clone().flatten())
    .bind(player_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_player(pool: &SqlitePool, player_id: i64) -> Result<bool, sqlx::Error> {
    super::delete_by_id(pool, "players", player_id).await
}

// Salary queries
pub async fn get_all_salaries(pool: &SqlitePool) -> Result<Vec<PlayerSalary>, sqlx::Error> {
    sqlx::query_as::<_, PlayerSalary>(
        r#"SELECT * FROM player_salaries ORDER BY team_id, player_id"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_salary_by_id(pool: &SqlitePool, salary_id: i64) -> Result<Option<PlayerSalary>, sqlx::Error> {
    sqlx::query_as::<_, PlayerSalary>(
        r#"SELECT * FROM player_salaries WHERE id = ?"#
    )
    .bind(salary_id)
    .fetch_optional(pool)
    .await
}

pub async fn create_salary(pool: &SqlitePool, salary: &NewPlayerSalary) -> Result<PlayerSalary, sqlx::Error> {
    sqlx::query_as::<_, PlayerSalary>(
        r#"INSERT INTO player_salaries
               (player_id, team_id, salary_2025, salary_2026, salary_2027, salary_2028,
                salary_2029, franchise_tag, acquired_via_waivers, rookie_draft_round)
           VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
           RETURNING *"#
    )
    .bind(salary.player_id)
    .bind(salary.team_id)
    .bind(&salary.salary_2025)
    .bind(&salary.salary_2026)
    .bind(&salary.salary_2027)
    .bind(&salary.salary_2028)
    .bind(&salary.salary_2029)
    .bind(salary.franchise_tag)
    .bind(salary.acquired_via_waivers)
    .bind(salary.rookie_draft_round)
    .fetch_one(pool)
    .await
}

pub async fn update_salary(
    pool: &SqlitePool,
    salary_id: i64,
    patch: &PlayerSalaryPatch,
) -> Result<Option<PlayerSalary>, sqlx::Error> {
    sqlx::query_as::<_, PlayerSalary>(
        r#"UPDATE player_salaries
           SET player_id = COALESCE(?, player_id),
               team_id = CASE WHEN ? THEN ? ELSE team_id END,
               salary_2025 = CASE WHEN ? THEN ? ELSE salary_2025 END,
               salary_2026 = CASE WHEN ? THEN ? ELSE salary_2026 END,
               salary_2027 = CASE WHEN ? THEN ? ELSE salary_2027 END,
               salary_2028 = CASE WHEN ? THEN ? ELSE salary_2028 END,
               salary_2029 = CASE WHEN ? THEN ? ELSE salary_2029 END,
               franchise_tag = COALESCE(?, franchise_tag),
               acquired_via_waivers = COALESCE(?, acquired_via_waivers),
               rookie_draft_round = CASE WHEN ? THEN ? ELSE rookie_draft_round END,
               updated_at = CURRENT_TIMESTAMP
           WHERE id = ?
           RETURNING *"#
    )
    .bind(patch.player_id)
    .bind(patch.team_id.is_some())
    .bind(patch.team_id.flatten())
    .bind(patch.salary_2025.is_some())
    .bind(patch.salary_2025.clone().flatten())
    .bind(patch.salary_2026.is_some())
    .bind(patch.salary_2026.clone().flatten())
    .bind(patch.salary_2027.is_some())
    .bind(patch.salary_2027.clone().flatten())
    .bind(patch.salary_2028.is_some())
    .bind(patch.salary_2028.clone().flatten())
    .bind(patch.salary_2029.is_some())
    .bind(patch.salary_2029.clone().flatten())
    .bind(patch.franchise_tag)
    .bind(patch.acquired_via_waivers)
    .bind(patch.rookie_draft_round.is_some())
    .bind(patch.rookie_draft_round.flatten())
    .bind(salary_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_salary(pool: &SqlitePool, salary_id: i64) -> Result<bool, sqlx::Error> {
    super::delete_by_id(pool, "player_salaries", salary_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_team, test_pool};
    use crate::models::NewTeam;

    #[tokio::test]
    async fn test_explicit_null_releases_player_to_free_agency() {
        let pool = test_pool().await;
        let team = create_team(&pool, &NewTeam {
            name: "Waiver Wire Warriors".to_string(),
            governor: "Jo".to_string(),
        })
        .await
        .unwrap();
        let player = create_player(&pool, &NewPlayer {
            name: "Backup Tight End".to_string(),
            position: Some("TE".to_string()),
        })
        .await
        .unwrap();
        let salary = create_salary(&pool, &NewPlayerSalary {
            player_id: player.id,
            team_id: Some(team.id),
            salary_2025: Some("$5".to_string()),
            salary_2026: Some("$6".to_string()),
            salary_2027: None,
            salary_2028: None,
            salary_2029: None,
            franchise_tag: false,
            acquired_via_waivers: true,
            rookie_draft_round: None,
        })
        .await
        .unwrap();

        // Omitted fields are left alone.
        let raise: PlayerSalaryPatch = serde_json::from_str(r#"{"salary_2026": "$8"}"#).unwrap();
        let raised = update_salary(&pool, salary.id, &raise).await.unwrap().unwrap();
        assert_eq!(raised.team_id, Some(team.id));
        assert_eq!(raised.salary_2026.as_deref(), Some("$8"));
        assert_eq!(raised.salary_2025.as_deref(), Some("$5"));

        let release: PlayerSalaryPatch = serde_json::from_str(r#"{"team_id": null}"#).unwrap();
        let released = update_salary(&pool, salary.id, &release).await.unwrap().unwrap();
        assert_eq!(released.team_id, None);
        assert!(released.acquired_via_waivers);
    }
}
