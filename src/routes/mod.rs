use axum::{
    extract::FromRef,
    routing::{get, post, put},
    Router,
};
use sqlx::sqlite::SqlitePool;

pub mod draft;
pub mod governors;
pub mod health;
pub mod media;
pub mod pages;
pub mod playoffs;
pub mod points;
pub mod rivalries;
pub mod salaries;
pub mod seasons;
pub mod standings;
pub mod teams;

/// Shared handler state. Most handlers only need the pool and extract
/// `State<SqlitePool>` directly.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub admin_token: Option<String>,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        // Root and health
        .route("/", get(|| async { "Fantasy League API - v1.0" }))
        .route("/health", get(health::health_check))

        // Team endpoints
        .route("/api/teams", get(teams::get_teams).post(teams::create_team))
        .route(
            "/api/teams/{id}",
            get(teams::get_team_by_id).patch(teams::update_team).delete(teams::delete_team),
        )

        // Season endpoints
        .route("/api/seasons", get(seasons::get_seasons).post(seasons::create_season))
        .route("/api/seasons/active", get(seasons::get_active_season))
        .route(
            "/api/seasons/{id}",
            get(seasons::get_season_by_id).patch(seasons::update_season).delete(seasons::delete_season),
        )
        .route("/api/seasons/{id}/standings", get(standings::get_standings_by_season))
        .route("/api/seasons/{id}/standings/table", get(standings::get_standings_table))
        .route("/api/seasons/{id}/playoffs", get(playoffs::get_playoff_outcomes_by_season))
        .route("/api/seasons/{id}/playoffs/results", get(playoffs::get_playoff_results))
        .route("/api/seasons/{id}/media", get(media::get_media_by_season))

        // Standings endpoints
        .route("/api/standings", get(standings::get_standings).post(standings::create_standing))
        .route(
            "/api/standings/{id}",
            get(standings::get_standing_by_id)
                .patch(standings::update_standing)
                .delete(standings::delete_standing),
        )

        // Ranking points
        .route("/api/points-table", get(points::get_points_table))
        .route("/api/points/accumulate", post(points::accumulate_points))

        // Playoff endpoints
        .route(
            "/api/playoffs",
            get(playoffs::get_playoff_outcomes).post(playoffs::create_playoff_outcome),
        )
        .route(
            "/api/playoffs/{id}",
            get(playoffs::get_playoff_outcome_by_id)
                .patch(playoffs::update_playoff_outcome)
                .delete(playoffs::delete_playoff_outcome),
        )

        // Player and salary endpoints
        .route("/api/players", get(salaries::get_players).post(salaries::create_player))
        .route(
            "/api/players/{id}",
            get(salaries::get_player_by_id)
                .patch(salaries::update_player)
                .delete(salaries::delete_player),
        )
        .route("/api/salaries", get(salaries::get_salaries).post(salaries::create_salary))
        .route("/api/salaries/payroll", get(salaries::get_payroll))
        .route(
            "/api/salaries/{id}",
            get(salaries::get_salary_by_id)
                .patch(salaries::update_salary)
                .delete(salaries::delete_salary),
        )

        // Media and page endpoints
        .route("/api/media", get(media::get_media).post(media::create_media))
        .route(
            "/api/media/{id}",
            get(media::get_media_by_id).patch(media::update_media).delete(media::delete_media),
        )
        .route("/api/pages", get(pages::get_pages).post(pages::create_page))
        .route("/api/pages/slug/{slug}", get(pages::get_page_by_slug))
        .route(
            "/api/pages/{id}",
            get(pages::get_page_by_id).patch(pages::update_page).delete(pages::delete_page),
        )

        // Rookie draft endpoints
        .route("/api/rookies", get(draft::get_rookies).post(draft::create_rookie))
        .route(
            "/api/rookies/{id}",
            get(draft::get_rookie_by_id).patch(draft::update_rookie).delete(draft::delete_rookie),
        )
        .route("/api/draft/board/{year}", get(draft::get_draft_board))
        .route("/api/draft/picks", get(draft::get_draft_picks).post(draft::create_draft_pick))
        .route(
            "/api/draft/picks/{id}",
            get(draft::get_draft_pick_by_id)
                .patch(draft::update_draft_pick)
                .delete(draft::delete_draft_pick),
        )
        .route("/api/draft/picks/{id}/selection", put(draft::set_draft_selection))

        // Rivalry endpoints
        .route("/api/rivalries", get(rivalries::get_rivalries).post(rivalries::create_rivalry))
        .route(
            "/api/rivalries/{id}",
            get(rivalries::get_rivalry_by_id)
                .patch(rivalries::update_rivalry)
                .delete(rivalries::delete_rivalry),
        )
        .route("/api/rivalries/{id}/record", get(rivalries::get_rivalry_record))
        .route(
            "/api/rivalries/{id}/matchups",
            get(rivalries::get_matchups).post(rivalries::create_matchup),
        )
        .route(
            "/api/matchups/{id}",
            get(rivalries::get_matchup_by_id)
                .patch(rivalries::update_matchup)
                .delete(rivalries::delete_matchup),
        )

        // Governor endpoints
        .route(
            "/api/governors",
            get(governors::get_governor_careers).post(governors::create_governor_career),
        )
        .route("/api/governors/leaderboard", get(governors::get_dominance_leaderboard))
        .route(
            "/api/governors/{id}",
            get(governors::get_governor_career_by_id)
                .patch(governors::update_governor_career)
                .delete(governors::delete_governor_career),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::db;
    use crate::models::{NewDraftPick, NewPlayoffOutcome, NewRookiePlayer, NewSeason, NewStanding, NewTeam};

    const TOKEN: &str = "test-token";

    fn app(pool: SqlitePool) -> Router {
        router().with_state(AppState {
            pool,
            admin_token: Some(TOKEN.to_string()),
        })
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn seed_team(pool: &SqlitePool, n: i64) -> i64 {
        db::create_team(pool, &NewTeam {
            name: format!("Team {n}"),
            governor: format!("Governor {n}"),
        })
        .await
        .unwrap()
        .id
    }

    async fn seed_season(pool: &SqlitePool, year: i64) -> i64 {
        db::create_season(pool, &NewSeason { year, is_active: true })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_standings_table_ranks_and_tiers() {
        let pool = db::test_pool().await;
        let season_id = seed_season(&pool, 2024).await;
        let totals = [172, 160, 155, 150, 140, 130, 120, 110, 100, 90];
        // Insert worst-first with a misleading stored rank.
        for (idx, &points) in totals.iter().enumerate().rev() {
            let team_id = seed_team(&pool, idx as i64 + 1).await;
            db::create_standing(&pool, &NewStanding {
                team_id,
                season_id,
                rank: 1,
                wins: 7,
                losses: 7,
                points_accumulated: points,
                total_points_for: 1500.0,
                average_ppw: 107.1,
                median_ppw: 105.0,
                average_finish: 5.5,
            })
            .await
            .unwrap();
        }

        let uri = format!("/api/seasons/{season_id}/standings/table");
        let (status, body) = send(app(pool), get_request(&uri)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["year"], 2024);
        assert_eq!(body["count"], 10);
        let rows = body["standings"].as_array().unwrap();
        for (idx, row) in rows.iter().enumerate() {
            assert_eq!(row["rank"], idx as u64 + 1);
            assert_eq!(row["totalPoints"], totals[idx]);
            let expected_tier = match idx + 1 {
                1..=4 => "playoff",
                5 => "purgatory",
                _ => "toilet",
            };
            assert_eq!(row["tier"], expected_tier);
            assert_eq!(row["winPercentage"], 0.5);
        }
        assert_eq!(rows[0]["teamName"], "Team 1");
    }

    #[tokio::test]
    async fn test_standings_table_for_missing_season() {
        let pool = db::test_pool().await;
        let (status, body) = send(app(pool), get_request("/api/seasons/99/standings/table")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Resource not found");
    }

    #[tokio::test]
    async fn test_season_scoped_reads_for_missing_season() {
        let pool = db::test_pool().await;
        for resource in ["standings", "playoffs", "playoffs/results", "media"] {
            let uri = format!("/api/seasons/99/{resource}");
            let (status, _) = send(app(pool.clone()), get_request(&uri)).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        }

        // An existing season with no rows is still an empty answer.
        let season_id = seed_season(&pool, 2021).await;
        let (status, body) = send(app(pool), get_request(&format!("/api/seasons/{season_id}/media"))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_writes_require_admin_session() {
        let pool = db::test_pool().await;
        let team = json!({"name": "Sleeper Cells", "governor": "Dana"});

        let (status, _) = send(app(pool.clone()), json_request("POST", "/api/teams", None, team.clone())).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = send(
            app(pool.clone()),
            json_request("POST", "/api/teams", Some("wrong"), team.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = send(app(pool.clone()), json_request("POST", "/api/teams", Some(TOKEN), team)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["name"], "Sleeper Cells");

        let (status, body) = send(app(pool), get_request("/api/teams")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_rows_are_not_found() {
        let pool = db::test_pool().await;

        let (status, _) = send(
            app(pool.clone()),
            json_request("PATCH", "/api/teams/7", Some(TOKEN), json!({"name": "Ghost"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let request = Request::builder()
            .method("DELETE")
            .uri("/api/seasons/7")
            .header("authorization", format!("Bearer {TOKEN}"))
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(app(pool), request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_duplicate_season_year_conflicts() {
        let pool = db::test_pool().await;
        seed_season(&pool, 2023).await;

        let (status, _) = send(
            app(pool),
            json_request("POST", "/api/seasons", Some(TOKEN), json!({"year": 2023})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_playoff_results() {
        let pool = db::test_pool().await;
        let season_id = seed_season(&pool, 2024).await;
        let uri = format!("/api/seasons/{season_id}/playoffs/results");

        let (status, body) = send(app(pool.clone()), get_request(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["championship"]["status"], "noData");
        assert_eq!(body["consolation"]["status"], "noData");

        let rows = [
            (1, true, Some(267.1)),
            (2, true, Some(234.0)),
            (3, false, Some(281.2)),
            (4, false, Some(278.7)),
            (5, false, None),
        ];
        let mut team_ids = Vec::new();
        for (seed, is_finalist, finals_score) in rows {
            let team_id = seed_team(&pool, seed).await;
            team_ids.push(team_id);
            db::create_playoff_outcome(&pool, &NewPlayoffOutcome {
                team_id,
                season_id,
                rank: seed,
                is_finalist,
                semifinal_score: Some(110.0),
                finals_score,
            })
            .await
            .unwrap();
        }

        let (status, body) = send(app(pool), get_request(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["championship"]["status"], "decided");
        assert_eq!(body["championship"]["champion"], team_ids[0]);
        assert_eq!(body["championship"]["runnerUp"], team_ids[1]);
        assert_eq!(body["consolation"]["third"], team_ids[2]);
        assert_eq!(body["consolation"]["fourth"], team_ids[3]);
        assert_eq!(body["bracket"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_too_many_finalists_is_unprocessable() {
        let pool = db::test_pool().await;
        let season_id = seed_season(&pool, 2022).await;
        for seed in 1..=3 {
            let team_id = seed_team(&pool, seed).await;
            db::create_playoff_outcome(&pool, &NewPlayoffOutcome {
                team_id,
                season_id,
                rank: seed,
                is_finalist: true,
                semifinal_score: None,
                finals_score: Some(200.0 + seed as f64),
            })
            .await
            .unwrap();
        }

        let uri = format!("/api/seasons/{season_id}/playoffs/results");
        let (status, body) = send(app(pool), get_request(&uri)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "expected 2 finalists, found 3");
    }

    #[tokio::test]
    async fn test_points_accumulate() {
        let pool = db::test_pool().await;

        let (status, body) = send(
            app(pool.clone()),
            json_request("POST", "/api/points/accumulate", None, json!({"finishes": [1, 2, 6]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pointsAccumulated"], 43);
        assert_eq!(body["weeks"], 3);

        let (status, _) = send(
            app(pool),
            json_request("POST", "/api/points/accumulate", None, json!({"finishes": [1, 11]})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_draft_selection_is_exclusive() {
        let pool = db::test_pool().await;
        let rookie = db::create_rookie(&pool, &NewRookiePlayer {
            name: "Top Prospect".to_string(),
            position: Some("RB".to_string()),
            college: Some("State".to_string()),
            draft_year: 2025,
        })
        .await
        .unwrap();
        let mut pick_ids = Vec::new();
        for pick_number in 1..=2 {
            let pick = db::create_draft_pick(&pool, &NewDraftPick {
                draft_year: 2025,
                round: 1,
                pick_number,
                team_id: None,
            })
            .await
            .unwrap();
            pick_ids.push(pick.id);
        }

        let first = format!("/api/draft/picks/{}/selection", pick_ids[0]);
        let second = format!("/api/draft/picks/{}/selection", pick_ids[1]);
        let selection = json!({"player_id": rookie.id});

        let (status, body) = send(app(pool.clone()), json_request("PUT", &first, Some(TOKEN), selection.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["selected_player_id"], rookie.id);

        let (status, _) = send(app(pool.clone()), json_request("PUT", &second, Some(TOKEN), selection)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, body) = send(app(pool.clone()), get_request("/api/draft/board/2025")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["picks"].as_array().unwrap().len(), 2);
        assert!(body["available"].as_array().unwrap().is_empty());

        // Clearing the pick returns the rookie to the pool.
        let (status, _) = send(
            app(pool.clone()),
            json_request("PUT", &first, Some(TOKEN), json!({"player_id": null})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let (_, body) = send(app(pool), get_request("/api/draft/board/2025")).await;
        assert_eq!(body["available"][0]["id"], rookie.id);
    }

    #[tokio::test]
    async fn test_draft_selection_rejects_other_draft_class() {
        let pool = db::test_pool().await;
        let rookie = db::create_rookie(&pool, &NewRookiePlayer {
            name: "Last Year's Sleeper".to_string(),
            position: Some("WR".to_string()),
            college: None,
            draft_year: 2024,
        })
        .await
        .unwrap();
        let pick = db::create_draft_pick(&pool, &NewDraftPick {
            draft_year: 2025,
            round: 1,
            pick_number: 1,
            team_id: None,
        })
        .await
        .unwrap();

        let uri = format!("/api/draft/picks/{}/selection", pick.id);
        let (status, body) = send(
            app(pool.clone()),
            json_request("PUT", &uri, Some(TOKEN), json!({"player_id": rookie.id})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["message"],
            format!("player {} is in the 2024 class, pick {} is for 2025", rookie.id, pick.id)
        );

        let (_, body) = send(app(pool), get_request("/api/draft/board/2025")).await;
        assert!(body["picks"][0]["selected_player_id"].is_null());
        assert!(body["available"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rivalry_record_is_counted_from_matchups() {
        let pool = db::test_pool().await;

        let (status, rivalry) = send(
            app(pool.clone()),
            json_request(
                "POST",
                "/api/rivalries",
                Some(TOKEN),
                json!({"name": "The Feud", "team1_name": "Pat", "team2_name": "Lee"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let rivalry_id = rivalry["id"].as_i64().unwrap();

        let matchups_uri = format!("/api/rivalries/{rivalry_id}/matchups");
        for (year, s1, s2, winner) in [(2021, 120.0, 110.0, "team1"), (2022, 90.5, 140.0, "team2"), (2023, 133.3, 99.9, "team1")] {
            let (status, _) = send(
                app(pool.clone()),
                json_request(
                    "POST",
                    &matchups_uri,
                    Some(TOKEN),
                    json!({"season_year": year, "team1_score": s1, "team2_score": s2, "winner": winner}),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, body) = send(app(pool), get_request(&format!("/api/rivalries/{rivalry_id}/record"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["record"]["team1Wins"], 2);
        assert_eq!(body["record"]["team2Wins"], 1);
        assert_eq!(body["record"]["leader"], "team1");
        assert_eq!(body["matchups"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_active_season_prefers_latest_year() {
        let pool = db::test_pool().await;

        let (status, _) = send(app(pool.clone()), get_request("/api/seasons/active")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        seed_season(&pool, 2023).await;
        seed_season(&pool, 2024).await;
        let (status, body) = send(app(pool), get_request("/api/seasons/active")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["year"], 2024);
    }

    #[tokio::test]
    async fn test_health_reports_database() {
        let pool = db::test_pool().await;
        let (status, body) = send(app(pool), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"], "up");
    }

    #[tokio::test]
    async fn test_payroll_skips_free_agents() {
        let pool = db::test_pool().await;
        let team_id = seed_team(&pool, 1).await;

        for (name, team, salary) in [("Starter", json!(team_id), "$25"), ("Vet", json!(team_id), "12.5"), ("Cut", Value::Null, "$40")] {
            let (status, player) = send(
                app(pool.clone()),
                json_request("POST", "/api/players", Some(TOKEN), json!({"name": name})),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);

            let (status, _) = send(
                app(pool.clone()),
                json_request(
                    "POST",
                    "/api/salaries",
                    Some(TOKEN),
                    json!({"player_id": player["id"], "team_id": team, "salary_2025": salary}),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, body) = send(app(pool), get_request("/api/salaries/payroll")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["franchiseTagSalary"], 100.0);
        let teams = body["teams"].as_array().unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0]["teamName"], "Team 1");
        assert_eq!(teams[0]["totals"][0]["year"], 2025);
        assert_eq!(teams[0]["totals"][0]["total"], 37.5);
    }

    #[tokio::test]
    async fn test_negative_counts_are_unprocessable() {
        let pool = db::test_pool().await;
        let career = json!({"governor": "Robin", "wins": 5, "losses": -3, "average_finish": 4.0});
        let (status, _) = send(app(pool.clone()), json_request("POST", "/api/governors", Some(TOKEN), career)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let career = json!({"governor": "Robin", "wins": 5, "losses": 3, "average_finish": 12.0});
        let (status, _) = send(app(pool.clone()), json_request("POST", "/api/governors", Some(TOKEN), career)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let season_id = seed_season(&pool, 2024).await;
        let team_id = seed_team(&pool, 1).await;
        let standing = json!({"team_id": team_id, "season_id": season_id, "rank": 1, "wins": -1});
        let (status, _) = send(app(pool.clone()), json_request("POST", "/api/standings", Some(TOKEN), standing)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (_, body) = send(app(pool), get_request("/api/governors")).await;
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dominance_leaderboard() {
        let pool = db::test_pool().await;
        for (governor, championships) in [("Casey", 0), ("Morgan", 2)] {
            let (status, _) = send(
                app(pool.clone()),
                json_request(
                    "POST",
                    "/api/governors",
                    Some(TOKEN),
                    json!({
                        "governor": governor,
                        "championships": championships,
                        "playoff_wins": 3,
                        "wins": 50,
                        "losses": 50,
                        "average_finish": 5.0
                    }),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, body) = send(app(pool), get_request("/api/governors/leaderboard")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["governor"], "Morgan");
        assert_eq!(body[0]["rank"], 1);
        assert_eq!(body[1]["governor"], "Casey");
    }
}
