use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use sqlx::sqlite::SqlitePool;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: &'static str,
    timestamp: i64,
}

/// Liveness plus a round trip to the database.
pub async fn health_check(State(pool): State<SqlitePool>) -> (StatusCode, Json<HealthResponse>) {
    let (status, database) = match sqlx::query("SELECT 1").execute(&pool).await {
        Ok(_) => (StatusCode::OK, "up"),
        Err(e) => {
            tracing::error!("Health check could not reach the database: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "down")
        }
    };

    let response = HealthResponse {
        status: if status == StatusCode::OK { "ok" } else { "degraded" },
        database,
        timestamp: chrono::Utc::now().timestamp(),
    };

    (status, Json(response))
}
