//! Data access for every league entity.
//!
//! Lookups by id return `Option`, deletes return whether a row was removed;
//! the handlers turn the empty cases into `NotFound`.

use sqlx::sqlite::SqlitePool;

mod content;
mod draft;
mod governors;
mod playoffs;
mod rivalries;
mod salaries;
mod seasons;
mod standings;
mod teams;

pub use content::*;
pub use draft::*;
pub use governors::*;
pub use playoffs::*;
pub use rivalries::*;
pub use salaries::*;
pub use seasons::*;
pub use standings::*;
pub use teams::*;

/// Connect to the league database and bring the schema up to date.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePool::connect(database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(pool)
}

/// Single-connection in-memory database with the schema applied.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations apply");
    pool
}

async fn delete_by_id(pool: &SqlitePool, table: &'static str, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(&format!("DELETE FROM {table} WHERE id = ?"))
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
