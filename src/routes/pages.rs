use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;

use crate::auth::Session;
use crate::db;
use crate::error::ApiError;
use crate::models::{NewPage, Page, PagePatch};

// GET /api/pages - List content pages
pub async fn get_pages(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Page>>, ApiError> {
    let pages = db::get_all_pages(&pool).await?;
    Ok(Json(pages))
}

// GET /api/pages/{id} - Get page by ID
pub async fn get_page_by_id(
    State(pool): State<SqlitePool>,
    Path(page_id): Path<i64>,
) -> Result<Json<Page>, ApiError> {
    let page = db::get_page_by_id(&pool, page_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(page))
}

// GET /api/pages/slug/{slug} - Get page by slug, e.g. "lore" or "rules"
pub async fn get_page_by_slug(
    State(pool): State<SqlitePool>,
    Path(slug): Path<String>,
) -> Result<Json<Page>, ApiError> {
    let page = db::get_page_by_slug(&pool, &slug)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(page))
}

// POST /api/pages - Create a page
pub async fn create_page(
    State(pool): State<SqlitePool>,
    session: Session,
    Json(payload): Json<NewPage>,
) -> Result<(StatusCode, Json<Page>), ApiError> {
    session.require_admin()?;
    let page = db::create_page(&pool, &payload).await?;
    tracing::info!("Created page {} ({})", page.id, page.slug);

    Ok((StatusCode::CREATED, Json(page)))
}

// PATCH /api/pages/{id} - Update a page
pub async fn update_page(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(page_id): Path<i64>,
    Json(patch): Json<PagePatch>,
) -> Result<Json<Page>, ApiError> {
    session.require_admin()?;
    let page = db::update_page(&pool, page_id, &patch)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!("Updated page {}", page_id);

    Ok(Json(page))
}

// DELETE /api/pages/{id} - Delete a page
pub async fn delete_page(
    State(pool): State<SqlitePool>,
    session: Session,
    Path(page_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    session.require_admin()?;
    if !db::delete_page(&pool, page_id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!("Deleted page {}", page_id);

    Ok(StatusCode::NO_CONTENT)
}
