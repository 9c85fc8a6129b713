use sqlx::sqlite::SqlitePool;

use crate::models::{Media, MediaPatch, NewMedia, NewPage, Page, PagePatch};

// Media queries
pub async fn get_all_media(pool: &SqlitePool) -> Result<Vec<Media>, sqlx::Error> {
    sqlx::query_as::<_, Media>(
        r#"SELECT * FROM media ORDER BY created_at DESC, id DESC"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_media_by_id(pool: &SqlitePool, media_id: i64) -> Result<Option<Media>, sqlx::Error> {
    sqlx::query_as::<_, Media>(
        r#"SELECT * FROM media WHERE id = ?"#
    )
    .bind(media_id)
    .fetch_optional(pool)
    .await
}

pub async fn get_media_by_season(pool: &SqlitePool, season_id: i64) -> Result<Vec<Media>, sqlx::Error> {
    sqlx::query_as::<_, Media>(
        r#"SELECT * FROM media WHERE season_id = ? ORDER BY created_at DESC, id DESC"#
    )
    .bind(season_id)
    .fetch_all(pool)
    .await
}

pub async fn create_media(pool: &SqlitePool, media: &NewMedia) -> Result<Media, sqlx::Error> {
    sqlx::query_as::<_, Media>(
        r#"INSERT INTO media (title, url, media_type, caption, season_id)
           VALUES (?, ?, ?, ?, ?)
           RETURNING *"#
    )
    .bind(&media.title)
    .bind(&media.url)
    .bind(&media.media_type)
    .bind(&media.caption)
    .bind(media.season_id)
    .fetch_one(pool)
    .await
}

pub async fn update_media(pool: &SqlitePool, media_id: i64, patch: &MediaPatch) -> Result<Option<Media>, sqlx::Error> {
    sqlx::query_as::<_, Media>(
        r#"UPDATE media
           SET title = COALESCE(?, title),
               url = COALESCE(?, url),
               media_type = COALESCE(?, media_type),
               caption = CASE WHEN ? THEN ? ELSE caption END,
               season_id = CASE WHEN ? THEN ? ELSE season_id END,
               updated_at = CURRENT_TIMESTAMP
           WHERE id = ?
           RETURNING *"#
    )
    .bind(&patch.title)
    .bind(&patch.url)
    .bind(&patch.media_type)
    .bind(patch.caption.is_some())
    .bind(patch.caption.clone().flatten())
    .bind(patch.season_id.is_some())
    .bind(patch.season_id.flatten())
    .bind(media_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_media(pool: &SqlitePool, media_id: i64) -> Result<bool, sqlx::Error> {
    super::delete_by_id(pool, "media", media_id).await
}

// Page queries
pub async fn get_all_pages(pool: &SqlitePool) -> Result<Vec<Page>, sqlx::Error> {
    sqlx::query_as::<_, Page>(
        r#"SELECT * FROM pages ORDER BY slug"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_page_by_id(pool: &SqlitePool, page_id: i64) -> Result<Option<Page>, sqlx::Error> {
    sqlx::query_as::<_, Page>(
        r#"SELECT * FROM pages WHERE id = ?"#
    )
    .bind(page_id)
    .fetch_optional(pool)
    .await
}

pub async fn get_page_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<Page>, sqlx::Error> {
    sqlx::query_as::<_, Page>(
        r#"SELECT * FROM pages WHERE slug = ?"#
    )
    .bind(slug)
    .fetch_optional(pool)
    .await
}

pub async fn create_page(pool: &SqlitePool, page: &NewPage) -> Result<Page, sqlx::Error> {
    sqlx::query_as::<_, Page>(
        r#"INSERT INTO pages (slug, title, content) VALUES (?, ?, ?) RETURNING *"#
    )
    .bind(&page.slug)
    .bind(&page.title)
    .bind(&page.content)
    .fetch_one(pool)
    .await
}

pub async fn update_page(pool: &SqlitePool, page_id: i64, patch: &PagePatch) -> Result<Option<Page>, sqlx::Error> {
    sqlx::query_as::<_, Page>(
        r#"UPDATE pages
           SET slug = COALESCE(?, slug),
               title = COALESCE(?, title),
               content = COALESCE(?, content),
               updated_at = CURRENT_TIMESTAMP
           WHERE id = ?
           RETURNING *"#
    )
    .bind(&patch.slug)
    .bind(&patch.title)
    .bind(&patch.content)
    .bind(page_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_page(pool: &SqlitePool, page_id: i64) -> Result<bool, sqlx::Error> {
    super::delete_by_id(pool, "pages", page_id).await
}
