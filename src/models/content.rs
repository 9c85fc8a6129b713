use serde::{Deserialize, Serialize};

/// An uploaded image or video. The file itself lives with the storage
/// provider; only its public URL is kept here.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Media {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub media_type: String,
    pub caption: Option<String>,
    pub season_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

fn default_media_type() -> String {
    "image".to_string()
}

#[derive(Debug, Deserialize)]
pub struct NewMedia {
    pub title: String,
    pub url: String,
    #[serde(default = "default_media_type")]
    pub media_type: String,
    pub caption: Option<String>,
    pub season_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MediaPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub media_type: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub caption: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub season_id: Option<Option<i64>>,
}

/// Free-form page content (lore, rules, recaps). `content` is stored as-is.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Page {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewPage {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PagePatch {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}
