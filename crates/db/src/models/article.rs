//! Article entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use webblog_core::article::PLACEHOLDER_IMAGE_URL;
use webblog_core::types::{DbId, Timestamp};

/// A row from the `articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    /// Markdown body, arbitrary length.
    pub content: String,
    pub image_url: Option<String>,
    /// Set at creation; no update path touches it.
    pub published_at: Timestamp,
    /// Monotonically incremented by the read-tracking endpoint only.
    pub read_count: i64,
    /// Lowercase, de-duplicated, first-occurrence order.
    pub tags: Vec<String>,
    pub author: String,
}

impl Article {
    /// API-facing view: responses never carry a null image, the placeholder
    /// is substituted instead.
    pub fn with_placeholder_image(mut self) -> Self {
        if self.image_url.is_none() {
            self.image_url = Some(PLACEHOLDER_IMAGE_URL.to_string());
        }
        self
    }
}

/// DTO for creating an article.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArticle {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: Option<String>,
}

/// DTO for a full update (PUT). Title and content are required;
/// a missing `image_url` clears the column, a missing `author` keeps it.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateArticle {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: Option<String>,
}

/// DTO for a partial update (PATCH). All fields are optional; only
/// provided fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchArticle {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,
}
