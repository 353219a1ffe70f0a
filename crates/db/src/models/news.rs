//! News entity model and DTOs.

use newswire_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Plain news row from the `news` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct News {
    pub id: DbId,
    pub title: String,
    pub content: String,
    /// Stored filename of the uploaded image, served under `/uploads/`.
    pub image: Option<String>,
    pub author_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// News row joined with the author's current display name.
///
/// Unlike comment snapshots, the author name here is a live join -- list and
/// detail responses always show the author's current profile name.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct NewsWithAuthor {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub author_id: DbId,
    pub author_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a news row.
#[derive(Debug)]
pub struct CreateNews {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub author_id: DbId,
}

/// DTO for a partial news update. `None` fields keep their prior value.
#[derive(Debug, Default)]
pub struct UpdateNews {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}
