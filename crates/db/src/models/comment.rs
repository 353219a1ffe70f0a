//! Comment entity model and DTOs.

use newswire_core::roles::Role;
use newswire_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Comment row from the `comments` table.
///
/// `user_name` and `user_role` are snapshots of the author's profile at the
/// moment the comment was posted. They are never resynchronized.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub id: DbId,
    pub content: String,
    pub news_id: DbId,
    pub user_id: DbId,
    pub user_name: String,
    pub user_role: Role,
    pub created_at: Timestamp,
}

/// DTO for inserting a comment, snapshot fields included.
#[derive(Debug)]
pub struct CreateComment {
    pub content: String,
    pub news_id: DbId,
    pub user_id: DbId,
    pub user_name: String,
    pub user_role: Role,
}
