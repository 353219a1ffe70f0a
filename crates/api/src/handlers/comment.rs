//! Handlers for the `/comments` resource.
//!
//! Comment rows carry a snapshot of the author's display name and role
//! taken at posting time. Later profile or role changes do not touch
//! historic comments.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use newswire_core::error::CoreError;
use newswire_core::policy::{can_create, can_mutate, ResourceKind};
use newswire_core::types::DbId;
use newswire_db::models::comment::{Comment, CreateComment};
use newswire_db::repositories::{CommentRepo, NewsRepo, UserRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Request body for `POST /comments`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    pub news_id: DbId,
    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,
}

/// Response body for comment creation.
#[derive(Debug, Serialize)]
pub struct CreateCommentResponse {
    pub message: &'static str,
    #[serde(rename = "commentId")]
    pub comment_id: DbId,
}

/// GET /api/comments/news/{news_id}
///
/// Public. Returns the article's comments newest-first; an unknown or
/// deleted article yields an empty array, matching the post-cascade state.
pub async fn list_by_news(
    State(state): State<AppState>,
    Path(news_id): Path<DbId>,
) -> AppResult<Json<Vec<Comment>>> {
    let comments = CommentRepo::list_by_news(&state.pool, news_id).await?;
    Ok(Json(comments))
}

/// POST /api/comments (any authenticated role)
///
/// The actor's current display name and role are read back from the users
/// table and stored into the row as the snapshot.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(actor): RequireAuth,
    Json(input): Json<CreateCommentRequest>,
) -> AppResult<(StatusCode, Json<CreateCommentResponse>)> {
    input.validate()?;

    if !can_create(actor.role, ResourceKind::Comment) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Role may not comment".into(),
        )));
    }

    if NewsRepo::find_by_id(&state.pool, input.news_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "News",
            id: input.news_id,
        }));
    }

    let user = UserRepo::find_by_id(&state.pool, actor.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let comment = CommentRepo::create(
        &state.pool,
        &CreateComment {
            content: input.content,
            news_id: input.news_id,
            user_id: user.id,
            user_name: user.name,
            user_role: user.role,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateCommentResponse {
            message: "Comment created successfully",
            comment_id: comment.id,
        }),
    ))
}

/// DELETE /api/comments/{id} (owner or admin)
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(actor): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let comment = CommentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }))?;

    if !can_mutate(actor.role, actor.user_id, comment.user_id) {
        return Err(AppError::Core(CoreError::Forbidden("Access denied".into())));
    }

    let deleted = CommentRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }));
    }

    Ok(Json(MessageResponse::new("Comment deleted successfully")))
}
