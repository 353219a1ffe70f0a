//! Handlers for the `/news` resource.
//!
//! Create and update accept multipart forms (`title`, `content`, optional
//! `image`). Mutations resolve existence before ownership so a missing row
//! is always 404, never 403.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use newswire_core::error::CoreError;
use newswire_core::pagination::{clamp_limit, normalize_page, total_pages};
use newswire_core::policy::{can_create, can_mutate, ResourceKind};
use newswire_core::types::DbId;
use newswire_db::models::news::{CreateNews, News, NewsWithAuthor, UpdateNews};
use newswire_db::repositories::NewsRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireWriter;
use crate::query::NewsListParams;
use crate::response::MessageResponse;
use crate::state::AppState;
use crate::uploads::store_image;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response body for the paginated listing.
#[derive(Debug, Serialize)]
pub struct NewsListResponse {
    pub news: Vec<NewsWithAuthor>,
    pub total: i64,
    pub page: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

/// Response body for article creation.
#[derive(Debug, Serialize)]
pub struct CreateNewsResponse {
    pub message: &'static str,
    #[serde(rename = "newsId")]
    pub news_id: DbId,
}

// ---------------------------------------------------------------------------
// Multipart form parsing
// ---------------------------------------------------------------------------

/// Fields extracted from the multipart news form. All optional at the parse
/// stage; create/update apply their own presence rules.
#[derive(Default)]
struct NewsForm {
    title: Option<String>,
    content: Option<String>,
    /// `(content_type, bytes)` of the uploaded image, if any.
    image: Option<(String, Vec<u8>)>,
}

async fn parse_news_form(mut multipart: Multipart) -> Result<NewsForm, AppError> {
    let mut form = NewsForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "title" => {
                form.title = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            "content" => {
                form.content = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            "image" => {
                let content_type = field
                    .content_type()
                    .ok_or_else(|| {
                        AppError::Core(CoreError::Validation(
                            "Image field is missing a content type".into(),
                        ))
                    })?
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                form.image = Some((content_type, bytes.to_vec()));
            }
            // Unknown fields are ignored rather than rejected.
            _ => {}
        }
    }

    Ok(form)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/news
///
/// Public paginated listing, newest first, with optional case-insensitive
/// substring search over title and content.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<NewsListParams>,
) -> AppResult<Json<NewsListResponse>> {
    let page = normalize_page(params.page);
    let limit = clamp_limit(params.limit);

    let (news, total) = NewsRepo::list(&state.pool, page, limit, params.search.as_deref()).await?;

    Ok(Json(NewsListResponse {
        news,
        total,
        page,
        total_pages: total_pages(total, limit),
    }))
}

/// GET /api/news/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<NewsWithAuthor>> {
    let news = NewsRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "News", id }))?;
    Ok(Json(news))
}

/// POST /api/news (role: admin or writer; multipart)
pub async fn create(
    State(state): State<AppState>,
    RequireWriter(actor): RequireWriter,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<CreateNewsResponse>)> {
    if !can_create(actor.role, ResourceKind::News) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Role may not publish news".into(),
        )));
    }

    let form = parse_news_form(multipart).await?;

    let title = form.title.unwrap_or_default();
    let content = form.content.unwrap_or_default();
    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title and content are required".into(),
        )));
    }

    let image = match form.image {
        Some((content_type, bytes)) => {
            Some(store_image(&state.config.upload_dir, &content_type, &bytes).await?)
        }
        None => None,
    };

    let news = NewsRepo::create(
        &state.pool,
        &CreateNews {
            title,
            content,
            image,
            author_id: actor.user_id,
        },
    )
    .await?;

    tracing::info!(news_id = news.id, author_id = actor.user_id, "News created");

    Ok((
        StatusCode::CREATED,
        Json(CreateNewsResponse {
            message: "News created successfully",
            news_id: news.id,
        }),
    ))
}

/// PUT /api/news/{id} (owner or admin; multipart, partial update)
///
/// Absent fields keep their prior values; a new image replaces the stored
/// filename but the old file stays on disk.
pub async fn update(
    State(state): State<AppState>,
    actor: AuthUser,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<News>> {
    let existing = NewsRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "News", id }))?;

    if !can_mutate(actor.role, actor.user_id, existing.author_id) {
        return Err(AppError::Core(CoreError::Forbidden("Access denied".into())));
    }

    let form = parse_news_form(multipart).await?;

    let image = match form.image {
        Some((content_type, bytes)) => {
            Some(store_image(&state.config.upload_dir, &content_type, &bytes).await?)
        }
        None => None,
    };

    let input = UpdateNews {
        title: form.title.filter(|t| !t.trim().is_empty()),
        content: form.content.filter(|c| !c.trim().is_empty()),
        image,
    };

    let updated = NewsRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "News", id }))?;

    Ok(Json(updated))
}

/// DELETE /api/news/{id} (owner or admin)
///
/// Comments on the article are removed by the foreign-key cascade.
pub async fn delete(
    State(state): State<AppState>,
    actor: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let existing = NewsRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "News", id }))?;

    if !can_mutate(actor.role, actor.user_id, existing.author_id) {
        return Err(AppError::Core(CoreError::Forbidden("Access denied".into())));
    }

    let deleted = NewsRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "News", id }));
    }

    tracing::info!(news_id = id, actor_id = actor.user_id, "News deleted");
    Ok(Json(MessageResponse::new("News deleted successfully")))
}
