//! Route definitions for the `/comments` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::comment;
use crate::state::AppState;

/// Routes mounted at `/comments`.
///
/// ```text
/// POST   /                  -> create (any authenticated)
/// DELETE /{id}              -> delete (owner or admin)
/// GET    /news/{news_id}    -> list_by_news (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(comment::create))
        .route("/{id}", axum::routing::delete(comment::delete))
        .route("/news/{news_id}", get(comment::list_by_news))
}
