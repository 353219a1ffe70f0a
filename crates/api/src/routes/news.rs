//! Route definitions for the `/news` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use newswire_core::upload::MAX_UPLOAD_BYTES;

use crate::handlers::news;
use crate::state::AppState;

/// Routes mounted at `/news`.
///
/// ```text
/// GET    /       -> list (public)
/// POST   /       -> create (admin|writer, multipart)
/// GET    /{id}   -> get_by_id (public)
/// PUT    /{id}   -> update (owner or admin, multipart)
/// DELETE /{id}   -> delete (owner or admin)
/// ```
pub fn router() -> Router<AppState> {
    // Body limit sits above the image cap so oversized uploads reach the
    // MIME/size validation and get a clean 400 instead of a 413.
    Router::new()
        .route("/", get(news::list).post(news::create))
        .route(
            "/{id}",
            get(news::get_by_id)
                .put(news::update)
                .delete(news::delete),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 64 * 1024))
}
