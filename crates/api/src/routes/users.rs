//! Route definitions for the `/users` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`. All admin-only.
///
/// ```text
/// GET /             -> list
/// PUT /{id}/role    -> update_role
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list))
        .route("/{id}/role", put(user::update_role))
}
