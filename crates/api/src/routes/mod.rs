//! Route definitions.

pub mod auth;
pub mod comments;
pub mod health;
pub mod news;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                 register (public)
/// /auth/login                    login (public)
///
/// /news                          list (public), create (admin|writer)
/// /news/{id}                     get (public), update/delete (owner or admin)
///
/// /comments                      create (any authenticated)
/// /comments/{id}                 delete (owner or admin)
/// /comments/news/{news_id}       list by article (public)
///
/// /users                         list (admin)
/// /users/{id}/role               update role (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/news", news::router())
        .nest("/comments", comments::router())
        .nest("/users", users::router())
}
