//! Handlers for the `/users` resource (admin only).

use axum::extract::{Path, State};
use axum::Json;
use newswire_core::error::CoreError;
use newswire_core::policy::{can_create, ResourceKind};
use newswire_core::roles::Role;
use newswire_core::types::DbId;
use newswire_db::models::user::UserResponse;
use newswire_db::repositories::UserRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Request body for `PUT /users/{id}/role`.
#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    /// Raw role string; parsed against the closed enumeration so unknown
    /// values are a 400.
    pub role: String,
}

/// GET /api/users (admin only)
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_actor): RequireAdmin,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}

/// PUT /api/users/{id}/role (admin only)
pub async fn update_role(
    State(state): State<AppState>,
    RequireAdmin(actor): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRoleRequest>,
) -> AppResult<Json<MessageResponse>> {
    let role = input.role.parse::<Role>().map_err(AppError::Core)?;

    if !can_create(actor.role, ResourceKind::UserRole) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Admin role required".into(),
        )));
    }

    let updated = UserRepo::update_role(&state.pool, id, role).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }

    tracing::info!(user_id = id, new_role = %role, admin_id = actor.user_id, "Role updated");
    Ok(Json(MessageResponse::new("User role updated successfully")))
}
