//! Authorization policy -- pure, stateless decision functions.
//!
//! Handlers load the target row first (resolving existence, so a missing
//! resource is a 404 regardless of who asks), then consult these functions.
//! Any ambiguity denies; there is no silent-allow path.

use crate::roles::Role;
use crate::types::DbId;

/// The kind of resource a create decision applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    News,
    Comment,
    /// Changing another user's role via the admin endpoint.
    UserRole,
}

/// Whether `role` may create a resource of the given kind.
///
/// News is restricted to admins and writers. Comments are open to any
/// authenticated actor. Role changes are admin-only.
pub fn can_create(role: Role, kind: ResourceKind) -> bool {
    match kind {
        ResourceKind::News => matches!(role, Role::Admin | Role::Writer),
        ResourceKind::Comment => true,
        ResourceKind::UserRole => role == Role::Admin,
    }
}

/// Whether the actor may update or delete a resource owned by `owner_id`.
///
/// Admin override always wins; otherwise ownership is strict id equality.
/// Applies uniformly to news update/delete and comment delete.
pub fn can_mutate(role: Role, actor_id: DbId, owner_id: DbId) -> bool {
    role == Role::Admin || actor_id == owner_id
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROLES: [Role; 3] = [Role::Admin, Role::Writer, Role::Reader];

    /// can_mutate is true iff admin OR owner, over every role/ownership
    /// combination.
    #[test]
    fn test_can_mutate_truth_table() {
        for role in ALL_ROLES {
            for (actor_id, owner_id) in [(1, 1), (1, 2)] {
                let expected = role == Role::Admin || actor_id == owner_id;
                assert_eq!(
                    can_mutate(role, actor_id, owner_id),
                    expected,
                    "role={role} actor={actor_id} owner={owner_id}"
                );
            }
        }
    }

    #[test]
    fn test_ownership_is_id_equality_not_proximity() {
        assert!(!can_mutate(Role::Writer, 2, 20));
        assert!(!can_mutate(Role::Reader, 0, 1));
        assert!(can_mutate(Role::Reader, 42, 42));
    }

    #[test]
    fn test_news_creation_restricted_to_admin_and_writer() {
        assert!(can_create(Role::Admin, ResourceKind::News));
        assert!(can_create(Role::Writer, ResourceKind::News));
        assert!(!can_create(Role::Reader, ResourceKind::News));
    }

    #[test]
    fn test_comment_creation_open_to_all_roles() {
        for role in ALL_ROLES {
            assert!(can_create(role, ResourceKind::Comment), "role={role}");
        }
    }

    #[test]
    fn test_role_change_is_admin_only() {
        assert!(can_create(Role::Admin, ResourceKind::UserRole));
        assert!(!can_create(Role::Writer, ResourceKind::UserRole));
        assert!(!can_create(Role::Reader, ResourceKind::UserRole));
    }
}
