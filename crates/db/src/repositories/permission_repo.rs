//! Permission resolution against the `role_permissions` grant table.

use skillreel_core::permissions::PermissionSet;
use skillreel_core::types::DbId;
use sqlx::PgPool;

/// Resolves granted permissions for authenticated requests.
pub struct PermissionRepo;

impl PermissionRepo {
    /// Resolve the permission names granted to a user through their role.
    ///
    /// A user that does not exist, or whose role has no grants, resolves to
    /// the empty set; callers treat that as denial. Query failures propagate
    /// so the caller can fail the request instead of failing open.
    pub async fn resolve_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<PermissionSet, sqlx::Error> {
        let granted: Vec<String> = sqlx::query_scalar(
            "SELECT p.name
             FROM permissions p
             JOIN role_permissions rp ON rp.permission_id = p.id
             JOIN users u ON u.role_id = rp.role_id
             WHERE u.id = $1
             ORDER BY p.name ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(PermissionSet::new(granted))
    }
}
