//! Permission capability strings and the resolved permission set.
//!
//! These must match the seed data in
//! `20260301000002_create_permissions_tables.sql`. Every authorization gate
//! in the system checks membership in a [`PermissionSet`] resolved from the
//! database for the current request; a set that resolves empty denies
//! everything (fail closed).

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// List the skills available for assessment.
pub const PERM_SKILL_READ: &str = "skill:read";

/// Submit a new skill assessment.
pub const PERM_ASSESSMENT_CREATE: &str = "assessment:create";

/// Read assessments owned by the caller.
pub const PERM_ASSESSMENT_READ_OWN: &str = "assessment:read_own";

/// Read every assessment regardless of owner or status.
pub const PERM_ASSESSMENT_READ_ALL: &str = "assessment:read_all";

/// Read proctor-verified assessments from any candidate.
pub const PERM_ASSESSMENT_READ_VERIFIED: &str = "assessment:read_verified";

/// Read the queue of assessments awaiting proctor review.
pub const PERM_ASSESSMENT_READ_PENDING: &str = "assessment:read_pending";

/// Update assessments owned by the caller.
pub const PERM_ASSESSMENT_UPDATE_OWN: &str = "assessment:update_own";

/// Issue a proctor verification verdict.
pub const PERM_ASSESSMENT_VERIFY: &str = "assessment:verify";

/// Read the caller's own profile.
pub const PERM_USER_READ_OWN: &str = "user:read_own";

/// Update the caller's own profile.
pub const PERM_USER_UPDATE_OWN: &str = "user:update_own";

/// Request pre-signed video upload URLs.
pub const PERM_UPLOAD_SIGN: &str = "upload:sign";

/// All permission names known to the system.
pub const ALL_PERMISSIONS: &[&str] = &[
    PERM_SKILL_READ,
    PERM_ASSESSMENT_CREATE,
    PERM_ASSESSMENT_READ_OWN,
    PERM_ASSESSMENT_READ_ALL,
    PERM_ASSESSMENT_READ_VERIFIED,
    PERM_ASSESSMENT_READ_PENDING,
    PERM_ASSESSMENT_UPDATE_OWN,
    PERM_ASSESSMENT_VERIFY,
    PERM_USER_READ_OWN,
    PERM_USER_UPDATE_OWN,
    PERM_UPLOAD_SIGN,
];

// ---------------------------------------------------------------------------
// PermissionSet
// ---------------------------------------------------------------------------

/// The permissions resolved for one authenticated request.
///
/// Holds the capability strings granted to the caller's role at the moment
/// the request was authenticated. An empty set grants nothing.
#[derive(Debug, Clone, Default)]
pub struct PermissionSet {
    granted: Vec<String>,
}

impl PermissionSet {
    /// Build a set from resolved grant rows.
    pub fn new(granted: Vec<String>) -> Self {
        Self { granted }
    }

    /// An empty set that denies everything.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the given permission is granted.
    pub fn contains(&self, permission: &str) -> bool {
        self.granted.iter().any(|p| p == permission)
    }

    /// Require the given permission, or fail with [`CoreError::Forbidden`].
    pub fn require(&self, permission: &str) -> Result<(), CoreError> {
        if self.contains(permission) {
            Ok(())
        } else {
            Err(CoreError::Forbidden(format!(
                "Missing required permission: {permission}"
            )))
        }
    }

    /// Number of granted permissions.
    pub fn len(&self) -> usize {
        self.granted.len()
    }

    /// Whether no permissions are granted.
    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn set_of(perms: &[&str]) -> PermissionSet {
        PermissionSet::new(perms.iter().map(|p| p.to_string()).collect())
    }

    #[test]
    fn contains_granted_permission() {
        let set = set_of(&[PERM_SKILL_READ, PERM_ASSESSMENT_CREATE]);
        assert!(set.contains(PERM_SKILL_READ));
        assert!(set.contains(PERM_ASSESSMENT_CREATE));
    }

    #[test]
    fn does_not_contain_ungranted_permission() {
        let set = set_of(&[PERM_SKILL_READ]);
        assert!(!set.contains(PERM_ASSESSMENT_VERIFY));
    }

    #[test]
    fn empty_set_denies_everything() {
        let set = PermissionSet::empty();
        for perm in ALL_PERMISSIONS {
            assert!(!set.contains(perm), "empty set must not grant {perm}");
            assert!(set.require(perm).is_err());
        }
    }

    #[test]
    fn require_granted_passes() {
        let set = set_of(&[PERM_ASSESSMENT_VERIFY]);
        assert!(set.require(PERM_ASSESSMENT_VERIFY).is_ok());
    }

    #[test]
    fn require_missing_is_forbidden() {
        let set = set_of(&[PERM_SKILL_READ]);
        let err = set.require(PERM_ASSESSMENT_VERIFY).unwrap_err();
        assert_matches!(err, CoreError::Forbidden(msg) => {
            assert!(msg.contains(PERM_ASSESSMENT_VERIFY));
        });
    }

    #[test]
    fn permission_names_are_unique() {
        let mut names = ALL_PERMISSIONS.to_vec();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ALL_PERMISSIONS.len());
    }

    #[test]
    fn len_and_is_empty() {
        assert!(PermissionSet::empty().is_empty());
        let set = set_of(&[PERM_SKILL_READ]);
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }
}
