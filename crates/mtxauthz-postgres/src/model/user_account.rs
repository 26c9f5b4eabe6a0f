//! End-user account model for PostgreSQL database operations.
//!
//! End-user accounts carry the per-user streaming credentials handed out by
//! the identity platform, plus the admin flag that gates access to the
//! MediaMTX control surfaces.

use std::fmt;

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::user_accounts;

/// End-user account provisioned by the identity platform.
///
/// The `id` is the identity platform's user UUID, assigned during
/// provisioning rather than generated here. Accounts are never hard-deleted;
/// a set `deleted_at` removes them from authorization decisions.
#[derive(Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = user_accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserAccount {
    /// Identity platform user UUID.
    pub id: Uuid,
    /// Login name presented to MediaMTX.
    pub username: String,
    /// Per-user streaming password, generated at provisioning time.
    pub mtx_password: String,
    /// Grants access to the admin-gated actions (api, metrics, pprof).
    pub is_admin: bool,
    /// Timestamp when the account was created.
    pub created_at: Timestamp,
    /// Timestamp when the account was last updated.
    pub updated_at: Timestamp,
    /// Timestamp when the account was soft-deleted.
    pub deleted_at: Option<Timestamp>,
}

impl UserAccount {
    /// Returns whether the account has been soft-deleted.
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns whether the account is active and participates in authorization.
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.is_deleted()
    }
}

impl fmt::Debug for UserAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserAccount")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("mtx_password", &"***")
            .field("is_admin", &self.is_admin)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .field("deleted_at", &self.deleted_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_account(deleted: bool) -> UserAccount {
        let now = Timestamp::from(jiff::Timestamp::now());
        UserAccount {
            id: Uuid::new_v4(),
            username: "alice".to_owned(),
            mtx_password: "s3cret".to_owned(),
            is_admin: false,
            created_at: now,
            updated_at: now,
            deleted_at: deleted.then_some(now),
        }
    }

    #[test]
    fn soft_delete_flags() {
        let active = sample_account(false);
        assert!(active.is_active());
        assert!(!active.is_deleted());

        let deleted = sample_account(true);
        assert!(!deleted.is_active());
        assert!(deleted.is_deleted());
    }

    #[test]
    fn debug_redacts_password() {
        let account = sample_account(false);
        let debug = format!("{:?}", account);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("s3cret"));
    }
}
