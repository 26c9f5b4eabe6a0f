//! Delegated product account model for PostgreSQL database operations.

use std::fmt;

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::product_accounts;

/// Delegated product integration identified by its mTLS certificate CN.
///
/// Product accounts authenticate machine integrations: the certificate CN
/// doubles as the username on the wire, paired with a provisioned streaming
/// password. A set `deleted_at` removes the account from authorization
/// decisions.
#[derive(Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = product_accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductAccount {
    /// Unique account identifier.
    pub id: Uuid,
    /// Certificate CN the product presents, used as its username.
    pub cert_cn: String,
    /// Streaming password provisioned for the product.
    pub mtx_password: String,
    /// Timestamp when the account was created.
    pub created_at: Timestamp,
    /// Timestamp when the account was last updated.
    pub updated_at: Timestamp,
    /// Timestamp when the account was soft-deleted.
    pub deleted_at: Option<Timestamp>,
}

impl ProductAccount {
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

impl fmt::Debug for ProductAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductAccount")
            .field("id", &self.id)
            .field("cert_cn", &self.cert_cn)
            .field("mtx_password", &"***")
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .field("deleted_at", &self.deleted_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_password() {
        let now = Timestamp::from(jiff::Timestamp::now());
        let account = ProductAccount {
            id: Uuid::new_v4(),
            cert_cn: "fake.product.example".to_owned(),
            mtx_password: "hunter2".to_owned(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let debug = format!("{:?}", account);
        assert!(debug.contains("fake.product.example"));
        assert!(!debug.contains("hunter2"));
    }
}
