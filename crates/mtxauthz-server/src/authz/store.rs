//! Read-only account lookup abstraction used by the credential tiers.

use std::sync::Arc;

use mtxauthz_postgres::model::{ProductAccount, UserAccount};

/// Shared handle to an [`AccountStore`] implementation.
pub type SharedAccountStore = Arc<dyn AccountStore>;

/// Outcome of a single account lookup.
///
/// Soft-deleted rows are reported as [`Lookup::Deleted`] instead of being
/// silently dropped, so callers can log the distinction. For authorization
/// both absent states are equivalent: the account does not exist.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    /// An active account was found.
    Found(T),
    /// The account exists but has been soft-deleted.
    Deleted,
    /// No account with this identity exists.
    NotFound,
}

impl<T> Lookup<T> {
    /// Returns the active account, treating deleted and missing alike.
    #[inline]
    pub fn into_found(self) -> Option<T> {
        match self {
            Self::Found(account) => Some(account),
            Self::Deleted | Self::NotFound => None,
        }
    }
}

/// Error returned when the backing store cannot answer a lookup.
///
/// Store failures are infrastructure problems, not authorization verdicts.
/// They must surface as server errors instead of being folded into a deny,
/// otherwise an outage would be indistinguishable from a revocation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or the query failed.
    #[error("account store unavailable: {0}")]
    Unavailable(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wraps any error as an unavailable store.
    pub fn unavailable(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Unavailable(err.into())
    }
}

/// Read-only access to the provisioned accounts.
///
/// Account provisioning lives in the identity platform. This service only
/// ever reads, so the trait exposes exactly the lookups the tiers and the
/// interop endpoints need.
#[async_trait::async_trait]
pub trait AccountStore: Send + Sync {
    /// Looks up a delegated-product account by certificate common name.
    async fn find_product_by_cn(
        &self,
        cert_cn: &str,
    ) -> Result<Lookup<ProductAccount>, StoreError>;

    /// Looks up an end-user account by username.
    async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Lookup<UserAccount>, StoreError>;

    /// Counts active end-user accounts, used by the health endpoint.
    async fn count_active_users(&self) -> Result<i64, StoreError>;
}
