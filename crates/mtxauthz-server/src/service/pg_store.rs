//! PostgreSQL-backed [`AccountStore`].

use mtxauthz_postgres::query::{ProductAccountRepository, UserAccountRepository};
use mtxauthz_postgres::{PgClient, PgError};
use mtxauthz_postgres::model::{ProductAccount, UserAccount};

use crate::authz::{AccountStore, Lookup, StoreError};

/// Account store backed by the shared platform database.
///
/// Repository lookups return rows regardless of soft-deletion; the mapping
/// to [`Lookup::Deleted`] happens here so callers can log revoked accounts
/// distinctly from unknown ones.
#[derive(Debug, Clone)]
pub struct PgStore {
    client: PgClient,
}

impl PgStore {
    /// Creates a store over an established connection pool.
    pub fn new(client: PgClient) -> Self {
        Self { client }
    }
}

fn into_lookup<T>(row: Option<T>, is_deleted: impl Fn(&T) -> bool) -> Lookup<T> {
    match row {
        Some(account) if is_deleted(&account) => Lookup::Deleted,
        Some(account) => Lookup::Found(account),
        None => Lookup::NotFound,
    }
}

impl From<PgError> for StoreError {
    fn from(error: PgError) -> Self {
        StoreError::unavailable(error)
    }
}

#[async_trait::async_trait]
impl AccountStore for PgStore {
    async fn find_product_by_cn(
        &self,
        cert_cn: &str,
    ) -> Result<Lookup<ProductAccount>, StoreError> {
        let mut conn = self.client.get_connection().await?;
        let row = conn.find_product_account_by_cn(cert_cn).await?;
        Ok(into_lookup(row, ProductAccount::is_deleted))
    }

    async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Lookup<UserAccount>, StoreError> {
        let mut conn = self.client.get_connection().await?;
        let row = conn.find_user_account_by_username(username).await?;
        Ok(into_lookup(row, UserAccount::is_deleted))
    }

    async fn count_active_users(&self) -> Result<i64, StoreError> {
        let mut conn = self.client.get_connection().await?;
        Ok(conn.count_active_user_accounts().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deleted_rows_map_to_deleted() {
        let lookup = into_lookup(Some(7), |_| true);
        assert_eq!(lookup, Lookup::Deleted);

        let lookup = into_lookup(Some(7), |_| false);
        assert_eq!(lookup, Lookup::Found(7));

        let lookup = into_lookup::<i32>(None, |_| false);
        assert_eq!(lookup, Lookup::NotFound);
    }

    #[test]
    fn pg_errors_become_unavailable() {
        let error: StoreError = PgError::Unexpected("pool gone".into()).into();
        assert!(matches!(error, StoreError::Unavailable(_)));
    }
}
