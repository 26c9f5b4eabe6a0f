//! User account repository for end-user credential lookups.

use std::future::Future;

use diesel::dsl::count_star;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::model::UserAccount;
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for end-user account database operations.
///
/// This service never writes to the table; provisioning happens elsewhere.
pub trait UserAccountRepository {
    /// Finds a user account by its username.
    ///
    /// Returns the row regardless of soft-deletion state so that callers can
    /// tell a deleted account apart from one that never existed.
    fn find_user_account_by_username(
        &mut self,
        username: &str,
    ) -> impl Future<Output = PgResult<Option<UserAccount>>> + Send;

    /// Counts user accounts that have not been soft-deleted.
    ///
    /// Used by the health endpoint to report how many accounts are visible
    /// to authorization.
    fn count_active_user_accounts(&mut self) -> impl Future<Output = PgResult<i64>> + Send;
}

impl UserAccountRepository for PgConnection {
    async fn find_user_account_by_username(
        &mut self,
        username: &str,
    ) -> PgResult<Option<UserAccount>> {
        use schema::user_accounts::{self, dsl};

        user_accounts::table
            .filter(dsl::username.eq(username))
            .select(UserAccount::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn count_active_user_accounts(&mut self) -> PgResult<i64> {
        use schema::user_accounts::{self, dsl};

        user_accounts::table
            .filter(dsl::deleted_at.is_null())
            .select(count_star())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }
}
