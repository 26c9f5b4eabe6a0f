//! Product account repository for delegated integration lookups.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::model::ProductAccount;
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for delegated product account database operations.
///
/// This service never writes to the table; provisioning happens elsewhere.
pub trait ProductAccountRepository {
    /// Finds a product account by its certificate CN.
    ///
    /// Returns the row regardless of soft-deletion state so that callers can
    /// tell a deleted account apart from one that never existed.
    fn find_product_account_by_cn(
        &mut self,
        cert_cn: &str,
    ) -> impl Future<Output = PgResult<Option<ProductAccount>>> + Send;
}

impl ProductAccountRepository for PgConnection {
    async fn find_product_account_by_cn(
        &mut self,
        cert_cn: &str,
    ) -> PgResult<Option<ProductAccount>> {
        use schema::product_accounts::{self, dsl};

        product_accounts::table
            .filter(dsl::cert_cn.eq(cert_cn))
            .select(ProductAccount::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }
}
