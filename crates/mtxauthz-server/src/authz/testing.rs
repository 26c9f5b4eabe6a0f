//! In-memory [`AccountStore`] for exercising the chain and the handlers.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use mtxauthz_postgres::model::{ProductAccount, UserAccount};
use uuid::Uuid;

use crate::authz::store::{AccountStore, Lookup, StoreError};

/// Account fixtures held in memory, plus a lookup counter so tests can
/// assert which requests reach the store at all.
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    products: HashMap<String, ProductAccount>,
    users: HashMap<String, UserAccount>,
    lookups: AtomicUsize,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, cert_cn: &str, password: &str) -> Self {
        self.products
            .insert(cert_cn.into(), product(cert_cn, password, false));
        self
    }

    pub fn with_deleted_product(mut self, cert_cn: &str, password: &str) -> Self {
        self.products
            .insert(cert_cn.into(), product(cert_cn, password, true));
        self
    }

    pub fn with_user(mut self, username: &str, password: &str, is_admin: bool) -> Self {
        self.users
            .insert(username.into(), user(username, password, is_admin, false));
        self
    }

    pub fn with_deleted_user(mut self, username: &str, password: &str, is_admin: bool) -> Self {
        self.users
            .insert(username.into(), user(username, password, is_admin, true));
        self
    }

    /// Makes every lookup fail, simulating a database outage.
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// Number of lookups that reached the store.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn into_shared(self) -> Arc<dyn AccountStore> {
        Arc::new(self)
    }

    fn record_lookup(&self) -> Result<(), StoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.unavailable {
            return Err(StoreError::unavailable("memory store marked unavailable"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AccountStore for MemoryStore {
    async fn find_product_by_cn(
        &self,
        cert_cn: &str,
    ) -> Result<Lookup<ProductAccount>, StoreError> {
        self.record_lookup()?;
        Ok(match self.products.get(cert_cn) {
            Some(account) if account.is_deleted() => Lookup::Deleted,
            Some(account) => Lookup::Found(account.clone()),
            None => Lookup::NotFound,
        })
    }

    async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Lookup<UserAccount>, StoreError> {
        self.record_lookup()?;
        Ok(match self.users.get(username) {
            Some(account) if account.is_deleted() => Lookup::Deleted,
            Some(account) => Lookup::Found(account.clone()),
            None => Lookup::NotFound,
        })
    }

    async fn count_active_users(&self) -> Result<i64, StoreError> {
        self.record_lookup()?;
        Ok(self.users.values().filter(|user| user.is_active()).count() as i64)
    }
}

fn product(cert_cn: &str, password: &str, deleted: bool) -> ProductAccount {
    let now = jiff::Timestamp::now();
    ProductAccount {
        id: Uuid::new_v4(),
        cert_cn: cert_cn.into(),
        mtx_password: password.into(),
        created_at: now.into(),
        updated_at: now.into(),
        deleted_at: deleted.then_some(now.into()),
    }
}

fn user(username: &str, password: &str, is_admin: bool, deleted: bool) -> UserAccount {
    let now = jiff::Timestamp::now();
    UserAccount {
        id: Uuid::new_v4(),
        username: username.into(),
        mtx_password: password.into(),
        is_admin,
        created_at: now.into(),
        updated_at: now.into(),
        deleted_at: deleted.then_some(now.into()),
    }
}
