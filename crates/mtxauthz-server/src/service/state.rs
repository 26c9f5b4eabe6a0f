//! Application state and dependency injection.

use std::sync::Arc;

use mtxauthz_postgres::PgClient;

use crate::authz::SharedAccountStore;
use crate::mtx::{MtxClient, MtxResult};
use crate::service::pg_store::PgStore;
use crate::service::ServiceConfig;

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    config: ServiceConfig,
    store: SharedAccountStore,
    mtx_client: MtxClient,
}

impl ServiceState {
    /// Creates application state from explicit collaborators.
    ///
    /// This is the seam handler tests use to inject an in-memory store.
    pub fn new(config: ServiceConfig, store: SharedAccountStore, mtx_client: MtxClient) -> Self {
        Self {
            config,
            store,
            mtx_client,
        }
    }

    /// Creates production state over an established database pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured control URL does not parse.
    pub fn with_postgres(config: ServiceConfig, pg_client: PgClient) -> MtxResult<Self> {
        let mtx_client = MtxClient::new(&config.control_url, config.integration_account())?;
        let store = Arc::new(PgStore::new(pg_client));
        Ok(Self::new(config, store, mtx_client))
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(config: ServiceConfig);
impl_di!(store: SharedAccountStore);
impl_di!(mtx_client: MtxClient);
