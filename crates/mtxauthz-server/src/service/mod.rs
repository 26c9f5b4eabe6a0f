//! Service configuration, state, and the production account store.

mod config;
mod pg_store;
mod state;

pub use crate::service::config::ServiceConfig;
pub use crate::service::pg_store::PgStore;
pub use crate::service::state::ServiceState;

pub(crate) const TRACING_TARGET: &str = "mtxauthz_server::service";
