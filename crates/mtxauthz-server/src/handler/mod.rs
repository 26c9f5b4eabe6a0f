//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod error;
mod interop;
mod mediamtx;
mod monitors;
pub mod response;
mod users;

use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use utoipa_axum::router::OpenApiRouter;

pub use crate::handler::error::{Error, ErrorKind, Result};
use crate::extract::Json;
use crate::service::ServiceState;

#[inline]
async fn fallback() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns an [`OpenApiRouter`] with all routes.
///
/// Every route is public at the HTTP layer: the webhook authorizes through
/// credentials in the body, the management reads through the
/// proxy-forwarded client identity.
pub fn openapi_routes() -> OpenApiRouter<ServiceState> {
    OpenApiRouter::new()
        .merge(mediamtx::routes())
        .merge(monitors::routes())
        .merge(interop::routes())
        .merge(users::routes())
}

/// Returns the complete application [`Router`], including the generated
/// OpenAPI document at `/api/openapi.json`.
pub fn routes(state: ServiceState) -> Router {
    let (router, api) = openapi_routes().split_for_parts();

    router
        .route("/api/openapi.json", get(move || async move { Json(api) }))
        .fallback(fallback)
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test {
    use axum_test::TestServer;
    use utoipa_axum::router::OpenApiRouter;

    use crate::authz::SharedAccountStore;
    use crate::authz::testing::MemoryStore;
    use crate::mtx::MtxClient;
    use crate::service::{ServiceConfig, ServiceState};

    /// Configuration used by handler tests: rotated integration password,
    /// control API pointed at the discard port so no call can succeed.
    pub fn test_config() -> ServiceConfig {
        ServiceConfig::default()
            .with_integration_account("rmmtxauthz", "s3cret")
            .with_control_url("http://127.0.0.1:9")
            .with_public_address("stream.example.tld")
    }

    /// Returns a new [`TestServer`] over a shared store handle.
    pub fn create_test_server_with_store(
        store: SharedAccountStore,
        router: impl Fn(ServiceState) -> OpenApiRouter<ServiceState>,
    ) -> anyhow::Result<TestServer> {
        let config = test_config();
        let mtx_client = MtxClient::new(&config.control_url, config.integration_account())?;
        let state = ServiceState::new(config, store, mtx_client);

        let (app, _) = router(state.clone()).split_for_parts();
        let server = TestServer::new(app.with_state(state))?;
        Ok(server)
    }

    /// Returns a new [`TestServer`] over an in-memory account store.
    pub fn create_test_server(
        store: MemoryStore,
        router: impl Fn(ServiceState) -> OpenApiRouter<ServiceState>,
    ) -> anyhow::Result<TestServer> {
        create_test_server_with_store(store.into_shared(), router)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;

    use super::test::test_config;
    use super::*;
    use crate::authz::testing::MemoryStore;
    use crate::mtx::MtxClient;

    fn full_server() -> anyhow::Result<TestServer> {
        let config = test_config();
        let mtx_client = MtxClient::new(&config.control_url, config.integration_account())?;
        let state = ServiceState::new(config, MemoryStore::new().into_shared(), mtx_client);
        Ok(TestServer::new(routes(state))?)
    }

    #[tokio::test]
    async fn unknown_route_is_404() -> anyhow::Result<()> {
        let server = full_server()?;

        let response = server.get("/api/v1/no-such-route").await;
        response.assert_status(StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    async fn openapi_document_is_served() -> anyhow::Result<()> {
        let server = full_server()?;

        let response = server.get("/api/openapi.json").await;
        response.assert_status_ok();

        let document = response.json::<serde_json::Value>();
        let paths = document["paths"].as_object().unwrap();
        assert!(paths.contains_key("/api/v1/mediamtx/auth"));
        assert!(paths.contains_key("/api/v1/health"));
        assert!(paths.contains_key("/api/v1/interop/authz"));
        assert!(paths.contains_key("/api/v1/users/streams"));

        Ok(())
    }
}
