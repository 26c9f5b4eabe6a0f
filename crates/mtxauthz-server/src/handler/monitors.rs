//! Health check used by container orchestration.

use axum::extract::State;
use axum::http::StatusCode;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::authz::SharedAccountStore;
use crate::extract::Json;
use crate::handler::Result;
use crate::handler::response::HealthResponse;
use crate::service::ServiceState;

/// Tracing target for health checks.
const TRACING_TARGET: &str = "mtxauthz_server::handler::monitors";

#[tracing::instrument(skip_all)]
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    summary = "Get service health status",
    responses(
        (status = 200, description = "Service and database are healthy", body = HealthResponse),
        (status = 503, description = "Database is unreachable", body = HealthResponse),
    ),
)]
async fn health_status(
    State(store): State<SharedAccountStore>,
) -> Result<(StatusCode, Json<HealthResponse>)> {
    match store.count_active_users().await {
        Ok(users) => {
            tracing::debug!(target: TRACING_TARGET, users, "health check passed");
            Ok((StatusCode::OK, Json(HealthResponse::healthy(users))))
        }
        Err(store_error) => {
            tracing::error!(
                target: TRACING_TARGET,
                error = %store_error,
                "health check failed, database unreachable"
            );
            Ok((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::unhealthy()),
            ))
        }
    }
}

/// Returns a [`Router`] with the health route.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> OpenApiRouter<ServiceState> {
    OpenApiRouter::new().routes(routes!(health_status))
}
