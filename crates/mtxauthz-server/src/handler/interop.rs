//! Product interop: authorization grant read-out.

use axum::extract::State;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::authz::{Lookup, SharedAccountStore};
use crate::extract::{ClientCn, Json};
use crate::handler::response::{AuthzGrantResponse, ErrorResponse};
use crate::handler::{ErrorKind, Result};
use crate::service::{ServiceConfig, ServiceState};

/// Tracing target for interop operations.
const TRACING_TARGET: &str = "mtxauthz_server::handler::interop";

#[tracing::instrument(skip_all, fields(cn = %client_cn))]
#[utoipa::path(
    get,
    path = "/api/v1/interop/authz",
    tag = "interop",
    summary = "Get the calling product's authorization grant",
    responses(
        (status = 200, description = "Basic-auth grant for the product", body = AuthzGrantResponse),
        (status = 401, description = "No client identity presented", body = ErrorResponse),
        (status = 403, description = "Unknown or revoked product", body = ErrorResponse),
    ),
)]
async fn get_authz_grant(
    State(config): State<ServiceConfig>,
    State(store): State<SharedAccountStore>,
    client_cn: ClientCn,
) -> Result<Json<AuthzGrantResponse>> {
    // The authority's own CN never names a product account.
    if client_cn.as_str() == config.authority_cn {
        tracing::warn!(
            target: TRACING_TARGET,
            cn = %client_cn,
            "identity authority requested a product grant"
        );
        return Err(ErrorKind::Forbidden.into_error());
    }

    match store.find_product_by_cn(client_cn.as_str()).await? {
        Lookup::Found(product) => Ok(Json(AuthzGrantResponse::basic(
            product.cert_cn,
            product.mtx_password,
        ))),
        Lookup::Deleted | Lookup::NotFound => {
            tracing::warn!(
                target: TRACING_TARGET,
                cn = %client_cn,
                "grant requested for an unknown or revoked product"
            );
            Err(ErrorKind::Forbidden.into_error())
        }
    }
}

/// Returns a [`Router`] with the interop routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> OpenApiRouter<ServiceState> {
    OpenApiRouter::new().routes(routes!(get_authz_grant))
}
