//! End-user read endpoints: own credentials and the active stream list.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::HOST;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::authz::{Lookup, SharedAccountStore};
use crate::extract::{ClientCn, Json};
use crate::handler::response::{ErrorResponse, StreamResponse, UserCredentialsResponse};
use crate::handler::{ErrorKind, Result};
use crate::mtx::{MtxClient, stream_urls};
use crate::service::{ServiceConfig, ServiceState};

/// Tracing target for user-facing operations.
const TRACING_TARGET: &str = "mtxauthz_server::handler::users";

/// Resolves the calling user through the proxy-forwarded identity.
///
/// The identity authority's own CN never names a user account, so requests
/// bearing it are refused before any lookup.
async fn find_calling_user(
    config: &ServiceConfig,
    store: &SharedAccountStore,
    client_cn: &ClientCn,
) -> Result<mtxauthz_postgres::model::UserAccount> {
    if client_cn.as_str() == config.authority_cn {
        tracing::warn!(
            target: TRACING_TARGET,
            cn = %client_cn,
            "identity authority called a user endpoint"
        );
        return Err(ErrorKind::Forbidden.into_error());
    }

    match store.find_user_by_username(client_cn.as_str()).await? {
        Lookup::Found(user) => Ok(user),
        Lookup::Deleted | Lookup::NotFound => {
            tracing::warn!(
                target: TRACING_TARGET,
                cn = %client_cn,
                "unknown or revoked user called a user endpoint"
            );
            Err(ErrorKind::Forbidden.into_error())
        }
    }
}

/// Picks the hostname embedded in stream URLs.
///
/// Prefers the configured public address; otherwise falls back to the
/// request's `Host` header with any port stripped.
fn resolve_public_address(config: &ServiceConfig, headers: &HeaderMap) -> Result<String> {
    if let Some(address) = &config.public_address {
        return Ok(address.clone());
    }

    let host = headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .map(|host| host.split(':').next().unwrap_or(host))
        .filter(|host| !host.is_empty());

    match host {
        Some(host) => {
            tracing::warn!(
                target: TRACING_TARGET,
                host,
                "no public address configured, using the request Host header"
            );
            Ok(host.to_owned())
        }
        None => Err(ErrorKind::BadRequest
            .with_message("Cannot determine the public stream address")
            .with_context("No public address is configured and the request carries no Host header")),
    }
}

#[tracing::instrument(skip_all, fields(cn = %client_cn))]
#[utoipa::path(
    get,
    path = "/api/v1/users/credentials",
    tag = "users",
    summary = "Get the calling user's streaming credentials",
    responses(
        (status = 200, description = "Credentials of the calling user", body = UserCredentialsResponse),
        (status = 401, description = "No client identity presented", body = ErrorResponse),
        (status = 403, description = "Unknown or revoked user", body = ErrorResponse),
    ),
)]
async fn get_credentials(
    State(config): State<ServiceConfig>,
    State(store): State<SharedAccountStore>,
    client_cn: ClientCn,
) -> Result<Json<UserCredentialsResponse>> {
    let user = find_calling_user(&config, &store, &client_cn).await?;

    Ok(Json(UserCredentialsResponse {
        username: user.username,
        password: user.mtx_password,
    }))
}

#[tracing::instrument(skip_all, fields(cn = %client_cn))]
#[utoipa::path(
    get,
    path = "/api/v1/users/streams",
    tag = "users",
    summary = "List active streams with per-protocol URLs",
    responses(
        (status = 200, description = "Active streams with credentialed URLs", body = [StreamResponse]),
        (status = 401, description = "No client identity presented", body = ErrorResponse),
        (status = 403, description = "Unknown or revoked user", body = ErrorResponse),
        (status = 502, description = "MediaMTX control API failure", body = ErrorResponse),
    ),
)]
async fn get_streams(
    State(config): State<ServiceConfig>,
    State(store): State<SharedAccountStore>,
    State(mtx_client): State<MtxClient>,
    client_cn: ClientCn,
    headers: HeaderMap,
) -> Result<Json<Vec<StreamResponse>>> {
    let user = find_calling_user(&config, &store, &client_cn).await?;
    let host = resolve_public_address(&config, &headers)?;
    let credentials = format!("{}:{}@", user.username, user.mtx_password);

    let paths = mtx_client.list_paths().await?;
    let streams = paths
        .into_iter()
        .map(|mtx_path| {
            let path = format!("/{}", mtx_path.name);
            let urls = stream_urls(&credentials, &host, &path);
            StreamResponse { path, urls }
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        target: TRACING_TARGET,
        user = %user.username,
        streams = streams.len(),
        "listed streams"
    );
    Ok(Json(streams))
}

/// Returns a [`Router`] with the user-facing routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> OpenApiRouter<ServiceState> {
    OpenApiRouter::new()
        .routes(routes!(get_credentials))
        .routes(routes!(get_streams))
}
