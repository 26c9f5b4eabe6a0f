//! The authorization webhook MediaMTX calls for every action.

use axum::extract::State;
use axum::http::StatusCode;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::authz::{AuthRequest, Decision, SharedAccountStore, authorize};
use crate::extract::Json;
use crate::handler::response::ErrorResponse;
use crate::handler::{ErrorKind, Result};
use crate::service::{ServiceConfig, ServiceState};

/// Tracing target for webhook decisions.
const TRACING_TARGET: &str = "mtxauthz_server::handler::mediamtx";

#[tracing::instrument(skip_all, fields(user = %request.user, action = %request.action))]
#[utoipa::path(
    post,
    path = "/api/v1/mediamtx/auth",
    tag = "mediamtx",
    summary = "Authorize a MediaMTX action",
    request_body(
        content = AuthRequest,
        description = "Authorization request as posted by MediaMTX",
        content_type = "application/json"
    ),
    responses(
        (status = 204, description = "Action is allowed"),
        (status = 401, description = "Bad or missing credentials", body = ErrorResponse),
        (status = 403, description = "Action is forbidden", body = ErrorResponse),
    ),
)]
async fn authorize_action(
    State(config): State<ServiceConfig>,
    State(store): State<SharedAccountStore>,
    Json(request): Json<AuthRequest>,
) -> Result<StatusCode> {
    let integration = config.integration_account();
    let decision = authorize(&integration, store.as_ref(), &request).await?;

    tracing::info!(
        target: TRACING_TARGET,
        user = %request.user,
        action = %request.action,
        allowed = decision.is_allowed(),
        status = decision.status_code().as_u16(),
        "authorization decided"
    );

    match decision {
        Decision::Allow => Ok(StatusCode::NO_CONTENT),
        Decision::DenyBadCredentials => Err(ErrorKind::Unauthorized.into_error()),
        Decision::DenyForbidden => Err(ErrorKind::Forbidden.into_error()),
    }
}

/// Returns a [`Router`] with the webhook route.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> OpenApiRouter<ServiceState> {
    OpenApiRouter::new().routes(routes!(authorize_action))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::authz::testing::MemoryStore;
    use crate::handler::test::create_test_server;

    fn store() -> MemoryStore {
        MemoryStore::new()
            .with_product("product.example.tld", "product-pw")
            .with_user("alice", "alice-pw", false)
            .with_user("root", "root-pw", true)
    }

    #[tokio::test]
    async fn missing_credentials_get_401() -> anyhow::Result<()> {
        let server = create_test_server(store(), |_| routes())?;

        let response = server
            .post("/api/v1/mediamtx/auth")
            .json(&json!({"user": "", "password": ""}))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }

    #[tokio::test]
    async fn integration_account_gets_204() -> anyhow::Result<()> {
        let server = create_test_server(store(), |_| routes())?;

        let response = server
            .post("/api/v1/mediamtx/auth")
            .json(&json!({"user": "rmmtxauthz", "password": "s3cret", "action": "api"}))
            .await;
        response.assert_status(StatusCode::NO_CONTENT);
        assert!(response.as_bytes().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn product_publish_gets_204() -> anyhow::Result<()> {
        let server = create_test_server(store(), |_| routes())?;

        let response = server
            .post("/api/v1/mediamtx/auth")
            .json(&json!({
                "user": "product.example.tld",
                "password": "product-pw",
                "action": "publish",
                "path": "live/drone1",
                "protocol": "rtsp",
            }))
            .await;
        response.assert_status(StatusCode::NO_CONTENT);

        Ok(())
    }

    #[tokio::test]
    async fn admin_gate_splits_on_flag() -> anyhow::Result<()> {
        let server = create_test_server(store(), |_| routes())?;

        let response = server
            .post("/api/v1/mediamtx/auth")
            .json(&json!({"user": "alice", "password": "alice-pw", "action": "metrics"}))
            .await;
        response.assert_status(StatusCode::FORBIDDEN);

        let response = server
            .post("/api/v1/mediamtx/auth")
            .json(&json!({"user": "root", "password": "root-pw", "action": "metrics"}))
            .await;
        response.assert_status(StatusCode::NO_CONTENT);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_identity_gets_403() -> anyhow::Result<()> {
        let server = create_test_server(store(), |_| routes())?;

        let response = server
            .post("/api/v1/mediamtx/auth")
            .json(&json!({"user": "ghost", "password": "anything"}))
            .await;
        response.assert_status(StatusCode::FORBIDDEN);

        Ok(())
    }

    #[tokio::test]
    async fn error_body_names_no_tier() -> anyhow::Result<()> {
        let server = create_test_server(store(), |_| routes())?;

        let response = server
            .post("/api/v1/mediamtx/auth")
            .json(&json!({"user": "alice", "password": "wrong"}))
            .await;
        response.assert_status(StatusCode::FORBIDDEN);

        let body = response.text();
        assert!(!body.contains("tier"));
        assert!(!body.contains("user account"));

        Ok(())
    }

    #[tokio::test]
    async fn store_outage_is_500_not_deny() -> anyhow::Result<()> {
        let server = create_test_server(MemoryStore::new().unavailable(), |_| routes())?;

        let response = server
            .post("/api/v1/mediamtx/auth")
            .json(&json!({"user": "alice", "password": "alice-pw"}))
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}
