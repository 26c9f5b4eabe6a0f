//! The ordered authorization chain.

use crate::authz::decision::Decision;
use crate::authz::request::AuthRequest;
use crate::authz::store::{AccountStore, StoreError};
use crate::authz::tiers::{evaluate_integration, evaluate_product, evaluate_user};
use crate::authz::{IntegrationAccount, TRACING_TARGET};

/// Walks the credential tiers in order and returns the first settled verdict.
///
/// Tier order is integration, then delegated products, then end users, and
/// the first tier that recognizes the identity settles the request. Later
/// tiers are never consulted, so a product account named like a user always
/// wins over that user.
///
/// Requests without credentials are refused before any tier runs, and a
/// request no tier recognizes is refused by the trailing catch-all. Store
/// failures propagate as errors rather than verdicts.
#[tracing::instrument(skip_all, fields(user = %request.user, action = %request.action))]
pub async fn authorize(
    integration: &IntegrationAccount,
    store: &dyn AccountStore,
    request: &AuthRequest,
) -> Result<Decision, StoreError> {
    if request.has_empty_credentials() {
        tracing::debug!(
            target: TRACING_TARGET,
            "request without credentials refused"
        );
        return Ok(Decision::DenyBadCredentials);
    }

    if let Some(decision) = evaluate_integration(integration, request).into_decision() {
        tracing::debug!(target: TRACING_TARGET, ?decision, "settled by integration tier");
        return Ok(decision);
    }

    if let Some(decision) = evaluate_product(store, request).await?.into_decision() {
        tracing::debug!(target: TRACING_TARGET, ?decision, "settled by product tier");
        return Ok(decision);
    }

    if let Some(decision) = evaluate_user(store, request).await?.into_decision() {
        tracing::debug!(target: TRACING_TARGET, ?decision, "settled by user tier");
        return Ok(decision);
    }

    tracing::error!(
        target: TRACING_TARGET,
        user = %request.user,
        "username not known to any credential tier"
    );
    Ok(Decision::DenyForbidden)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authz::PLACEHOLDER_PASSWORD;
    use crate::authz::request::Action;
    use crate::authz::testing::MemoryStore;

    fn integration() -> IntegrationAccount {
        IntegrationAccount::new("rmmtxauthz", "s3cret")
    }

    fn request(user: &str, password: &str, action: Action) -> AuthRequest {
        AuthRequest {
            user: user.into(),
            password: password.into(),
            action,
            ..AuthRequest::default()
        }
    }

    #[tokio::test]
    async fn empty_credentials_refused_without_lookups() {
        let store = MemoryStore::new().with_user("alice", "pw", false);

        for (user, password) in [("", ""), ("alice", ""), ("", "pw")] {
            let anonymous = request(user, password, Action::Read);
            let decision = authorize(&integration(), &store, &anonymous).await.unwrap();
            assert_eq!(decision, Decision::DenyBadCredentials);
        }

        assert_eq!(store.lookups(), 0);
    }

    #[tokio::test]
    async fn integration_settles_without_lookups() {
        let store = MemoryStore::new().with_user("rmmtxauthz", "other-pw", true);

        let decision = authorize(
            &integration(),
            &store,
            &request("rmmtxauthz", "s3cret", Action::Api),
        )
        .await
        .unwrap();
        assert_eq!(decision, Decision::Allow);

        let decision = authorize(
            &integration(),
            &store,
            &request("rmmtxauthz", "wrong", Action::Api),
        )
        .await
        .unwrap();
        assert_eq!(decision, Decision::DenyBadCredentials);

        // Even a deny must not reach the database tiers.
        assert_eq!(store.lookups(), 0);
    }

    #[tokio::test]
    async fn placeholder_password_never_allows() {
        let account = IntegrationAccount::new("rmmtxauthz", PLACEHOLDER_PASSWORD);
        let store = MemoryStore::new();

        let decision = authorize(
            &account,
            &store,
            &request("rmmtxauthz", PLACEHOLDER_PASSWORD, Action::Api),
        )
        .await
        .unwrap();
        assert_eq!(decision, Decision::DenyBadCredentials);
    }

    #[tokio::test]
    async fn product_beats_user_with_same_name() {
        // One identity provisioned in both tiers with different passwords.
        let store = MemoryStore::new()
            .with_product("shared-name", "product-pw")
            .with_user("shared-name", "user-pw", true);

        let decision = authorize(
            &integration(),
            &store,
            &request("shared-name", "product-pw", Action::Publish),
        )
        .await
        .unwrap();
        assert_eq!(decision, Decision::Allow);

        // The user password is wrong for the product tier, and the user
        // tier never gets a say.
        let decision = authorize(
            &integration(),
            &store,
            &request("shared-name", "user-pw", Action::Publish),
        )
        .await
        .unwrap();
        assert_eq!(decision, Decision::DenyForbidden);
    }

    #[tokio::test]
    async fn user_tier_settles_known_users() {
        let store = MemoryStore::new()
            .with_user("admin", "pw", true)
            .with_user("viewer", "pw", false);

        let decision = authorize(&integration(), &store, &request("viewer", "pw", Action::Read))
            .await
            .unwrap();
        assert_eq!(decision, Decision::Allow);

        let decision = authorize(
            &integration(),
            &store,
            &request("viewer", "pw", Action::Metrics),
        )
        .await
        .unwrap();
        assert_eq!(decision, Decision::DenyForbidden);

        let decision = authorize(&integration(), &store, &request("admin", "pw", Action::Metrics))
            .await
            .unwrap();
        assert_eq!(decision, Decision::Allow);
    }

    #[tokio::test]
    async fn unknown_identity_hits_catch_all() {
        let store = MemoryStore::new().with_user("alice", "pw", false);

        let decision = authorize(&integration(), &store, &request("ghost", "pw", Action::Read))
            .await
            .unwrap();
        assert_eq!(decision, Decision::DenyForbidden);
    }

    #[tokio::test]
    async fn deleted_accounts_are_absent() {
        let store = MemoryStore::new()
            .with_deleted_product("gone.example", "pw")
            .with_deleted_user("gone-user", "pw", true);

        let decision = authorize(
            &integration(),
            &store,
            &request("gone.example", "pw", Action::Publish),
        )
        .await
        .unwrap();
        assert_eq!(decision, Decision::DenyForbidden);

        let decision = authorize(
            &integration(),
            &store,
            &request("gone-user", "pw", Action::Read),
        )
        .await
        .unwrap();
        assert_eq!(decision, Decision::DenyForbidden);
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let store = MemoryStore::new().unavailable();

        let probe = request("alice", "pw", Action::Read);
        let result = authorize(&integration(), &store, &probe).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn integration_tier_works_during_store_outage() {
        let store = MemoryStore::new().unavailable();

        let decision = authorize(
            &integration(),
            &store,
            &request("rmmtxauthz", "s3cret", Action::Api),
        )
        .await
        .unwrap();
        assert_eq!(decision, Decision::Allow);
    }
}
