//! Per-tier credential evaluation.
//!
//! Each tier answers the same question: does this identity belong to me,
//! and if so, is the request good? A tier that does not own the identity
//! returns [`TierVerdict::NotMatched`] without judging the credentials,
//! leaving the request to the tiers below.

use crate::authz::decision::{Decision, TierVerdict};
use crate::authz::request::AuthRequest;
use crate::authz::store::{AccountStore, Lookup, StoreError};
use crate::authz::{IntegrationAccount, TRACING_TARGET};

/// Evaluates the integration tier.
///
/// Matches on the configured integration username. A match with the
/// factory-default password still on the account is refused outright, the
/// deployment is misconfigured and the shared secret must be rotated first.
pub fn evaluate_integration(
    integration: &IntegrationAccount,
    request: &AuthRequest,
) -> TierVerdict {
    if request.user != integration.username() {
        return TierVerdict::NotMatched;
    }

    if integration.has_placeholder_password() {
        tracing::error!(
            target: TRACING_TARGET,
            "integration account still uses the factory-default password, refusing"
        );
        return TierVerdict::Matched(Decision::DenyBadCredentials);
    }

    if request.password != integration.password() {
        tracing::warn!(
            target: TRACING_TARGET,
            user = %request.user,
            "wrong password for the integration account"
        );
        return TierVerdict::Matched(Decision::DenyBadCredentials);
    }

    TierVerdict::Matched(Decision::Allow)
}

/// Evaluates the delegated-product tier.
///
/// The presented username is interpreted as a certificate common name.
/// Deleted and unknown accounts fall through to the next tier.
pub async fn evaluate_product(
    store: &dyn AccountStore,
    request: &AuthRequest,
) -> Result<TierVerdict, StoreError> {
    let account = match store.find_product_by_cn(&request.user).await? {
        Lookup::Found(account) => account,
        Lookup::Deleted | Lookup::NotFound => return Ok(TierVerdict::NotMatched),
    };

    if request.password != account.mtx_password {
        tracing::error!(
            target: TRACING_TARGET,
            cert_cn = %account.cert_cn,
            "wrong password for product account"
        );
        return Ok(TierVerdict::Matched(Decision::DenyForbidden));
    }

    Ok(TierVerdict::Matched(Decision::Allow))
}

/// Evaluates the end-user tier.
///
/// Matching users with the right password are still refused when they
/// request an administrative action without the admin flag.
pub async fn evaluate_user(
    store: &dyn AccountStore,
    request: &AuthRequest,
) -> Result<TierVerdict, StoreError> {
    let account = match store.find_user_by_username(&request.user).await? {
        Lookup::Found(account) => account,
        Lookup::Deleted | Lookup::NotFound => return Ok(TierVerdict::NotMatched),
    };

    if request.password != account.mtx_password {
        tracing::warn!(
            target: TRACING_TARGET,
            user = %account.username,
            "wrong password for user account"
        );
        return Ok(TierVerdict::Matched(Decision::DenyForbidden));
    }

    if request.action.is_admin_gated() && !account.is_admin {
        tracing::error!(
            target: TRACING_TARGET,
            user = %account.username,
            action = %request.action,
            "non-admin user requested an administrative action"
        );
        return Ok(TierVerdict::Matched(Decision::DenyForbidden));
    }

    Ok(TierVerdict::Matched(Decision::Allow))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authz::PLACEHOLDER_PASSWORD;
    use crate::authz::request::Action;
    use crate::authz::testing::MemoryStore;

    fn request(user: &str, password: &str, action: Action) -> AuthRequest {
        AuthRequest {
            user: user.into(),
            password: password.into(),
            action,
            ..AuthRequest::default()
        }
    }

    #[test]
    fn integration_ignores_other_users() {
        let integration = IntegrationAccount::new("rmmtxauthz", "s3cret");
        let verdict = evaluate_integration(&integration, &request("alice", "s3cret", Action::Read));
        assert_eq!(verdict, TierVerdict::NotMatched);
    }

    #[test]
    fn integration_refuses_placeholder_password() {
        let integration = IntegrationAccount::new("rmmtxauthz", PLACEHOLDER_PASSWORD);
        let verdict = evaluate_integration(
            &integration,
            &request("rmmtxauthz", PLACEHOLDER_PASSWORD, Action::Api),
        );
        assert_eq!(verdict, TierVerdict::Matched(Decision::DenyBadCredentials));
    }

    #[test]
    fn integration_checks_password() {
        let integration = IntegrationAccount::new("rmmtxauthz", "s3cret");

        let verdict =
            evaluate_integration(&integration, &request("rmmtxauthz", "wrong", Action::Api));
        assert_eq!(verdict, TierVerdict::Matched(Decision::DenyBadCredentials));

        let verdict =
            evaluate_integration(&integration, &request("rmmtxauthz", "s3cret", Action::Api));
        assert_eq!(verdict, TierVerdict::Matched(Decision::Allow));
    }

    #[tokio::test]
    async fn product_passes_on_unknown_cn() {
        let store = MemoryStore::new();
        let verdict = evaluate_product(&store, &request("ghost.example", "pw", Action::Publish))
            .await
            .unwrap();
        assert_eq!(verdict, TierVerdict::NotMatched);
    }

    #[tokio::test]
    async fn product_refuses_wrong_password() {
        let store = MemoryStore::new().with_product("drone.example", "pw");
        let verdict = evaluate_product(&store, &request("drone.example", "nope", Action::Publish))
            .await
            .unwrap();
        assert_eq!(verdict, TierVerdict::Matched(Decision::DenyForbidden));
    }

    #[tokio::test]
    async fn product_allows_any_action() {
        let store = MemoryStore::new().with_product("drone.example", "pw");
        let verdict = evaluate_product(&store, &request("drone.example", "pw", Action::Api))
            .await
            .unwrap();
        assert_eq!(verdict, TierVerdict::Matched(Decision::Allow));
    }

    #[tokio::test]
    async fn deleted_product_is_absent() {
        let store = MemoryStore::new().with_deleted_product("retired.example", "pw");
        let verdict = evaluate_product(&store, &request("retired.example", "pw", Action::Read))
            .await
            .unwrap();
        assert_eq!(verdict, TierVerdict::NotMatched);
    }

    #[tokio::test]
    async fn user_admin_gate() {
        let store = MemoryStore::new()
            .with_user("alice", "pw", true)
            .with_user("bob", "pw", false);

        let verdict = evaluate_user(&store, &request("alice", "pw", Action::Metrics))
            .await
            .unwrap();
        assert_eq!(verdict, TierVerdict::Matched(Decision::Allow));

        let verdict = evaluate_user(&store, &request("bob", "pw", Action::Metrics))
            .await
            .unwrap();
        assert_eq!(verdict, TierVerdict::Matched(Decision::DenyForbidden));

        let verdict = evaluate_user(&store, &request("bob", "pw", Action::Read))
            .await
            .unwrap();
        assert_eq!(verdict, TierVerdict::Matched(Decision::Allow));
    }

    #[tokio::test]
    async fn user_wrong_password_is_forbidden() {
        let store = MemoryStore::new().with_user("alice", "pw", false);
        let verdict = evaluate_user(&store, &request("alice", "nope", Action::Read))
            .await
            .unwrap();
        assert_eq!(verdict, TierVerdict::Matched(Decision::DenyForbidden));
    }

    #[tokio::test]
    async fn deleted_user_is_absent() {
        let store = MemoryStore::new().with_deleted_user("mallory", "pw", true);
        let verdict = evaluate_user(&store, &request("mallory", "pw", Action::Read))
            .await
            .unwrap();
        assert_eq!(verdict, TierVerdict::NotMatched);
    }
}
