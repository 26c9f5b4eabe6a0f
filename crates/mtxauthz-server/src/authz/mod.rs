//! Credential tiers and the ordered authorization chain.
//!
//! Every decision the server makes flows through [`authorize`], which walks
//! the three credential tiers in a fixed order and stops at the first tier
//! that recognizes the caller:
//!
//! 1. Integration account, configured at deploy time.
//! 2. Delegated-product account, keyed by certificate common name.
//! 3. End-user account, keyed by username.
//!
//! A request that no tier recognizes is refused. There is no implicit allow.

mod chain;
mod decision;
mod request;
mod store;
#[cfg(test)]
pub(crate) mod testing;
mod tiers;

use std::fmt;

pub use crate::authz::chain::authorize;
pub use crate::authz::decision::{Decision, TierVerdict};
pub use crate::authz::request::{Action, AuthRequest, Protocol};
pub use crate::authz::store::{AccountStore, Lookup, SharedAccountStore, StoreError};

pub(crate) const TRACING_TARGET: &str = "mtxauthz_server::authz";

/// Factory-default password that must be rotated before the integration
/// account is usable. Requests presenting it are always refused.
pub const PLACEHOLDER_PASSWORD: &str = "CHANGEME";

/// Deploy-time credentials of the media gateway integration itself.
///
/// MediaMTX presents these when calling back into the platform, and the
/// server presents them when calling the MediaMTX control API.
#[derive(Clone, PartialEq, Eq)]
pub struct IntegrationAccount {
    username: String,
    password: String,
}

impl IntegrationAccount {
    /// Creates a new [`IntegrationAccount`].
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the account username.
    #[inline]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the account password.
    #[inline]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns `true` if the password is still the factory default.
    #[inline]
    pub fn has_placeholder_password(&self) -> bool {
        self.password == PLACEHOLDER_PASSWORD
    }
}

impl fmt::Debug for IntegrationAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntegrationAccount")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_password_is_flagged() {
        let account = IntegrationAccount::new("rmmtxauthz", PLACEHOLDER_PASSWORD);
        assert!(account.has_placeholder_password());

        let account = IntegrationAccount::new("rmmtxauthz", "s3cret");
        assert!(!account.has_placeholder_password());
    }

    #[test]
    fn debug_redacts_password() {
        let account = IntegrationAccount::new("rmmtxauthz", "s3cret");
        let debug = format!("{account:?}");
        assert!(debug.contains("rmmtxauthz"));
        assert!(!debug.contains("s3cret"));
    }
}
