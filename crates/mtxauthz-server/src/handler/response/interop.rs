//! Response type for the product interop endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Basic-auth grant a delegated product presents to MediaMTX.
///
/// The `kind` field is serialized as `type` and is always `basic`; it exists
/// so product integrations can dispatch on the grant shape without guessing.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthzGrantResponse {
    /// Grant kind, always `basic` for this service.
    #[serde(rename = "type")]
    pub kind: String,
    /// Username for basic auth (the product certificate CN).
    pub username: String,
    /// Password for basic auth.
    pub password: String,
}

impl AuthzGrantResponse {
    /// Creates a basic-auth grant for the given credentials.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            kind: "basic".to_owned(),
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for AuthzGrantResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthzGrantResponse")
            .field("kind", &self.kind)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
