//! Response types for the end-user read endpoints.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Streaming credentials of the calling user.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserCredentialsResponse {
    /// MediaMTX username.
    pub username: String,
    /// MediaMTX password.
    pub password: String,
}

impl fmt::Debug for UserCredentialsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCredentialsResponse")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// One active stream path with ready-to-open URLs per protocol.
///
/// URLs embed the calling user's own credentials, so the response is as
/// sensitive as the credentials endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StreamResponse {
    /// Stream path with a leading slash, e.g. `/live/drone1`.
    pub path: String,
    /// Protocol name to playback/publish URL.
    pub urls: BTreeMap<String, String>,
}
