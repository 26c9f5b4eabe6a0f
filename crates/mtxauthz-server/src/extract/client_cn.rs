//! Proxy-forwarded client certificate identity.
//!
//! The service terminates no TLS itself. The fronting proxy verifies the
//! client certificate against the deployment CA and forwards the subject
//! common name in a trusted header; this extractor is the only place that
//! header is read.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::handler::{Error, ErrorKind};

/// Header carrying the verified client certificate common name.
pub const CLIENT_CN_HEADER: &str = "x-client-cert-cn";

const TRACING_TARGET: &str = "mtxauthz_server::extract::client_cn";

/// Verified certificate common name of the calling client.
///
/// Extraction fails with `401` when the header is absent or empty, which
/// means the request did not come through the mTLS-terminating proxy.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientCn(String);

impl ClientCn {
    /// Returns the common name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the owned common name.
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl<S> FromRequestParts<S> for ClientCn
where
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(CLIENT_CN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|cn| !cn.is_empty());

        match header {
            Some(cn) => Ok(Self(cn.to_owned())),
            None => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    "request without a proxy-forwarded client identity"
                );
                Err(ErrorKind::MissingClientIdentity.into_error())
            }
        }
    }
}

impl std::fmt::Display for ClientCn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
