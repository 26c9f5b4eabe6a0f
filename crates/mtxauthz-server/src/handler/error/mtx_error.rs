//! MediaMTX control API error to HTTP error conversion.
//!
//! The control API is an upstream dependency of the stream-listing endpoint
//! only, so its failures render as `502` rather than `500`.

use crate::handler::{Error, ErrorKind};
use crate::mtx::MtxError;

const TRACING_TARGET: &str = "mtxauthz_server::handler::mtx_error";

impl From<MtxError> for Error<'static> {
    fn from(error: MtxError) -> Self {
        match error {
            MtxError::BaseUrl(ref url_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %url_error,
                    "control API base URL is invalid"
                );
                ErrorKind::InternalServerError.into_error()
            }
            MtxError::Request(ref request_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %request_error,
                    "control API request failed"
                );
                ErrorKind::BadGateway.into_error()
            }
            MtxError::Status(status) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    status = status.as_u16(),
                    "control API returned an error status"
                );
                ErrorKind::BadGateway.into_error()
            }
        }
    }
}
