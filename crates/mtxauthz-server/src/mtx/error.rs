//! Control API error type.

use axum::http::StatusCode;

/// Specialized [`Result`] type for control API calls.
///
/// [`Result`]: std::result::Result
pub type MtxResult<T, E = MtxError> = std::result::Result<T, E>;

/// Error returned by the MediaMTX control API client.
#[derive(Debug, thiserror::Error)]
#[must_use = "control API errors should be handled appropriately"]
pub enum MtxError {
    /// The configured control API base URL does not parse.
    #[error("invalid control API base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// The HTTP request failed or the response body did not decode.
    #[error("control API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The control API answered with a non-success status.
    #[error("control API returned status {0}")]
    Status(StatusCode),
}
