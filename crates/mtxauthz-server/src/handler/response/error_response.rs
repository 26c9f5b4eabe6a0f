use std::borrow::Cow;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Serialized shape of every error the service returns.
///
/// The webhook contract is status-driven, so the body exists for operators
/// and API consumers, not for MediaMTX. Which credential tier produced a
/// refusal is deliberately absent; that detail lives in logs only.
#[must_use = "error responses do nothing unless serialized"]
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse<'a> {
    /// Stable error identifier, e.g. `forbidden`.
    pub name: Cow<'a, str>,
    /// Human-readable message safe to show to the caller.
    pub message: Cow<'a, str>,
    /// Additional context attached by the handler (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Cow<'a, str>>,
    /// HTTP status code (not serialized in JSON).
    #[serde(skip)]
    pub status: StatusCode,
}

impl<'a> ErrorResponse<'a> {
    // 4xx Client Errors
    pub const BAD_REQUEST: Self = Self::new(
        "bad_request",
        "The request could not be processed due to invalid data",
        StatusCode::BAD_REQUEST,
    );
    // 5xx Server Errors
    pub const BAD_GATEWAY: Self = Self::new(
        "bad_gateway",
        "An upstream service did not answer correctly",
        StatusCode::BAD_GATEWAY,
    );
    pub const FORBIDDEN: Self = Self::new(
        "forbidden",
        "You don't have permission to perform this action",
        StatusCode::FORBIDDEN,
    );
    pub const INTERNAL_SERVER_ERROR: Self = Self::new(
        "internal_server_error",
        "An internal server error occurred. Please try again later",
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    pub const MISSING_CLIENT_IDENTITY: Self = Self::new(
        "missing_client_identity",
        "No client certificate identity was presented",
        StatusCode::UNAUTHORIZED,
    );
    pub const NOT_FOUND: Self = Self::new(
        "not_found",
        "The requested resource was not found",
        StatusCode::NOT_FOUND,
    );
    pub const UNAUTHORIZED: Self = Self::new(
        "unauthorized",
        "Invalid or missing credentials",
        StatusCode::UNAUTHORIZED,
    );

    /// Creates a new error response.
    #[inline]
    pub const fn new(name: &'a str, message: &'a str, status: StatusCode) -> Self {
        Self {
            name: Cow::Borrowed(name),
            message: Cow::Borrowed(message),
            context: None,
            status,
        }
    }

    /// Replaces the default message with a handler-provided one.
    pub fn with_message(mut self, message: impl Into<Cow<'a, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Attaches context to the error response.
    /// If context already exists, it merges them with a separator.
    pub fn with_context(mut self, context: impl Into<Cow<'a, str>>) -> Self {
        let new_context = context.into();
        self.context = Some(match self.context {
            Some(existing) => Cow::Owned(format!("{existing}; {new_context}")),
            None => new_context,
        });
        self
    }
}

impl Default for ErrorResponse<'_> {
    #[inline]
    fn default() -> Self {
        Self::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ErrorResponse<'_> {
    #[inline]
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_repeated_context() {
        let response = ErrorResponse::INTERNAL_SERVER_ERROR
            .with_context("pool exhausted")
            .with_context("after 3 seconds");

        assert_eq!(
            response.context.as_deref(),
            Some("pool exhausted; after 3 seconds")
        );
    }

    #[test]
    fn custom_message_replaces_default() {
        let response = ErrorResponse::BAD_REQUEST.with_message("Body is not JSON");
        assert_eq!(&response.message, "Body is not JSON");
    }

    #[test]
    fn status_is_not_serialized() {
        let json = serde_json::to_value(ErrorResponse::FORBIDDEN).unwrap();
        assert_eq!(json["name"], "forbidden");
        assert!(json.get("status").is_none());
        assert!(json.get("context").is_none());
    }
}
