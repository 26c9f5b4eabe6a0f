//! Webhook request payload sent by MediaMTX.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Action the caller wants to perform, as reported by MediaMTX.
///
/// Unknown or future action names deserialize as [`Action::Unspecified`]
/// rather than failing the request, so a gateway upgrade cannot lock
/// everyone out with a parse error.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[derive(strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    /// Publish a stream to a path.
    Publish,
    /// Read a live stream from a path.
    Read,
    /// Read a recorded stream.
    Playback,
    /// Access the MediaMTX control API.
    Api,
    /// Scrape the MediaMTX metrics endpoint.
    Metrics,
    /// Access the MediaMTX pprof endpoint.
    Pprof,
    /// Missing or unrecognized action.
    #[default]
    #[serde(other)]
    Unspecified,
}

impl Action {
    /// Returns `true` if the action is reserved for administrators.
    ///
    /// Unrecognized actions are deliberately not gated here: an unknown
    /// caller is refused by the chain anyway, and a known end user keeps
    /// working across gateway upgrades that add new media actions.
    #[inline]
    pub fn is_admin_gated(self) -> bool {
        matches!(self, Self::Api | Self::Metrics | Self::Pprof)
    }
}

/// Protocol the caller connected with, as reported by MediaMTX.
///
/// Purely informational: no tier gates on the protocol, it only adds
/// context to logs. Open for the same reason as [`Action`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[derive(strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Protocol {
    /// Real-Time Streaming Protocol.
    Rtsp,
    /// Real-Time Messaging Protocol.
    Rtmp,
    /// HTTP Live Streaming.
    Hls,
    /// WebRTC.
    Webrtc,
    /// Secure Reliable Transport.
    Srt,
    /// Missing or unrecognized protocol.
    #[default]
    #[serde(other)]
    Unspecified,
}

/// Authorization request body posted by MediaMTX to the webhook endpoint.
///
/// Every field is optional on the wire. Absent `user` and `password`
/// deserialize as empty strings and are refused before any lookup, the
/// remaining fields only add context to logs.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct AuthRequest {
    /// Username presented by the caller.
    pub user: String,
    /// Password presented by the caller.
    pub password: String,
    /// Remote address of the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Stream path the caller is addressing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Protocol the caller connected with.
    pub protocol: Protocol,
    /// Connection identifier assigned by MediaMTX.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Raw query string of the caller's request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Requested action.
    pub action: Action,
}

impl AuthRequest {
    /// Returns `true` if the caller presented no usable credentials.
    ///
    /// MediaMTX probes every endpoint anonymously first and retries with
    /// credentials after a `401`, so this is the common case.
    #[inline]
    pub fn has_empty_credentials(&self) -> bool {
        self.user.is_empty() || self.password.is_empty()
    }
}
