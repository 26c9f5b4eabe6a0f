//! Streaming protocol endpoint table and URL construction.
//!
//! MediaMTX exposes every path over several protocols at fixed ports. Only
//! the encrypted variants are published to users; the plaintext listeners
//! stay behind the deployment firewall.

use std::collections::BTreeMap;

/// A protocol endpoint users can publish to or play from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum StreamProtocol {
    /// HTTP Live Streaming over TLS.
    Hls,
    /// WebRTC signalling over TLS.
    Webrtc,
    /// RTSP over TLS.
    Rtsps,
    /// RTMP over TLS.
    Rtmps,
    /// Secure Reliable Transport (encryption is part of the handshake).
    Srt,
}

impl StreamProtocol {
    /// URL scheme for this protocol.
    pub fn scheme(self) -> &'static str {
        match self {
            Self::Hls | Self::Webrtc => "https",
            Self::Rtsps => "rtsps",
            Self::Rtmps => "rtmps",
            Self::Srt => "srt",
        }
    }

    /// Listener port MediaMTX serves this protocol on.
    pub fn port(self) -> u16 {
        match self {
            Self::Hls => 9888,
            Self::Webrtc => 9889,
            Self::Rtsps => 8322,
            Self::Rtmps => 1937,
            Self::Srt => 8890,
        }
    }

    /// Builds the full URL for a stream path.
    ///
    /// `credentials` must be empty or `username:password@`; `path` must
    /// carry its leading slash.
    pub fn url(self, credentials: &str, host: &str, path: &str) -> String {
        format!(
            "{}://{credentials}{host}:{}{path}",
            self.scheme(),
            self.port()
        )
    }
}

/// Builds the per-protocol URL map for one stream path.
pub fn stream_urls(credentials: &str, host: &str, path: &str) -> BTreeMap<String, String> {
    use strum::IntoEnumIterator;

    StreamProtocol::iter()
        .map(|protocol| (protocol.to_string(), protocol.url(credentials, host, path)))
        .collect()
}
