//! MediaMTX control API client and stream URL construction.
//!
//! Consumed only by the stream-listing endpoint; the authorization chain
//! never talks to MediaMTX.

mod client;
mod error;
mod protocols;

pub use crate::mtx::client::{MtxClient, MtxPath};
pub use crate::mtx::error::{MtxError, MtxResult};
pub use crate::mtx::protocols::{StreamProtocol, stream_urls};

pub(crate) const TRACING_TARGET: &str = "mtxauthz_server::mtx";
