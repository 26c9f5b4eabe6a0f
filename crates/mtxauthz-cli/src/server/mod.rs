//! HTTP server startup with lifecycle management and graceful shutdown.

mod error;
mod http_server;
mod shutdown;

use axum::Router;

pub use crate::server::error::{ServerError, ServerResult};
use crate::server::http_server::serve_http;

use crate::config::ServerConfig;

/// Starts the HTTP server with the provided configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Cannot bind to the specified address/port
/// - Server encounters a fatal error during operation
pub async fn serve(app: Router, config: ServerConfig) -> ServerResult<()> {
    serve_http(app, config).await
}
