//! Middleware for `axum::Router` and HTTP request processing.
//!
//! The webhook sits between MediaMTX and the database, so the stack is
//! deliberately small:
//! - Error handling (panics, timeouts, service errors)
//! - Observability (request IDs, structured request logging)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use axum::Router;
//! use mtxauthz_server::middleware::RouterExt;
//!
//! let app: Router = Router::new()
//!     .with_error_handling_layer(Duration::from_secs(30))
//!     .with_observability_layer();
//! ```

mod error_handling;
mod extensions;
mod observability;

pub use crate::middleware::extensions::RouterExt;

pub(crate) const TRACING_TARGET: &str = "mtxauthz_server::middleware";
