//! Handler error types and conversions from collaborator errors.

mod http_error;
mod mtx_error;
mod pg_error;
mod store_error;

pub use crate::handler::error::http_error::{Error, ErrorKind, Result};
