//! Error handling middleware for transforming errors into responses.

mod handlers;
mod panic;

pub use crate::middleware::error_handling::handlers::handle_error;
pub use crate::middleware::error_handling::panic::catch_panic;
