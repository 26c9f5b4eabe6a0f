//! Response DTOs returned by the handlers.

mod error_response;
mod interop;
mod monitors;
mod users;

pub use crate::handler::response::error_response::ErrorResponse;
pub use crate::handler::response::interop::AuthzGrantResponse;
pub use crate::handler::response::monitors::HealthResponse;
pub use crate::handler::response::users::{StreamResponse, UserCredentialsResponse};
