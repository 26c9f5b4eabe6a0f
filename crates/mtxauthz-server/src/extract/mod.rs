//! Request extractors used by the handlers.

mod client_cn;
mod json;

pub use crate::extract::client_cn::{CLIENT_CN_HEADER, ClientCn};
pub use crate::extract::json::Json;
