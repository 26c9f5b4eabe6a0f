//! Observability middleware: request IDs and structured request logging.

mod tracing;

pub use crate::middleware::observability::tracing::{
    create_propagate_request_id_layer, create_request_id_layer, create_sensitive_headers_layer,
    create_trace_layer,
};
