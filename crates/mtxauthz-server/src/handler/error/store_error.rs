//! Account store error to HTTP error conversion.
//!
//! A store outage must surface as a server error, never as a `401`/`403`,
//! otherwise an availability problem would masquerade as a revocation.

use crate::authz::StoreError;
use crate::handler::{Error, ErrorKind};

const TRACING_TARGET: &str = "mtxauthz_server::handler::store_error";

impl From<StoreError> for Error<'static> {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Unavailable(source) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %source,
                    "account store unavailable"
                );
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_outage_is_internal_not_deny() {
        let error: Error<'_> = StoreError::unavailable("connection refused").into();
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
    }
}
