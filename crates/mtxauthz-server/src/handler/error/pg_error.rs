//! Database error to HTTP error conversion.
//!
//! Every database failure is an infrastructure problem from the caller's
//! point of view, so all variants collapse into a 500. The distinction
//! between them survives in the logs.

use mtxauthz_postgres::PgError;

use crate::handler::{Error, ErrorKind};

const TRACING_TARGET: &str = "mtxauthz_server::handler::pg_error";

impl From<PgError> for Error<'static> {
    fn from(error: PgError) -> Self {
        match error {
            PgError::Config(config_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %config_error,
                    "database configuration error"
                );
            }
            PgError::Timeout(timeout) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    timeout = ?timeout,
                    "database timeout"
                );
            }
            PgError::Connection(connection_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %connection_error,
                    "database connection error"
                );
            }
            PgError::Migration(migration_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %migration_error,
                    "database migration error"
                );
            }
            PgError::Query(query_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %query_error,
                    "query error"
                );
            }
            PgError::Unexpected(unexpected_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %unexpected_error,
                    "unexpected database error"
                );
            }
        }

        ErrorKind::InternalServerError.into_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_database_errors_are_internal() {
        let error: Error<'_> = PgError::Config("bad url".to_owned()).into();
        assert_eq!(error.kind(), ErrorKind::InternalServerError);

        let error: Error<'_> = PgError::Unexpected("pool gone".into()).into();
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
    }
}
