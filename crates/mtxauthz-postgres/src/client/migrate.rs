//! Database migration management.
//!
//! Migrations are embedded into the binary at compile time and applied at
//! service startup, before the HTTP listener binds.

use std::time::{Duration, Instant};

use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::MigrationHarness;
use tokio::task::spawn_blocking;

use crate::{MIGRATIONS, PgClient, PgError, PgResult, TRACING_TARGET_MIGRATION};

/// Summary of a completed migration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    /// Total duration of the migration run
    pub duration: Duration,
    /// Migration versions applied during this run, in order
    pub applied_versions: Vec<String>,
}

impl MigrationReport {
    /// Returns the number of migrations applied during this run.
    #[inline]
    pub fn applied_migrations(&self) -> usize {
        self.applied_versions.len()
    }

    /// Returns whether the run applied no migrations.
    #[inline]
    pub fn is_no_op(&self) -> bool {
        self.applied_versions.is_empty()
    }
}

/// Runs all pending migrations on the database.
///
/// Diesel's migration harness is synchronous, so the pooled connection is
/// wrapped into an [`AsyncConnectionWrapper`] and driven on a blocking task.
#[tracing::instrument(skip(pg), target = TRACING_TARGET_MIGRATION)]
pub async fn run_pending_migrations(pg: &PgClient) -> PgResult<MigrationReport> {
    tracing::info!(
        target: TRACING_TARGET_MIGRATION,
        "Starting database migration process",
    );

    let start_time = Instant::now();
    let conn = pg.get_pooled_connection().await?;

    let mut conn: AsyncConnectionWrapper<_> = conn.into();
    let results = spawn_blocking(move || {
        conn.run_pending_migrations(MIGRATIONS).map(|versions| {
            versions
                .into_iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
        })
    })
    .await;

    let duration = start_time.elapsed();
    let results = results.map_err(|err| {
        tracing::error!(
            target: TRACING_TARGET_MIGRATION,
            duration = ?duration,
            error = %err,
            "Migration task panicked, join error occurred"
        );

        PgError::Migration(err.into())
    })?;

    let applied_versions = results.map_err(|err| {
        tracing::error!(
            target: TRACING_TARGET_MIGRATION,
            duration = ?duration,
            error = %err,
            "Database migration process failed"
        );

        PgError::Migration(err)
    })?;

    if applied_versions.is_empty() {
        tracing::info!(
            target: TRACING_TARGET_MIGRATION,
            duration = ?duration,
            "Database schema is already up to date, no migrations to apply"
        );
    } else {
        tracing::info!(
            target: TRACING_TARGET_MIGRATION,
            duration = ?duration,
            migrations_count = applied_versions.len(),
            "Database migration process completed successfully"
        );
    }

    Ok(MigrationReport {
        duration,
        applied_versions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counters() {
        let report = MigrationReport {
            duration: Duration::from_millis(10),
            applied_versions: vec![],
        };
        assert!(report.is_no_op());
        assert_eq!(report.applied_migrations(), 0);

        let report = MigrationReport {
            duration: Duration::from_millis(10),
            applied_versions: vec!["2025-06-01-000000".to_string()],
        };
        assert!(!report.is_no_op());
        assert_eq!(report.applied_migrations(), 1);
    }
}
