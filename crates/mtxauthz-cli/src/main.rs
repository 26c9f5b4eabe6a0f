#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use anyhow::Context;
use axum::Router;
use mtxauthz_postgres::{PgClient, run_pending_migrations};
use mtxauthz_server::handler::routes;
use mtxauthz_server::middleware::RouterExt;
use mtxauthz_server::service::ServiceState;

use crate::config::Cli;

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "mtxauthz_cli::server::startup";
pub const TRACING_TARGET_SHUTDOWN: &str = "mtxauthz_cli::server::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "mtxauthz_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    Cli::init_tracing();
    cli.log();
    cli.validate()?;

    let state = create_service_state(&cli).await?;
    let router = create_router(state, &cli);

    server::serve(router, cli.server).await?;

    Ok(())
}

/// Creates the service state: connects to the database, runs pending
/// migrations and wires the MediaMTX control API client.
async fn create_service_state(cli: &Cli) -> anyhow::Result<ServiceState> {
    let pg_client = PgClient::new_with_test(cli.postgres.clone())
        .await
        .context("failed to connect to the database")?;

    let report = run_pending_migrations(&pg_client)
        .await
        .context("failed to run database migrations")?;
    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        applied = report.applied_migrations(),
        "database ready"
    );

    ServiceState::with_postgres(cli.service.clone(), pg_client)
        .context("failed to create service state")
}

/// Creates the router with all middleware layers applied.
///
/// Middleware is applied in reverse order (last added = outermost):
/// 1. Error handling (outermost) - catches panics and enforces timeouts
/// 2. Observability - request IDs and tracing spans
/// 3. Routes (innermost) - actual request handlers
fn create_router(state: ServiceState, cli: &Cli) -> Router {
    routes(state)
        .with_observability_layer()
        .with_error_handling_layer(cli.server.request_timeout())
}
