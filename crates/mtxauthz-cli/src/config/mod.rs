//! CLI configuration management.
//!
//! The complete configuration hierarchy:
//!
//! ```text
//! Cli
//! ├── server: ServerConfig    # Host, port, timeouts
//! ├── service: ServiceConfig  # Integration account, authority CN, MediaMTX
//! └── postgres: PgConfig      # Database URL and pool settings
//! ```
//!
//! All configuration can be provided via CLI arguments or environment
//! variables. Use `--help` to see all available options.

mod server;

use std::process;

use anyhow::Context;
use clap::Parser;
use mtxauthz_postgres::PgConfig;
use mtxauthz_server::service::ServiceConfig;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use crate::config::server::ServerConfig;
use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_STARTUP};

/// Complete CLI configuration.
///
/// Combines all configuration groups of the authorization webhook:
/// - [`ServerConfig`]: Network binding and timeouts
/// - [`ServiceConfig`]: Integration account, authority CN, MediaMTX control API
/// - [`PgConfig`]: Database connection and pool settings
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "mtxauthz")]
#[command(about = "MediaMTX authorization webhook server")]
#[command(version)]
pub struct Cli {
    /// Server network and lifecycle configuration.
    #[clap(flatten)]
    pub server: ServerConfig,

    /// Authorization service configuration.
    #[clap(flatten)]
    pub service: ServiceConfig,

    /// Database connection configuration.
    #[clap(flatten)]
    pub postgres: PgConfig,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    ///
    /// Preferred over a bare `parse` so .env files are loaded before clap
    /// reads the environment.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Initializes tracing with environment-based filtering.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.server
            .validate()
            .context("invalid server configuration")?;
        self.service
            .validate()
            .map_err(anyhow::Error::msg)
            .context("invalid service configuration")?;
        self.postgres
            .validate()
            .context("invalid database configuration")?;
        Ok(())
    }

    /// Logs configuration at startup (no sensitive information).
    pub fn log(&self) {
        Self::log_build_info();
        self.server.log();

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            integration_username = %self.service.integration_username,
            authority_cn = %self.service.authority_cn,
            control_url = %self.service.control_url,
            public_address = ?self.service.public_address,
            "service configuration"
        );

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            postgres_url = %self.postgres.database_url_masked(),
            postgres_max_connections = self.postgres.postgres_max_connections,
            postgres_connection_timeout_secs = ?self.postgres.postgres_connection_timeout_secs,
            postgres_idle_timeout_secs = ?self.postgres.postgres_idle_timeout_secs,
            "database configuration"
        );
    }

    /// Logs build information at debug level.
    fn log_build_info() {
        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            features = ?Self::enabled_features(),
            "build information"
        );
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [cfg!(feature = "dotenv").then_some("dotenv")]
            .into_iter()
            .flatten()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_arguments_are_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_parse_and_validate() {
        let cli = Cli::try_parse_from(["mtxauthz", "--postgres-url", "postgresql://localhost/db"])
            .expect("defaults should parse");
        assert!(cli.validate().is_ok());
        assert_eq!(cli.server.port, 8080);
        assert_eq!(cli.service.integration_username, "rmmtxauthz");
    }
}
