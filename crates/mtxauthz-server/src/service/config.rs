//! Service-level configuration.

use std::fmt;

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::authz::{IntegrationAccount, PLACEHOLDER_PASSWORD};
use crate::service::TRACING_TARGET;

/// Deploy-time settings of the authorization service.
///
/// Everything here is read once at startup and immutable afterwards. The
/// integration password defaults to the shipped placeholder, which the
/// chain refuses to authorize; deployments must rotate it before the
/// webhook grants anything to the integration account.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct ServiceConfig {
    /// Username of the integration account MediaMTX authenticates with.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "integration-username",
            env = "MTX_INTEGRATION_USERNAME",
            default_value = "rmmtxauthz"
        )
    )]
    pub integration_username: String,

    /// Password of the integration account.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "integration-password",
            env = "MTX_INTEGRATION_PASSWORD",
            default_value = PLACEHOLDER_PASSWORD,
            hide_env_values = true
        )
    )]
    pub integration_password: String,

    /// Certificate common name of the identity authority.
    ///
    /// The authority calls the management endpoints through the proxy but
    /// never owns a product or user account, so its CN is refused on the
    /// account-facing read endpoints.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "authority-cn",
            env = "MTX_AUTHORITY_CN",
            default_value = "rasenmaeher"
        )
    )]
    pub authority_cn: String,

    /// Base URL of the MediaMTX control API.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "control-url",
            env = "MTX_CONTROL_URL",
            default_value = "http://localhost:9997"
        )
    )]
    pub control_url: String,

    /// Public hostname embedded in stream URLs.
    ///
    /// When unset, the stream-listing endpoint falls back to the request's
    /// `Host` header.
    #[cfg_attr(
        feature = "config",
        arg(long = "public-address", env = "MTX_PUBLIC_ADDRESS")
    )]
    pub public_address: Option<String>,
}

impl ServiceConfig {
    /// Returns the configured integration account.
    pub fn integration_account(&self) -> IntegrationAccount {
        IntegrationAccount::new(&self.integration_username, &self.integration_password)
    }

    /// Validates all configuration values.
    ///
    /// The placeholder password is deliberately NOT a validation error: the
    /// service must boot with it so the rest of the deployment can come up,
    /// while the chain refuses the account until the secret is rotated.
    pub fn validate(&self) -> Result<(), String> {
        if self.integration_username.is_empty() {
            return Err("integration username must not be empty".to_owned());
        }

        if self.authority_cn.is_empty() {
            return Err("authority CN must not be empty".to_owned());
        }

        if let Err(parse_error) = url::Url::parse(&self.control_url) {
            return Err(format!(
                "control URL '{}' is invalid: {parse_error}",
                self.control_url
            ));
        }

        if self.integration_password == PLACEHOLDER_PASSWORD {
            tracing::warn!(
                target: TRACING_TARGET,
                "integration password is still the factory default, the integration tier will refuse all requests"
            );
        }

        Ok(())
    }

    /// Sets the integration credentials.
    pub fn with_integration_account(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.integration_username = username.into();
        self.integration_password = password.into();
        self
    }

    /// Sets the identity authority common name.
    pub fn with_authority_cn(mut self, authority_cn: impl Into<String>) -> Self {
        self.authority_cn = authority_cn.into();
        self
    }

    /// Sets the control API base URL.
    pub fn with_control_url(mut self, control_url: impl Into<String>) -> Self {
        self.control_url = control_url.into();
        self
    }

    /// Sets the public hostname for stream URLs.
    pub fn with_public_address(mut self, public_address: impl Into<String>) -> Self {
        self.public_address = Some(public_address.into());
        self
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            integration_username: "rmmtxauthz".to_owned(),
            integration_password: PLACEHOLDER_PASSWORD.to_owned(),
            authority_cn: "rasenmaeher".to_owned(),
            control_url: "http://localhost:9997".to_owned(),
            public_address: None,
        }
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("integration_username", &self.integration_username)
            .field("integration_password", &"***")
            .field("authority_cn", &self.authority_cn)
            .field("control_url", &self.control_url)
            .field("public_address", &self.public_address)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = ServiceConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.integration_account().has_placeholder_password());
    }

    #[test]
    fn rejects_empty_username() {
        let config = ServiceConfig::default().with_integration_account("", "pw");
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_unparseable_control_url() {
        let config = ServiceConfig::default().with_control_url("not a url");
        assert!(config.validate().is_err());
    }

    #[test]
    fn builders_apply() {
        let config = ServiceConfig::default()
            .with_integration_account("mtx", "s3cret")
            .with_authority_cn("authority.example")
            .with_public_address("stream.example.tld");

        assert_eq!(config.integration_account().username(), "mtx");
        assert!(!config.integration_account().has_placeholder_password());
        assert_eq!(config.authority_cn, "authority.example");
        assert_eq!(config.public_address.as_deref(), Some("stream.example.tld"));
    }

    #[test]
    fn debug_redacts_password() {
        let config = ServiceConfig::default().with_integration_account("mtx", "s3cret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("s3cret"));
    }
}
