//! HTTP client for the MediaMTX control API.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use url::Url;

use crate::authz::IntegrationAccount;
use crate::mtx::{MtxError, MtxResult, TRACING_TARGET};

/// Page size for path listing. One page covers any realistic deployment.
const PATHS_PAGE_SIZE: u32 = 1000;

/// Client for the MediaMTX control API.
///
/// Authenticates with the integration account, the same credentials
/// MediaMTX accepts through the authorization webhook. Cheap to clone.
#[derive(Clone)]
pub struct MtxClient {
    inner: Arc<MtxClientInner>,
}

struct MtxClientInner {
    http: reqwest::Client,
    base_url: Url,
    integration: IntegrationAccount,
}

/// One active path as reported by the control API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MtxPath {
    /// Path name without a leading slash, e.g. `live/drone1`.
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct PathList {
    items: Vec<MtxPath>,
}

impl MtxClient {
    /// Creates a new control API client.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` does not parse as an absolute URL.
    pub fn new(base_url: &str, integration: IntegrationAccount) -> MtxResult<Self> {
        let base_url = Url::parse(base_url)?;

        tracing::debug!(
            target: TRACING_TARGET,
            base_url = %base_url,
            "initialized control API client"
        );

        Ok(Self {
            inner: Arc::new(MtxClientInner {
                http: reqwest::Client::new(),
                base_url,
                integration,
            }),
        })
    }

    /// Lists the currently active stream paths.
    #[tracing::instrument(skip_all)]
    pub async fn list_paths(&self) -> MtxResult<Vec<MtxPath>> {
        let url = self.inner.base_url.join("/v3/paths/list")?;

        let response = self
            .inner
            .http
            .get(url)
            .query(&[("itemsPerPage", PATHS_PAGE_SIZE)])
            .basic_auth(
                self.inner.integration.username(),
                Some(self.inner.integration.password()),
            )
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MtxError::Status(status));
        }

        let paths = response.json::<PathList>().await?;

        tracing::debug!(
            target: TRACING_TARGET,
            count = paths.items.len(),
            "listed active paths"
        );
        Ok(paths.items)
    }
}

impl fmt::Debug for MtxClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MtxClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("username", &self.inner.integration.username())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> MtxClient {
        let integration = IntegrationAccount::new("rmmtxauthz", "s3cret");
        MtxClient::new("http://localhost:9997", integration).unwrap()
    }

    #[test]
    fn rejects_relative_base_url() {
        let integration = IntegrationAccount::new("rmmtxauthz", "s3cret");
        let result = MtxClient::new("/v3/paths/list", integration);
        assert!(result.is_err());
    }

    #[test]
    fn debug_omits_password() {
        let debug = format!("{:?}", client());
        assert!(debug.contains("localhost:9997"));
        assert!(!debug.contains("s3cret"));
    }

    #[test]
    fn deserializes_path_list() {
        let payload = serde_json::json!({
            "itemCount": 2,
            "pageCount": 1,
            "items": [
                {"name": "live/drone1", "ready": true},
                {"name": "live/drone2", "ready": false},
            ],
        });

        let list: PathList = serde_json::from_value(payload).unwrap();
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].name, "live/drone1");
    }
}
