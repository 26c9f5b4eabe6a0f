//! Response type for the health endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health report consumed by container orchestration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Whether the service and its database answer queries.
    pub healthy: bool,
    /// Number of active user accounts visible to authorization.
    pub users: i64,
}

impl HealthResponse {
    /// Reports a working database with the given account count.
    #[inline]
    pub fn healthy(users: i64) -> Self {
        Self {
            healthy: true,
            users,
        }
    }

    /// Reports an unreachable database.
    #[inline]
    pub fn unhealthy() -> Self {
        Self {
            healthy: false,
            users: 0,
        }
    }
}
