//! Jamf Pro SSO failover URL.

use serde::{Deserialize, Serialize};

/// Login URL that bypasses SSO, and when it was generated (epoch millis).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SsoFailover {
    pub failover_url: String,
    pub generation_time: i64,
}
