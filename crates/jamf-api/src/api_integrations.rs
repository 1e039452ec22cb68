//! Jamf Pro API integrations: OAuth clients bound to API roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An API integration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiIntegration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Display names of the API roles granted to this integration.
    #[serde(default)]
    pub authorization_scopes: Vec<String>,
    pub display_name: String,
    #[serde(default)]
    pub enabled: bool,
    pub access_token_lifetime_seconds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

/// Freshly generated OAuth client credentials.
///
/// The secret is only ever returned once, by
/// `POST /api/v1/api-integrations/<id>/client-credentials`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jamfpro_client::Codec;

    #[test]
    fn test_integration_json_names() {
        let integration: ApiIntegration = Codec::Json
            .decode(
                br#"{"id":3,"authorizationScopes":["Read Sites"],"displayName":"ci","enabled":true,
                    "accessTokenLifetimeSeconds":300,"appType":"CLIENT_CREDENTIALS",
                    "clientId":"4b2f","lastModified":"2024-01-01"}"#,
            )
            .unwrap();
        assert_eq!(integration.id, Some(3));
        assert_eq!(integration.access_token_lifetime_seconds, 300);
        assert_eq!(integration.client_id.as_deref(), Some("4b2f"));
    }

    #[test]
    fn test_client_credentials_debug_redacts_secret() {
        let credentials = ClientCredentials {
            client_id: "4b2f".to_string(),
            client_secret: "s3cr3t".to_string(),
        };
        let rendered = format!("{:?}", credentials);
        assert!(rendered.contains("4b2f"));
        assert!(!rendered.contains("s3cr3t"));
    }
}
