//! Jamf Pro API roles: named privilege sets assigned to API integrations.

use serde::{Deserialize, Serialize};

/// An API role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRole {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub display_name: String,
    #[serde(default)]
    pub privileges: Vec<String>,
}

impl ApiRole {
    /// New role with the given privileges.
    pub fn new<I, S>(display_name: impl Into<String>, privileges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: None,
            display_name: display_name.into(),
            privileges: privileges.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jamfpro_client::Codec;

    #[test]
    fn test_new_role_omits_id() {
        let role = ApiRole::new("Read Sites", ["Read Sites"]);
        let json = Codec::Json.encode(&role).unwrap();
        assert_eq!(
            &json[..],
            br#"{"displayName":"Read Sites","privileges":["Read Sites"]}"#
        );
        let decoded: ApiRole = Codec::Json.decode(&json).unwrap();
        assert_eq!(decoded, role);
    }
}
