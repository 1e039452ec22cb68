//! Classic mobile device provisioning profiles.

use serde::{Deserialize, Serialize};

use crate::common::ListItem;

/// `GET /JSSResource/mobiledeviceprovisioningprofiles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "mobile_device_provisioning_profiles")]
pub struct MobileDeviceProvisioningProfilesList {
    #[serde(default)]
    pub size: i64,
    #[serde(rename = "mobile_device_provisioning_profile", default)]
    pub profiles: Vec<ListItem>,
}

/// An in-house app provisioning profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "mobile_device_provisioning_profile")]
pub struct MobileDeviceProvisioningProfile {
    pub general: ProvisioningProfileGeneral,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisioningProfileGeneral {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Profile UUID; also addresses the profile in `…/uuid/<uuid>` paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

impl MobileDeviceProvisioningProfile {
    /// Profile with a name and UUID.
    pub fn new(name: impl Into<String>, uuid: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            general: ProvisioningProfileGeneral {
                id: None,
                display_name: Some(name.clone()),
                name,
                uuid: Some(uuid.into()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jamfpro_client::Codec;

    #[test]
    fn test_profile_round_trip() {
        let profile =
            MobileDeviceProvisioningProfile::new("in-house app profile", "116AF1E6-7EB5-4335-B598-276CDE5E015B");
        let xml = Codec::Xml.encode(&profile).unwrap();
        assert_eq!(
            std::str::from_utf8(&xml).unwrap(),
            "<mobile_device_provisioning_profile><general>\
             <name>in-house app profile</name>\
             <display_name>in-house app profile</display_name>\
             <uuid>116AF1E6-7EB5-4335-B598-276CDE5E015B</uuid>\
             </general></mobile_device_provisioning_profile>"
        );

        let decoded: MobileDeviceProvisioningProfile = Codec::Xml.decode(&xml).unwrap();
        assert_eq!(decoded, profile);
    }
}
