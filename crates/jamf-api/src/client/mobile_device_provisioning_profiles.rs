use tracing::instrument;

use jamfpro_client::security::path as path_security;
use jamfpro_client::Result;

use crate::mobile_device_provisioning_profiles::{
    MobileDeviceProvisioningProfile, MobileDeviceProvisioningProfilesList,
};
use crate::registry::Target;

const RESOURCE: &str = "mobiledeviceprovisioningprofiles";

fn by_uuid(uuid: &str) -> Target {
    Target::Subpath(format!("uuid/{}", path_security::encode_segment(uuid)))
}

impl super::JamfProClient {
    /// List all mobile device provisioning profiles (ID and name only).
    ///
    /// This is equivalent to calling `GET /JSSResource/mobiledeviceprovisioningprofiles`.
    #[instrument(skip(self))]
    pub async fn list_mobile_device_provisioning_profiles(
        &self,
    ) -> Result<MobileDeviceProvisioningProfilesList> {
        self.classic_get(RESOURCE, Target::Collection).await
    }

    /// Get a provisioning profile by ID.
    ///
    /// This is equivalent to calling `GET /JSSResource/mobiledeviceprovisioningprofiles/id/{id}`.
    #[instrument(skip(self))]
    pub async fn get_mobile_device_provisioning_profile_by_id(
        &self,
        id: i64,
    ) -> Result<MobileDeviceProvisioningProfile> {
        self.classic_get(RESOURCE, Target::id(id)).await
    }

    /// Get a provisioning profile by name.
    ///
    /// This is equivalent to calling `GET /JSSResource/mobiledeviceprovisioningprofiles/name/{name}`.
    #[instrument(skip(self))]
    pub async fn get_mobile_device_provisioning_profile_by_name(
        &self,
        name: &str,
    ) -> Result<MobileDeviceProvisioningProfile> {
        self.classic_get(RESOURCE, Target::name(name)).await
    }

    /// Get a provisioning profile by its UUID.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let profile = client
    ///     .get_mobile_device_provisioning_profile_by_uuid("116AF1E6-7EB5-4335-B598-276CDE5E015B")
    ///     .await?;
    /// println!("{}", profile.general.name);
    /// ```
    ///
    /// This is equivalent to calling `GET /JSSResource/mobiledeviceprovisioningprofiles/uuid/{uuid}`.
    #[instrument(skip(self))]
    pub async fn get_mobile_device_provisioning_profile_by_uuid(
        &self,
        uuid: &str,
    ) -> Result<MobileDeviceProvisioningProfile> {
        self.classic_get(RESOURCE, by_uuid(uuid)).await
    }

    /// Create a provisioning profile, returning the new ID.
    ///
    /// This is equivalent to calling `POST /JSSResource/mobiledeviceprovisioningprofiles/id/0`.
    #[instrument(skip(self, profile))]
    pub async fn create_mobile_device_provisioning_profile(
        &self,
        profile: &MobileDeviceProvisioningProfile,
    ) -> Result<i64> {
        self.classic_create(RESOURCE, profile).await
    }

    /// Update a provisioning profile by ID, returning its ID.
    ///
    /// This is equivalent to calling `PUT /JSSResource/mobiledeviceprovisioningprofiles/id/{id}`.
    #[instrument(skip(self, profile))]
    pub async fn update_mobile_device_provisioning_profile_by_id(
        &self,
        id: i64,
        profile: &MobileDeviceProvisioningProfile,
    ) -> Result<i64> {
        self.classic_update(RESOURCE, Target::id(id), profile).await
    }

    /// Update a provisioning profile by name, returning its ID.
    ///
    /// This is equivalent to calling `PUT /JSSResource/mobiledeviceprovisioningprofiles/name/{name}`.
    #[instrument(skip(self, profile))]
    pub async fn update_mobile_device_provisioning_profile_by_name(
        &self,
        name: &str,
        profile: &MobileDeviceProvisioningProfile,
    ) -> Result<i64> {
        self.classic_update(RESOURCE, Target::name(name), profile).await
    }

    /// Update a provisioning profile by UUID, returning its ID.
    ///
    /// This is equivalent to calling `PUT /JSSResource/mobiledeviceprovisioningprofiles/uuid/{uuid}`.
    #[instrument(skip(self, profile))]
    pub async fn update_mobile_device_provisioning_profile_by_uuid(
        &self,
        uuid: &str,
        profile: &MobileDeviceProvisioningProfile,
    ) -> Result<i64> {
        self.classic_update(RESOURCE, by_uuid(uuid), profile).await
    }

    /// Delete a provisioning profile by ID.
    ///
    /// This is equivalent to calling `DELETE /JSSResource/mobiledeviceprovisioningprofiles/id/{id}`.
    #[instrument(skip(self))]
    pub async fn delete_mobile_device_provisioning_profile_by_id(&self, id: i64) -> Result<()> {
        self.classic_delete(RESOURCE, Target::id(id)).await
    }

    /// Delete a provisioning profile by name.
    ///
    /// This is equivalent to calling `DELETE /JSSResource/mobiledeviceprovisioningprofiles/name/{name}`.
    #[instrument(skip(self))]
    pub async fn delete_mobile_device_provisioning_profile_by_name(&self, name: &str) -> Result<()> {
        self.classic_delete(RESOURCE, Target::name(name)).await
    }

    /// Delete a provisioning profile by UUID.
    ///
    /// This is equivalent to calling `DELETE /JSSResource/mobiledeviceprovisioningprofiles/uuid/{uuid}`.
    #[instrument(skip(self))]
    pub async fn delete_mobile_device_provisioning_profile_by_uuid(&self, uuid: &str) -> Result<()> {
        self.classic_delete(RESOURCE, by_uuid(uuid)).await
    }
}
