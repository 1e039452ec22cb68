use tracing::instrument;

use jamfpro_client::Result;

use super::RequestDescriptor;
use crate::common::ResourceId;
use crate::patch_policies::{PatchPoliciesList, PatchPolicy};
use crate::registry::Target;

const RESOURCE: &str = "patchpolicies";

fn software_title(title_id: i64) -> Target {
    Target::Subpath(format!("softwaretitleconfig/id/{}", title_id))
}

impl super::JamfProClient {
    /// List all patch policies (ID and name only).
    ///
    /// This is equivalent to calling `GET /JSSResource/patchpolicies`.
    #[instrument(skip(self))]
    pub async fn list_patch_policies(&self) -> Result<PatchPoliciesList> {
        self.classic_get(RESOURCE, Target::Collection).await
    }

    /// List the patch policies of one patch software title configuration.
    ///
    /// This is equivalent to calling `GET /JSSResource/patchpolicies/softwaretitleconfig/id/{title_id}`.
    #[instrument(skip(self))]
    pub async fn list_patch_policies_by_software_title(&self, title_id: i64) -> Result<PatchPoliciesList> {
        self.classic_get(RESOURCE, software_title(title_id)).await
    }

    /// Get a patch policy by ID.
    ///
    /// Patch policies have no name lookup in the Classic API.
    ///
    /// This is equivalent to calling `GET /JSSResource/patchpolicies/id/{id}`.
    #[instrument(skip(self))]
    pub async fn get_patch_policy_by_id(&self, id: i64) -> Result<PatchPolicy> {
        self.classic_get(RESOURCE, Target::id(id)).await
    }

    /// Create a patch policy under a software title configuration, returning the new ID.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let policy = PatchPolicy {
    ///     general: PatchPolicyGeneral {
    ///         name: "Firefox 128".to_string(),
    ///         target_version: Some("128.0".to_string()),
    ///         ..Default::default()
    ///     },
    ///     ..Default::default()
    /// };
    /// let id = client.create_patch_policy(4, &policy).await?;
    /// ```
    ///
    /// This is equivalent to calling `POST /JSSResource/patchpolicies/softwaretitleconfig/id/{title_id}`.
    #[instrument(skip(self, policy))]
    pub async fn create_patch_policy(&self, title_id: i64, policy: &PatchPolicy) -> Result<i64> {
        let created: ResourceId = self
            .execute(
                &RequestDescriptor::post(RESOURCE, software_title(title_id)),
                Some(policy),
            )
            .await?;
        Ok(created.id)
    }

    /// Update a patch policy by ID, returning its ID.
    ///
    /// This is equivalent to calling `PUT /JSSResource/patchpolicies/id/{id}`.
    #[instrument(skip(self, policy))]
    pub async fn update_patch_policy_by_id(&self, id: i64, policy: &PatchPolicy) -> Result<i64> {
        self.classic_update(RESOURCE, Target::id(id), policy).await
    }

    /// Delete a patch policy by ID.
    ///
    /// This is equivalent to calling `DELETE /JSSResource/patchpolicies/id/{id}`.
    #[instrument(skip(self))]
    pub async fn delete_patch_policy_by_id(&self, id: i64) -> Result<()> {
        self.classic_delete(RESOURCE, Target::id(id)).await
    }
}
