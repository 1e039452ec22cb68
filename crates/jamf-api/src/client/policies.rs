use tracing::instrument;

use jamfpro_client::Result;

use crate::policies::{PoliciesList, Policy, PolicyCreatedBy};
use crate::registry::Target;

const RESOURCE: &str = "policies";

impl super::JamfProClient {
    /// List all policies (ID and name only).
    ///
    /// This is equivalent to calling `GET /JSSResource/policies`.
    #[instrument(skip(self))]
    pub async fn list_policies(&self) -> Result<PoliciesList> {
        self.classic_get(RESOURCE, Target::Collection).await
    }

    /// List policies created in the web console (`Jss`) or by Jamf Admin (`Casper`).
    ///
    /// This is equivalent to calling `GET /JSSResource/policies/createdBy/{jss|casper}`.
    #[instrument(skip(self))]
    pub async fn list_policies_by_created_by(&self, created_by: PolicyCreatedBy) -> Result<PoliciesList> {
        self.classic_get(RESOURCE, Target::Subpath(format!("createdBy/{}", created_by)))
            .await
    }

    /// Get a policy by ID.
    ///
    /// This is equivalent to calling `GET /JSSResource/policies/id/{id}`.
    #[instrument(skip(self))]
    pub async fn get_policy_by_id(&self, id: i64) -> Result<Policy> {
        self.classic_get(RESOURCE, Target::id(id)).await
    }

    /// Get a policy by name.
    ///
    /// This is equivalent to calling `GET /JSSResource/policies/name/{name}`.
    #[instrument(skip(self))]
    pub async fn get_policy_by_name(&self, name: &str) -> Result<Policy> {
        self.classic_get(RESOURCE, Target::name(name)).await
    }

    /// Create a policy, returning the new ID.
    ///
    /// This is equivalent to calling `POST /JSSResource/policies/id/0`.
    #[instrument(skip(self, policy))]
    pub async fn create_policy(&self, policy: &Policy) -> Result<i64> {
        self.classic_create(RESOURCE, policy).await
    }

    /// Update a policy by ID, returning its ID.
    ///
    /// This is equivalent to calling `PUT /JSSResource/policies/id/{id}`.
    #[instrument(skip(self, policy))]
    pub async fn update_policy_by_id(&self, id: i64, policy: &Policy) -> Result<i64> {
        self.classic_update(RESOURCE, Target::id(id), policy).await
    }

    /// Update a policy by name, returning its ID.
    ///
    /// This is equivalent to calling `PUT /JSSResource/policies/name/{name}`.
    #[instrument(skip(self, policy))]
    pub async fn update_policy_by_name(&self, name: &str, policy: &Policy) -> Result<i64> {
        self.classic_update(RESOURCE, Target::name(name), policy).await
    }

    /// Delete a policy by ID.
    ///
    /// This is equivalent to calling `DELETE /JSSResource/policies/id/{id}`.
    #[instrument(skip(self))]
    pub async fn delete_policy_by_id(&self, id: i64) -> Result<()> {
        self.classic_delete(RESOURCE, Target::id(id)).await
    }

    /// Delete a policy by name.
    ///
    /// This is equivalent to calling `DELETE /JSSResource/policies/name/{name}`.
    #[instrument(skip(self))]
    pub async fn delete_policy_by_name(&self, name: &str) -> Result<()> {
        self.classic_delete(RESOURCE, Target::name(name)).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::client::test_support::{client_with, FakeTransport, StaticTokens};
    use crate::policies::PolicyCreatedBy;

    #[tokio::test]
    async fn test_list_by_created_by() {
        let transport = Arc::new(FakeTransport::ok(
            200,
            "<policies><size>1</size><policy><id>8</id><name>Install Firefox</name></policy></policies>",
        ));
        let client = client_with(transport.clone(), StaticTokens::new(), 1);

        let list = client
            .list_policies_by_created_by(PolicyCreatedBy::Casper)
            .await
            .unwrap();
        assert_eq!(list.policies[0].id, 8);
        assert_eq!(
            transport.requests()[0].url,
            "https://acme.test/JSSResource/policies/createdBy/casper"
        );
    }
}
