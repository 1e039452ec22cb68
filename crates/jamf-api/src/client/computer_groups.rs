use tracing::instrument;

use jamfpro_client::Result;

use crate::computer_groups::{ComputerGroup, ComputerGroupsList};
use crate::registry::Target;

const RESOURCE: &str = "computergroups";

impl super::JamfProClient {
    /// List all computer groups (ID and name only).
    ///
    /// This is equivalent to calling `GET /JSSResource/computergroups`.
    #[instrument(skip(self))]
    pub async fn list_computer_groups(&self) -> Result<ComputerGroupsList> {
        self.classic_get(RESOURCE, Target::Collection).await
    }

    /// Get a computer group by ID.
    ///
    /// This is equivalent to calling `GET /JSSResource/computergroups/id/{id}`.
    #[instrument(skip(self))]
    pub async fn get_computer_group_by_id(&self, id: i64) -> Result<ComputerGroup> {
        self.classic_get(RESOURCE, Target::id(id)).await
    }

    /// Get a computer group by name.
    ///
    /// This is equivalent to calling `GET /JSSResource/computergroups/name/{name}`.
    #[instrument(skip(self))]
    pub async fn get_computer_group_by_name(&self, name: &str) -> Result<ComputerGroup> {
        self.classic_get(RESOURCE, Target::name(name)).await
    }

    /// Create a computer group, returning the new ID.
    ///
    /// This is equivalent to calling `POST /JSSResource/computergroups/id/0`.
    #[instrument(skip(self, group))]
    pub async fn create_computer_group(&self, group: &ComputerGroup) -> Result<i64> {
        self.classic_create(RESOURCE, group).await
    }

    /// Update a computer group by ID, returning its ID.
    ///
    /// This is equivalent to calling `PUT /JSSResource/computergroups/id/{id}`.
    #[instrument(skip(self, group))]
    pub async fn update_computer_group_by_id(&self, id: i64, group: &ComputerGroup) -> Result<i64> {
        self.classic_update(RESOURCE, Target::id(id), group).await
    }

    /// Update a computer group by name, returning its ID.
    ///
    /// This is equivalent to calling `PUT /JSSResource/computergroups/name/{name}`.
    #[instrument(skip(self, group))]
    pub async fn update_computer_group_by_name(&self, name: &str, group: &ComputerGroup) -> Result<i64> {
        self.classic_update(RESOURCE, Target::name(name), group).await
    }

    /// Delete a computer group by ID.
    ///
    /// This is equivalent to calling `DELETE /JSSResource/computergroups/id/{id}`.
    #[instrument(skip(self))]
    pub async fn delete_computer_group_by_id(&self, id: i64) -> Result<()> {
        self.classic_delete(RESOURCE, Target::id(id)).await
    }

    /// Delete a computer group by name.
    ///
    /// This is equivalent to calling `DELETE /JSSResource/computergroups/name/{name}`.
    #[instrument(skip(self))]
    pub async fn delete_computer_group_by_name(&self, name: &str) -> Result<()> {
        self.classic_delete(RESOURCE, Target::name(name)).await
    }
}
