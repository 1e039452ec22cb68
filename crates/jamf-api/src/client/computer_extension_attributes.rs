use tracing::instrument;

use jamfpro_client::Result;

use crate::computer_extension_attributes::{ComputerExtensionAttribute, ComputerExtensionAttributesList};
use crate::registry::Target;

const RESOURCE: &str = "computerextensionattributes";

impl super::JamfProClient {
    /// List all computer extension attributes (ID and name only).
    ///
    /// This is equivalent to calling `GET /JSSResource/computerextensionattributes`.
    #[instrument(skip(self))]
    pub async fn list_computer_extension_attributes(&self) -> Result<ComputerExtensionAttributesList> {
        self.classic_get(RESOURCE, Target::Collection).await
    }

    /// Get a computer extension attribute by ID.
    ///
    /// This is equivalent to calling `GET /JSSResource/computerextensionattributes/id/{id}`.
    #[instrument(skip(self))]
    pub async fn get_computer_extension_attribute_by_id(&self, id: i64) -> Result<ComputerExtensionAttribute> {
        self.classic_get(RESOURCE, Target::id(id)).await
    }

    /// Get a computer extension attribute by name.
    ///
    /// This is equivalent to calling `GET /JSSResource/computerextensionattributes/name/{name}`.
    #[instrument(skip(self))]
    pub async fn get_computer_extension_attribute_by_name(&self, name: &str) -> Result<ComputerExtensionAttribute> {
        self.classic_get(RESOURCE, Target::name(name)).await
    }

    /// Create a computer extension attribute, returning the new ID.
    ///
    /// This is equivalent to calling `POST /JSSResource/computerextensionattributes/id/0`.
    #[instrument(skip(self, attribute))]
    pub async fn create_computer_extension_attribute(&self, attribute: &ComputerExtensionAttribute) -> Result<i64> {
        self.classic_create(RESOURCE, attribute).await
    }

    /// Update a computer extension attribute by ID, returning its ID.
    ///
    /// This is equivalent to calling `PUT /JSSResource/computerextensionattributes/id/{id}`.
    #[instrument(skip(self, attribute))]
    pub async fn update_computer_extension_attribute_by_id(&self, id: i64, attribute: &ComputerExtensionAttribute) -> Result<i64> {
        self.classic_update(RESOURCE, Target::id(id), attribute).await
    }

    /// Update a computer extension attribute by name, returning its ID.
    ///
    /// This is equivalent to calling `PUT /JSSResource/computerextensionattributes/name/{name}`.
    #[instrument(skip(self, attribute))]
    pub async fn update_computer_extension_attribute_by_name(&self, name: &str, attribute: &ComputerExtensionAttribute) -> Result<i64> {
        self.classic_update(RESOURCE, Target::name(name), attribute).await
    }

    /// Delete a computer extension attribute by ID.
    ///
    /// This is equivalent to calling `DELETE /JSSResource/computerextensionattributes/id/{id}`.
    #[instrument(skip(self))]
    pub async fn delete_computer_extension_attribute_by_id(&self, id: i64) -> Result<()> {
        self.classic_delete(RESOURCE, Target::id(id)).await
    }

    /// Delete a computer extension attribute by name.
    ///
    /// This is equivalent to calling `DELETE /JSSResource/computerextensionattributes/name/{name}`.
    #[instrument(skip(self))]
    pub async fn delete_computer_extension_attribute_by_name(&self, name: &str) -> Result<()> {
        self.classic_delete(RESOURCE, Target::name(name)).await
    }
}
