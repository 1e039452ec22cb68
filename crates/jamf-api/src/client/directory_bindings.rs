use tracing::instrument;

use jamfpro_client::Result;

use crate::directory_bindings::{DirectoryBinding, DirectoryBindingsList};
use crate::registry::Target;

const RESOURCE: &str = "directorybindings";

impl super::JamfProClient {
    /// List all directory bindings (ID and name only).
    ///
    /// This is equivalent to calling `GET /JSSResource/directorybindings`.
    #[instrument(skip(self))]
    pub async fn list_directory_bindings(&self) -> Result<DirectoryBindingsList> {
        self.classic_get(RESOURCE, Target::Collection).await
    }

    /// Get a directory binding by ID.
    ///
    /// This is equivalent to calling `GET /JSSResource/directorybindings/id/{id}`.
    #[instrument(skip(self))]
    pub async fn get_directory_binding_by_id(&self, id: i64) -> Result<DirectoryBinding> {
        self.classic_get(RESOURCE, Target::id(id)).await
    }

    /// Get a directory binding by name.
    ///
    /// This is equivalent to calling `GET /JSSResource/directorybindings/name/{name}`.
    #[instrument(skip(self))]
    pub async fn get_directory_binding_by_name(&self, name: &str) -> Result<DirectoryBinding> {
        self.classic_get(RESOURCE, Target::name(name)).await
    }

    /// Create a directory binding, returning the new ID.
    ///
    /// This is equivalent to calling `POST /JSSResource/directorybindings/id/0`.
    #[instrument(skip(self, binding))]
    pub async fn create_directory_binding(&self, binding: &DirectoryBinding) -> Result<i64> {
        self.classic_create(RESOURCE, binding).await
    }

    /// Update a directory binding by ID, returning its ID.
    ///
    /// Leave `password` unset to keep the stored one.
    ///
    /// This is equivalent to calling `PUT /JSSResource/directorybindings/id/{id}`.
    #[instrument(skip(self, binding))]
    pub async fn update_directory_binding_by_id(&self, id: i64, binding: &DirectoryBinding) -> Result<i64> {
        self.classic_update(RESOURCE, Target::id(id), binding).await
    }

    /// Update a directory binding by name, returning its ID.
    ///
    /// This is equivalent to calling `PUT /JSSResource/directorybindings/name/{name}`.
    #[instrument(skip(self, binding))]
    pub async fn update_directory_binding_by_name(
        &self,
        name: &str,
        binding: &DirectoryBinding,
    ) -> Result<i64> {
        self.classic_update(RESOURCE, Target::name(name), binding).await
    }

    /// Delete a directory binding by ID.
    ///
    /// This is equivalent to calling `DELETE /JSSResource/directorybindings/id/{id}`.
    #[instrument(skip(self))]
    pub async fn delete_directory_binding_by_id(&self, id: i64) -> Result<()> {
        self.classic_delete(RESOURCE, Target::id(id)).await
    }

    /// Delete a directory binding by name.
    ///
    /// This is equivalent to calling `DELETE /JSSResource/directorybindings/name/{name}`.
    #[instrument(skip(self))]
    pub async fn delete_directory_binding_by_name(&self, name: &str) -> Result<()> {
        self.classic_delete(RESOURCE, Target::name(name)).await
    }
}
