use tracing::instrument;

use jamfpro_client::Result;

use crate::advanced_computer_searches::{AdvancedComputerSearch, AdvancedComputerSearchesList};
use crate::registry::Target;

const RESOURCE: &str = "advancedcomputersearches";

impl super::JamfProClient {
    /// List all advanced computer searches (ID and name only).
    ///
    /// This is equivalent to calling `GET /JSSResource/advancedcomputersearches`.
    #[instrument(skip(self))]
    pub async fn list_advanced_computer_searches(&self) -> Result<AdvancedComputerSearchesList> {
        self.classic_get(RESOURCE, Target::Collection).await
    }

    /// Get an advanced computer search by ID.
    ///
    /// Jamf Pro runs the search to answer; large inventories make this slow.
    ///
    /// This is equivalent to calling `GET /JSSResource/advancedcomputersearches/id/{id}`.
    #[instrument(skip(self))]
    pub async fn get_advanced_computer_search_by_id(&self, id: i64) -> Result<AdvancedComputerSearch> {
        self.classic_get(RESOURCE, Target::id(id)).await
    }

    /// Get an advanced computer search by name.
    ///
    /// This is equivalent to calling `GET /JSSResource/advancedcomputersearches/name/{name}`.
    #[instrument(skip(self))]
    pub async fn get_advanced_computer_search_by_name(&self, name: &str) -> Result<AdvancedComputerSearch> {
        self.classic_get(RESOURCE, Target::name(name)).await
    }

    /// Create an advanced computer search, returning the new ID.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let search = AdvancedComputerSearch {
    ///     name: "Stale inventory".to_string(),
    ///     display_fields: Some(DisplayFields::named(["Computer Name", "Last Check-in"])),
    ///     ..Default::default()
    /// };
    /// let id = client.create_advanced_computer_search(&search).await?;
    /// ```
    ///
    /// This is equivalent to calling `POST /JSSResource/advancedcomputersearches/id/0`.
    #[instrument(skip(self, search))]
    pub async fn create_advanced_computer_search(&self, search: &AdvancedComputerSearch) -> Result<i64> {
        self.classic_create(RESOURCE, search).await
    }

    /// Update an advanced computer search by ID, returning its ID.
    ///
    /// This is equivalent to calling `PUT /JSSResource/advancedcomputersearches/id/{id}`.
    #[instrument(skip(self, search))]
    pub async fn update_advanced_computer_search_by_id(
        &self,
        id: i64,
        search: &AdvancedComputerSearch,
    ) -> Result<i64> {
        self.classic_update(RESOURCE, Target::id(id), search).await
    }

    /// Update an advanced computer search by name, returning its ID.
    ///
    /// This is equivalent to calling `PUT /JSSResource/advancedcomputersearches/name/{name}`.
    #[instrument(skip(self, search))]
    pub async fn update_advanced_computer_search_by_name(
        &self,
        name: &str,
        search: &AdvancedComputerSearch,
    ) -> Result<i64> {
        self.classic_update(RESOURCE, Target::name(name), search).await
    }

    /// Delete an advanced computer search by ID.
    ///
    /// This is equivalent to calling `DELETE /JSSResource/advancedcomputersearches/id/{id}`.
    #[instrument(skip(self))]
    pub async fn delete_advanced_computer_search_by_id(&self, id: i64) -> Result<()> {
        self.classic_delete(RESOURCE, Target::id(id)).await
    }

    /// Delete an advanced computer search by name.
    ///
    /// This is equivalent to calling `DELETE /JSSResource/advancedcomputersearches/name/{name}`.
    #[instrument(skip(self))]
    pub async fn delete_advanced_computer_search_by_name(&self, name: &str) -> Result<()> {
        self.classic_delete(RESOURCE, Target::name(name)).await
    }
}
