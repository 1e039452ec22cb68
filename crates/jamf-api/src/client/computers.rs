use tracing::instrument;

use jamfpro_client::Result;

use crate::computers::{Computer, ComputersList};
use crate::registry::Target;

const RESOURCE: &str = "computers";

impl super::JamfProClient {
    /// List all computers (ID and name only).
    ///
    /// This is equivalent to calling `GET /JSSResource/computers`.
    #[instrument(skip(self))]
    pub async fn list_computers(&self) -> Result<ComputersList> {
        self.classic_get(RESOURCE, Target::Collection).await
    }

    /// Get a computer by ID.
    ///
    /// This is equivalent to calling `GET /JSSResource/computers/id/{id}`.
    #[instrument(skip(self))]
    pub async fn get_computer_by_id(&self, id: i64) -> Result<Computer> {
        self.classic_get(RESOURCE, Target::id(id)).await
    }

    /// Get a computer by name.
    ///
    /// This is equivalent to calling `GET /JSSResource/computers/name/{name}`.
    #[instrument(skip(self))]
    pub async fn get_computer_by_name(&self, name: &str) -> Result<Computer> {
        self.classic_get(RESOURCE, Target::name(name)).await
    }

    /// Create a computer, returning the new ID.
    ///
    /// This is equivalent to calling `POST /JSSResource/computers/id/0`.
    #[instrument(skip(self, computer))]
    pub async fn create_computer(&self, computer: &Computer) -> Result<i64> {
        self.classic_create(RESOURCE, computer).await
    }

    /// Update a computer by ID, returning its ID.
    ///
    /// This is equivalent to calling `PUT /JSSResource/computers/id/{id}`.
    #[instrument(skip(self, computer))]
    pub async fn update_computer_by_id(&self, id: i64, computer: &Computer) -> Result<i64> {
        self.classic_update(RESOURCE, Target::id(id), computer).await
    }

    /// Update a computer by name, returning its ID.
    ///
    /// This is equivalent to calling `PUT /JSSResource/computers/name/{name}`.
    #[instrument(skip(self, computer))]
    pub async fn update_computer_by_name(&self, name: &str, computer: &Computer) -> Result<i64> {
        self.classic_update(RESOURCE, Target::name(name), computer).await
    }

    /// Delete a computer by ID.
    ///
    /// This is equivalent to calling `DELETE /JSSResource/computers/id/{id}`.
    #[instrument(skip(self))]
    pub async fn delete_computer_by_id(&self, id: i64) -> Result<()> {
        self.classic_delete(RESOURCE, Target::id(id)).await
    }

    /// Delete a computer by name.
    ///
    /// This is equivalent to calling `DELETE /JSSResource/computers/name/{name}`.
    #[instrument(skip(self))]
    pub async fn delete_computer_by_name(&self, name: &str) -> Result<()> {
        self.classic_delete(RESOURCE, Target::name(name)).await
    }
}
