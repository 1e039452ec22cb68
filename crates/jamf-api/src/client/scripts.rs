use tracing::instrument;

use jamfpro_client::Result;

use crate::scripts::{Script, ScriptsList};
use crate::registry::Target;

const RESOURCE: &str = "scripts";

impl super::JamfProClient {
    /// List all scripts (ID and name only).
    ///
    /// This is equivalent to calling `GET /JSSResource/scripts`.
    #[instrument(skip(self))]
    pub async fn list_scripts(&self) -> Result<ScriptsList> {
        self.classic_get(RESOURCE, Target::Collection).await
    }

    /// Get a script by ID.
    ///
    /// This is equivalent to calling `GET /JSSResource/scripts/id/{id}`.
    #[instrument(skip(self))]
    pub async fn get_script_by_id(&self, id: i64) -> Result<Script> {
        self.classic_get(RESOURCE, Target::id(id)).await
    }

    /// Get a script by name.
    ///
    /// This is equivalent to calling `GET /JSSResource/scripts/name/{name}`.
    #[instrument(skip(self))]
    pub async fn get_script_by_name(&self, name: &str) -> Result<Script> {
        self.classic_get(RESOURCE, Target::name(name)).await
    }

    /// Create a script, returning the new ID.
    ///
    /// This is equivalent to calling `POST /JSSResource/scripts/id/0`.
    #[instrument(skip(self, script))]
    pub async fn create_script(&self, script: &Script) -> Result<i64> {
        self.classic_create(RESOURCE, script).await
    }

    /// Update a script by ID, returning its ID.
    ///
    /// This is equivalent to calling `PUT /JSSResource/scripts/id/{id}`.
    #[instrument(skip(self, script))]
    pub async fn update_script_by_id(&self, id: i64, script: &Script) -> Result<i64> {
        self.classic_update(RESOURCE, Target::id(id), script).await
    }

    /// Update a script by name, returning its ID.
    ///
    /// This is equivalent to calling `PUT /JSSResource/scripts/name/{name}`.
    #[instrument(skip(self, script))]
    pub async fn update_script_by_name(&self, name: &str, script: &Script) -> Result<i64> {
        self.classic_update(RESOURCE, Target::name(name), script).await
    }

    /// Delete a script by ID.
    ///
    /// This is equivalent to calling `DELETE /JSSResource/scripts/id/{id}`.
    #[instrument(skip(self))]
    pub async fn delete_script_by_id(&self, id: i64) -> Result<()> {
        self.classic_delete(RESOURCE, Target::id(id)).await
    }

    /// Delete a script by name.
    ///
    /// This is equivalent to calling `DELETE /JSSResource/scripts/name/{name}`.
    #[instrument(skip(self))]
    pub async fn delete_script_by_name(&self, name: &str) -> Result<()> {
        self.classic_delete(RESOURCE, Target::name(name)).await
    }
}
