//! CRUD plumbing shared by the Classic (XML) resources.
//!
//! Classic creates go to `…/id/0`; creates and updates answer with
//! `<resource><id>N</id></resource>`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use jamfpro_client::Result;

use super::RequestDescriptor;
use crate::common::ResourceId;
use crate::registry::Target;

impl super::JamfProClient {
    pub(crate) async fn classic_get<R>(&self, resource: &str, target: Target) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.execute::<(), R>(&RequestDescriptor::get(resource, target), None)
            .await
    }

    pub(crate) async fn classic_create<B>(&self, resource: &str, body: &B) -> Result<i64>
    where
        B: Serialize + Sync + ?Sized,
    {
        let created: ResourceId = self
            .execute(&RequestDescriptor::post(resource, Target::id(0)), Some(body))
            .await?;
        Ok(created.id)
    }

    pub(crate) async fn classic_update<B>(
        &self,
        resource: &str,
        target: Target,
        body: &B,
    ) -> Result<i64>
    where
        B: Serialize + Sync + ?Sized,
    {
        let updated: ResourceId = self
            .execute(&RequestDescriptor::put(resource, target), Some(body))
            .await?;
        Ok(updated.id)
    }

    pub(crate) async fn classic_delete(&self, resource: &str, target: Target) -> Result<()> {
        self.execute_unit::<()>(&RequestDescriptor::delete(resource, target), None)
            .await
    }
}
