use tracing::instrument;

use jamfpro_client::Result;

use crate::ebooks::{Ebook, EbooksList};
use crate::registry::Target;

const RESOURCE: &str = "ebooks";

impl super::JamfProClient {
    /// List all ebooks (ID and name only).
    ///
    /// This is equivalent to calling `GET /JSSResource/ebooks`.
    #[instrument(skip(self))]
    pub async fn list_ebooks(&self) -> Result<EbooksList> {
        self.classic_get(RESOURCE, Target::Collection).await
    }

    /// Get an ebook by ID.
    ///
    /// This is equivalent to calling `GET /JSSResource/ebooks/id/{id}`.
    #[instrument(skip(self))]
    pub async fn get_ebook_by_id(&self, id: i64) -> Result<Ebook> {
        self.classic_get(RESOURCE, Target::id(id)).await
    }

    /// Get an ebook by name.
    ///
    /// This is equivalent to calling `GET /JSSResource/ebooks/name/{name}`.
    #[instrument(skip(self))]
    pub async fn get_ebook_by_name(&self, name: &str) -> Result<Ebook> {
        self.classic_get(RESOURCE, Target::name(name)).await
    }

    /// Create an ebook, returning the new ID.
    ///
    /// This is equivalent to calling `POST /JSSResource/ebooks/id/0`.
    #[instrument(skip(self, ebook))]
    pub async fn create_ebook(&self, ebook: &Ebook) -> Result<i64> {
        self.classic_create(RESOURCE, ebook).await
    }

    /// Update an ebook by ID, returning its ID.
    ///
    /// This is equivalent to calling `PUT /JSSResource/ebooks/id/{id}`.
    #[instrument(skip(self, ebook))]
    pub async fn update_ebook_by_id(&self, id: i64, ebook: &Ebook) -> Result<i64> {
        self.classic_update(RESOURCE, Target::id(id), ebook).await
    }

    /// Update an ebook by name, returning its ID.
    ///
    /// This is equivalent to calling `PUT /JSSResource/ebooks/name/{name}`.
    #[instrument(skip(self, ebook))]
    pub async fn update_ebook_by_name(&self, name: &str, ebook: &Ebook) -> Result<i64> {
        self.classic_update(RESOURCE, Target::name(name), ebook).await
    }

    /// Delete an ebook by ID.
    ///
    /// This is equivalent to calling `DELETE /JSSResource/ebooks/id/{id}`.
    #[instrument(skip(self))]
    pub async fn delete_ebook_by_id(&self, id: i64) -> Result<()> {
        self.classic_delete(RESOURCE, Target::id(id)).await
    }

    /// Delete an ebook by name.
    ///
    /// This is equivalent to calling `DELETE /JSSResource/ebooks/name/{name}`.
    #[instrument(skip(self))]
    pub async fn delete_ebook_by_name(&self, name: &str) -> Result<()> {
        self.classic_delete(RESOURCE, Target::name(name)).await
    }
}
