use tracing::instrument;

use jamfpro_client::Result;

use crate::api_roles::ApiRole;
use crate::common::{HrefResponse, Page, PageRequest};

const RESOURCE: &str = "api-roles";

impl super::JamfProClient {
    /// List every API role, following pages until all are collected.
    ///
    /// This is equivalent to calling `GET /api/v1/api-roles?page=N&page-size=100&sort=id:asc`
    /// until `totalCount` roles have been read.
    #[instrument(skip(self))]
    pub async fn list_api_roles(&self) -> Result<Vec<ApiRole>> {
        self.pro_list_all(RESOURCE, PageRequest::default().sort("id:asc"))
            .await
    }

    /// Fetch a single page of API roles.
    ///
    /// This is equivalent to calling `GET /api/v1/api-roles?page={page}&page-size={page_size}`.
    #[instrument(skip(self))]
    pub async fn list_api_roles_page(&self, request: &PageRequest) -> Result<Page<ApiRole>> {
        self.pro_page(RESOURCE, request).await
    }

    /// Get an API role by ID.
    ///
    /// This is equivalent to calling `GET /api/v1/api-roles/{id}`.
    #[instrument(skip(self))]
    pub async fn get_api_role_by_id(&self, id: &str) -> Result<ApiRole> {
        self.pro_get(RESOURCE, id).await
    }

    /// Find an API role by display name with an RSQL filter.
    ///
    /// No match fails with a 404 `RequestFailure`.
    ///
    /// This is equivalent to calling `GET /api/v1/api-roles?filter=displayName=="{name}"`.
    #[instrument(skip(self))]
    pub async fn get_api_role_by_name(&self, name: &str) -> Result<ApiRole> {
        self.pro_find_by_name(RESOURCE, "displayName", name).await
    }

    /// Create an API role.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let created = client
    ///     .create_api_role(&ApiRole::new("Inventory Readers", ["Read Computers"]))
    ///     .await?;
    /// println!("role {} at {}", created.id, created.href);
    /// ```
    ///
    /// This is equivalent to calling `POST /api/v1/api-roles`.
    #[instrument(skip(self, role))]
    pub async fn create_api_role(&self, role: &ApiRole) -> Result<HrefResponse> {
        self.pro_create(RESOURCE, role).await
    }

    /// Replace an API role by ID.
    ///
    /// This is equivalent to calling `PUT /api/v1/api-roles/{id}`.
    #[instrument(skip(self, role))]
    pub async fn update_api_role_by_id(&self, id: &str, role: &ApiRole) -> Result<ApiRole> {
        self.pro_update(RESOURCE, id, role).await
    }

    /// Look the role up by name, then update it by ID.
    ///
    /// This is equivalent to a filtered `GET /api/v1/api-roles` followed by
    /// `PUT /api/v1/api-roles/{id}`.
    #[instrument(skip(self, role))]
    pub async fn update_api_role_by_name(&self, name: &str, role: &ApiRole) -> Result<ApiRole> {
        let id = self.api_role_id(name).await?;
        self.pro_update(RESOURCE, &id, role).await
    }

    /// Delete an API role by ID.
    ///
    /// This is equivalent to calling `DELETE /api/v1/api-roles/{id}`.
    #[instrument(skip(self))]
    pub async fn delete_api_role_by_id(&self, id: &str) -> Result<()> {
        self.pro_delete(RESOURCE, id).await
    }

    /// Look the role up by name, then delete it by ID.
    ///
    /// This is equivalent to a filtered `GET /api/v1/api-roles` followed by
    /// `DELETE /api/v1/api-roles/{id}`.
    #[instrument(skip(self))]
    pub async fn delete_api_role_by_name(&self, name: &str) -> Result<()> {
        let id = self.api_role_id(name).await?;
        self.pro_delete(RESOURCE, &id).await
    }

    async fn api_role_id(&self, name: &str) -> Result<String> {
        let role: ApiRole = self.pro_find_by_name(RESOURCE, "displayName", name).await?;
        role.id.ok_or_else(|| {
            jamfpro_client::Error::new(jamfpro_client::ErrorKind::Decoding(format!(
                "API role {:?} has no id",
                name
            )))
        })
    }
}
