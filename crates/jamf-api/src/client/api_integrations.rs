use tracing::instrument;

use jamfpro_client::security::path as path_security;
use jamfpro_client::{Error, ErrorKind, Result};

use super::RequestDescriptor;
use crate::api_integrations::{ApiIntegration, ClientCredentials};
use crate::common::PageRequest;
use crate::registry::Target;

const RESOURCE: &str = "api-integrations";

impl super::JamfProClient {
    /// List every API integration, following pages until all are collected.
    ///
    /// This is equivalent to calling `GET /api/v1/api-integrations?page=N&page-size=100&sort=id:asc`
    /// until `totalCount` integrations have been read.
    #[instrument(skip(self))]
    pub async fn list_api_integrations(&self) -> Result<Vec<ApiIntegration>> {
        self.pro_list_all(RESOURCE, PageRequest::default().sort("id:asc"))
            .await
    }

    /// Get an API integration by ID.
    ///
    /// This is equivalent to calling `GET /api/v1/api-integrations/{id}`.
    #[instrument(skip(self))]
    pub async fn get_api_integration_by_id(&self, id: &str) -> Result<ApiIntegration> {
        self.pro_get(RESOURCE, id).await
    }

    /// Find an API integration by display name with an RSQL filter.
    ///
    /// No match fails with a 404 `RequestFailure`.
    ///
    /// This is equivalent to calling `GET /api/v1/api-integrations?filter=displayName=="{name}"`.
    #[instrument(skip(self))]
    pub async fn get_api_integration_by_name(&self, name: &str) -> Result<ApiIntegration> {
        self.pro_find_by_name(RESOURCE, "displayName", name).await
    }

    /// Create an API integration. The response is the created integration, including its client ID.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let created = client
    ///     .create_api_integration(&ApiIntegration::new("ci", ["Inventory Readers"]))
    ///     .await?;
    /// let secret = client
    ///     .refresh_api_integration_client_credentials(&created.id.unwrap_or_default().to_string())
    ///     .await?;
    /// ```
    ///
    /// This is equivalent to calling `POST /api/v1/api-integrations`.
    #[instrument(skip(self, integration))]
    pub async fn create_api_integration(&self, integration: &ApiIntegration) -> Result<ApiIntegration> {
        self.execute(
            &RequestDescriptor::post(RESOURCE, Target::Collection),
            Some(integration),
        )
        .await
    }

    /// Replace an API integration by ID.
    ///
    /// This is equivalent to calling `PUT /api/v1/api-integrations/{id}`.
    #[instrument(skip(self, integration))]
    pub async fn update_api_integration_by_id(
        &self,
        id: &str,
        integration: &ApiIntegration,
    ) -> Result<ApiIntegration> {
        self.pro_update(RESOURCE, id, integration).await
    }

    /// Look the integration up by display name, then replace it by ID.
    ///
    /// This is equivalent to a filtered `GET /api/v1/api-integrations` followed by
    /// `PUT /api/v1/api-integrations/{id}`.
    #[instrument(skip(self, integration))]
    pub async fn update_api_integration_by_name(
        &self,
        name: &str,
        integration: &ApiIntegration,
    ) -> Result<ApiIntegration> {
        let id = self.api_integration_id(name).await?;
        self.pro_update(RESOURCE, &id, integration).await
    }

    /// Delete an API integration by ID.
    ///
    /// This is equivalent to calling `DELETE /api/v1/api-integrations/{id}`.
    #[instrument(skip(self))]
    pub async fn delete_api_integration_by_id(&self, id: &str) -> Result<()> {
        self.pro_delete(RESOURCE, id).await
    }

    /// Look the integration up by display name, then delete it by ID.
    ///
    /// This is equivalent to a filtered `GET /api/v1/api-integrations` followed by
    /// `DELETE /api/v1/api-integrations/{id}`.
    #[instrument(skip(self))]
    pub async fn delete_api_integration_by_name(&self, name: &str) -> Result<()> {
        let id = self.api_integration_id(name).await?;
        self.pro_delete(RESOURCE, &id).await
    }

    /// Generate a new client secret for an integration, invalidating the old one.
    ///
    /// This is equivalent to calling `POST /api/v1/api-integrations/{id}/client-credentials`.
    #[instrument(skip(self))]
    pub async fn refresh_api_integration_client_credentials(
        &self,
        id: &str,
    ) -> Result<ClientCredentials> {
        let descriptor = RequestDescriptor::post(
            RESOURCE,
            Target::Subpath(format!(
                "{}/client-credentials",
                path_security::encode_segment(id)
            )),
        );
        self.execute::<(), _>(&descriptor, None).await
    }

    async fn api_integration_id(&self, name: &str) -> Result<String> {
        let integration: ApiIntegration =
            self.pro_find_by_name(RESOURCE, "displayName", name).await?;
        integration.id.map(|id| id.to_string()).ok_or_else(|| {
            Error::new(ErrorKind::Decoding(format!(
                "API integration {:?} has no id",
                name
            )))
        })
    }
}
