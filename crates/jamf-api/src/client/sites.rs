use tracing::instrument;

use jamfpro_client::Result;

use crate::registry::Target;
use crate::sites::{Site, SitesList};

const RESOURCE: &str = "sites";

impl super::JamfProClient {
    /// List all sites.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let sites = client.list_sites().await?;
    /// for site in &sites.sites {
    ///     println!("{}: {}", site.id, site.name);
    /// }
    /// ```
    ///
    /// This is equivalent to calling `GET /JSSResource/sites`.
    #[instrument(skip(self))]
    pub async fn list_sites(&self) -> Result<SitesList> {
        self.classic_get(RESOURCE, Target::Collection).await
    }

    /// Get a site by ID.
    ///
    /// This is equivalent to calling `GET /JSSResource/sites/id/{id}`.
    #[instrument(skip(self))]
    pub async fn get_site_by_id(&self, id: i64) -> Result<Site> {
        self.classic_get(RESOURCE, Target::id(id)).await
    }

    /// Get a site by name. The name is percent-encoded into the path.
    ///
    /// This is equivalent to calling `GET /JSSResource/sites/name/{name}`.
    #[instrument(skip(self))]
    pub async fn get_site_by_name(&self, name: &str) -> Result<Site> {
        self.classic_get(RESOURCE, Target::name(name)).await
    }

    /// Create a site, returning the new ID.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let id = client.create_site(&Site::new("Annex")).await?;
    /// ```
    ///
    /// This is equivalent to calling `POST /JSSResource/sites/id/0`.
    #[instrument(skip(self, site))]
    pub async fn create_site(&self, site: &Site) -> Result<i64> {
        self.classic_create(RESOURCE, site).await
    }

    /// Update a site by ID, returning its ID.
    ///
    /// This is equivalent to calling `PUT /JSSResource/sites/id/{id}`.
    #[instrument(skip(self, site))]
    pub async fn update_site_by_id(&self, id: i64, site: &Site) -> Result<i64> {
        self.classic_update(RESOURCE, Target::id(id), site).await
    }

    /// Update a site by name, returning its ID.
    ///
    /// This is equivalent to calling `PUT /JSSResource/sites/name/{name}`.
    #[instrument(skip(self, site))]
    pub async fn update_site_by_name(&self, name: &str, site: &Site) -> Result<i64> {
        self.classic_update(RESOURCE, Target::name(name), site).await
    }

    /// Delete a site by ID.
    ///
    /// This is equivalent to calling `DELETE /JSSResource/sites/id/{id}`.
    #[instrument(skip(self))]
    pub async fn delete_site_by_id(&self, id: i64) -> Result<()> {
        self.classic_delete(RESOURCE, Target::id(id)).await
    }

    /// Delete a site by name.
    ///
    /// This is equivalent to calling `DELETE /JSSResource/sites/name/{name}`.
    #[instrument(skip(self))]
    pub async fn delete_site_by_name(&self, name: &str) -> Result<()> {
        self.classic_delete(RESOURCE, Target::name(name)).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::client::test_support::{client_with, FakeTransport, StaticTokens};
    use crate::sites::Site;
    use jamfpro_client::RequestMethod;

    #[tokio::test]
    async fn test_create_posts_to_id_zero() {
        let transport = Arc::new(FakeTransport::ok(201, "<site><id>14</id></site>"));
        let client = client_with(transport.clone(), StaticTokens::new(), 1);

        let id = client.create_site(&Site::new("Annex")).await.unwrap();
        assert_eq!(id, 14);

        let sent = transport.requests();
        assert_eq!(sent[0].method, RequestMethod::Post);
        assert_eq!(sent[0].url, "https://acme.test/JSSResource/sites/id/0");
        assert_eq!(sent[0].header_value("content-type"), Some("application/xml"));
        assert_eq!(
            sent[0].body.as_deref(),
            Some(&b"<site><name>Annex</name></site>"[..])
        );
    }

    #[tokio::test]
    async fn test_by_name_is_encoded() {
        let transport = Arc::new(FakeTransport::ok(200, "<site><id>2</id><name>HQ / North</name></site>"));
        let client = client_with(transport.clone(), StaticTokens::new(), 1);

        let site = client.get_site_by_name("HQ / North").await.unwrap();
        assert_eq!(site.id, Some(2));
        assert_eq!(
            transport.requests()[0].url,
            "https://acme.test/JSSResource/sites/name/HQ%20%2F%20North"
        );
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let transport = Arc::new(FakeTransport::ok(200, ""));
        let client = client_with(transport.clone(), StaticTokens::new(), 1);

        client.delete_site_by_id(5).await.unwrap();
        let sent = transport.requests();
        assert_eq!(sent[0].method, RequestMethod::Delete);
        assert_eq!(sent[0].url, "https://acme.test/JSSResource/sites/id/5");
    }

    #[tokio::test]
    async fn test_missing_site_is_not_found() {
        let transport = Arc::new(FakeTransport::ok(404, "<html>The server has not found anything matching the request URI</html>"));
        let client = client_with(transport, StaticTokens::new(), 1);

        let err = client.get_site_by_id(404).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
