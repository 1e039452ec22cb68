//! Paging, name lookup and CRUD plumbing shared by the Jamf Pro (JSON) resources.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use jamfpro_client::security::rsql;
use jamfpro_client::{Error, ErrorKind, Result};

use super::RequestDescriptor;
use crate::common::{HrefResponse, Page, PageRequest};
use crate::registry::Target;

impl super::JamfProClient {
    pub(crate) async fn pro_page<T>(&self, resource: &str, request: &PageRequest) -> Result<Page<T>>
    where
        T: DeserializeOwned,
    {
        let mut descriptor = RequestDescriptor::get(resource, Target::Collection);
        for (name, value) in request.query() {
            descriptor = descriptor.query(name, value);
        }
        self.execute::<(), _>(&descriptor, None).await
    }

    /// Walk every page until `totalCount` results are collected or a page comes back empty.
    pub(crate) async fn pro_list_all<T>(&self, resource: &str, mut request: PageRequest) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut results = Vec::new();
        loop {
            let page: Page<T> = self.pro_page(resource, &request).await?;
            let fetched = page.results.len();
            results.extend(page.results);
            debug!(
                resource,
                page = request.page,
                collected = results.len(),
                total = page.total_count,
                "Fetched page"
            );
            if fetched == 0 || results.len() as i64 >= page.total_count {
                return Ok(results);
            }
            request.page += 1;
        }
    }

    /// First object whose `field` equals `name`.
    ///
    /// Jamf Pro has no by-name path, so this is a filtered list call. No match
    /// is reported like a missing object on the Classic API: a 404 request failure.
    pub(crate) async fn pro_find_by_name<T>(&self, resource: &str, field: &str, name: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request = PageRequest::with_page_size(1).filter(rsql::eq(field, name));
        let page: Page<T> = self.pro_page(resource, &request).await?;
        page.results.into_iter().next().ok_or_else(|| {
            Error::new(ErrorKind::RequestFailure {
                status: 404,
                body: format!("no {} with {} {:?}", resource, field, name),
            })
        })
    }

    pub(crate) async fn pro_get<T>(&self, resource: &str, id: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.execute::<(), _>(&RequestDescriptor::get(resource, Target::id(id)), None)
            .await
    }

    pub(crate) async fn pro_create<B>(&self, resource: &str, body: &B) -> Result<HrefResponse>
    where
        B: Serialize + Sync + ?Sized,
    {
        self.execute(&RequestDescriptor::post(resource, Target::Collection), Some(body))
            .await
    }

    pub(crate) async fn pro_update<B, R>(&self, resource: &str, id: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        self.execute(&RequestDescriptor::put(resource, Target::id(id)), Some(body))
            .await
    }

    pub(crate) async fn pro_delete(&self, resource: &str, id: &str) -> Result<()> {
        self.execute_unit::<()>(&RequestDescriptor::delete(resource, Target::id(id)), None)
            .await
    }
}
