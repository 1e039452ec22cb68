//! Single-attempt request dispatch.
//!
//! `Pending → PermitAcquired → Authenticated → Sent → Succeeded | Failed`.
//! No retries happen here; callers decide from the classified error.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use jamfpro_client::security::path as path_security;
use jamfpro_client::{HttpRequest, HttpResponse, RequestBody, RequestMethod, Result};

use crate::registry::Target;

/// Method, resource and target of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// HTTP method.
    pub method: RequestMethod,
    /// Registered resource name, e.g. `computers` or `api-roles`.
    pub resource: String,
    /// What the request addresses within the resource.
    pub target: Target,
    /// Query parameters, unencoded.
    pub query: Vec<(String, String)>,
}

impl RequestDescriptor {
    /// Create a descriptor.
    pub fn new(method: RequestMethod, resource: impl Into<String>, target: Target) -> Self {
        Self {
            method,
            resource: resource.into(),
            target,
            query: Vec::new(),
        }
    }

    /// `GET` descriptor.
    pub fn get(resource: impl Into<String>, target: Target) -> Self {
        Self::new(RequestMethod::Get, resource, target)
    }

    /// `POST` descriptor.
    pub fn post(resource: impl Into<String>, target: Target) -> Self {
        Self::new(RequestMethod::Post, resource, target)
    }

    /// `PUT` descriptor.
    pub fn put(resource: impl Into<String>, target: Target) -> Self {
        Self::new(RequestMethod::Put, resource, target)
    }

    /// `DELETE` descriptor.
    pub fn delete(resource: impl Into<String>, target: Target) -> Self {
        Self::new(RequestMethod::Delete, resource, target)
    }

    /// Add a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }
}

impl super::JamfProClient {
    /// Dispatch a request and decode the success body with the resource's codec.
    #[instrument(
        skip(self, descriptor, body),
        fields(method = %descriptor.method, resource = %descriptor.resource)
    )]
    pub async fn execute<B, R>(&self, descriptor: &RequestDescriptor, body: Option<&B>) -> Result<R>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let (path, codec) = self.resolve(descriptor)?;
        self.dispatch(
            descriptor.method,
            &path,
            codec.content_type(),
            || match body {
                Some(body) => RequestBody::encode(codec, body),
                None => Ok(RequestBody::Empty),
            },
            |response| codec.decode(response.body()),
        )
        .await
    }

    /// Dispatch a request whose success body is not needed.
    #[instrument(
        skip(self, descriptor, body),
        fields(method = %descriptor.method, resource = %descriptor.resource)
    )]
    pub async fn execute_unit<B>(&self, descriptor: &RequestDescriptor, body: Option<&B>) -> Result<()>
    where
        B: Serialize + Sync + ?Sized,
    {
        let (path, codec) = self.resolve(descriptor)?;
        self.dispatch(
            descriptor.method,
            &path,
            codec.content_type(),
            || match body {
                Some(body) => RequestBody::encode(codec, body),
                None => Ok(RequestBody::Empty),
            },
            |_| Ok(()),
        )
        .await
    }

    fn resolve(&self, descriptor: &RequestDescriptor) -> Result<(String, jamfpro_client::Codec)> {
        let endpoint = self.registry().get(&descriptor.resource)?;
        let mut path = endpoint.path_for(&descriptor.target)?;
        if !descriptor.query.is_empty() {
            let query = descriptor
                .query
                .iter()
                .map(|(name, value)| {
                    format!(
                        "{}={}",
                        path_security::encode_param(name),
                        path_security::encode_param(value)
                    )
                })
                .collect::<Vec<_>>()
                .join("&");
            path.push('?');
            path.push_str(&query);
        }
        Ok((path, endpoint.codec()))
    }

    /// The request pipeline shared by every operation.
    ///
    /// `encode` runs only after the permit and token are held; `decode` runs
    /// only on 2xx responses. The permit is dropped on every return path.
    pub(crate) async fn dispatch<E, D, R>(
        &self,
        method: RequestMethod,
        path: &str,
        accept: &str,
        encode: E,
        decode: D,
    ) -> Result<R>
    where
        E: FnOnce() -> Result<RequestBody>,
        D: FnOnce(HttpResponse) -> Result<R>,
    {
        let _permit = self.gate().acquire().await?;
        let token = self.tokens().valid_token().await?;

        let body = encode()?;
        debug!(
            path,
            content = ?body.kind(),
            in_flight = self.gate().in_flight(),
            "Dispatching request"
        );
        let request = HttpRequest::new(method, self.url(path))
            .bearer_auth(token.value())
            .accept(accept)
            .with_body(body);
        let response = self.inner.transport.send(request).await?;

        if response.status() == 401 {
            warn!(path, "Unauthorized response; dropping the token it was sent with");
            self.tokens().invalidate_if(&token).await;
        }

        let response = response.error_for_status()?;
        decode(response)
    }
}
