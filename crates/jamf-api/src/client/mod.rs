//! Jamf Pro client: the authenticated, concurrency-bounded dispatcher plus
//! typed resource operations.
//!
//! Resource operations live in per-area submodules as further `impl` blocks.

use std::sync::Arc;

use jamfpro_auth::{Credentials, TokenManager};
use jamfpro_client::{
    ClientConfig, ConcurrencyGate, Error, ErrorKind, HttpTransport, Result, Transport,
};

use crate::registry::EndpointRegistry;

mod advanced_computer_searches;
mod api_integrations;
mod api_roles;
mod classic;
mod computer_extension_attributes;
mod computer_groups;
mod computers;
mod directory_bindings;
mod dispatch;
mod ebooks;
mod ldap_servers;
mod mobile_device_provisioning_profiles;
mod patch_policies;
mod policies;
mod pro;
mod scripts;
mod sites;
mod sso_failover;
mod uploads;

pub use dispatch::RequestDescriptor;

/// Jamf Pro API client.
///
/// Every request goes through the same pipeline: acquire a permit from the
/// concurrency gate, obtain a valid bearer token, encode the body with the
/// endpoint family's codec, send, then decode or classify the response.
/// The permit is released on every exit path.
///
/// Clones share one token cache and one permit pool. Separately constructed
/// clients share nothing.
///
/// # Example
///
/// ```rust,ignore
/// use jamfpro_api::JamfProClient;
/// use jamfpro_auth::Credentials;
/// use jamfpro_client::ClientConfig;
///
/// let credentials = Credentials::client_credentials("acme", "client-id", "client-secret");
/// let client = JamfProClient::new(credentials, ClientConfig::default())?;
///
/// let sites = client.list_sites().await?;
/// let site = client.get_site_by_name("Main Campus").await?;
/// client.delete_computer_by_id(42).await?;
/// ```
#[derive(Clone)]
pub struct JamfProClient {
    inner: Arc<Inner>,
}

struct Inner {
    base_url: String,
    transport: Arc<dyn Transport>,
    tokens: TokenManager,
    gate: ConcurrencyGate,
    registry: EndpointRegistry,
    config: ClientConfig,
}

impl std::fmt::Debug for JamfProClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JamfProClient")
            .field("base_url", &self.inner.base_url)
            .field("gate", &self.inner.gate)
            .field("tokens", &self.inner.tokens)
            .finish_non_exhaustive()
    }
}

impl JamfProClient {
    /// Create a client with the default reqwest transport.
    pub fn new(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Self::builder()
            .with_credentials(credentials)
            .with_config(config)
            .build()
    }

    /// Create a client that sends through the given transport.
    pub fn with_transport(
        credentials: Credentials,
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        Self::builder()
            .with_credentials(credentials)
            .with_config(config)
            .with_transport(transport)
            .build()
    }

    /// Start building a client.
    pub fn builder() -> JamfProClientBuilder {
        JamfProClientBuilder::default()
    }

    /// Base URL of the instance, e.g. `https://acme.jamfcloud.com`.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Token manager shared by every clone of this client.
    pub fn tokens(&self) -> &TokenManager {
        &self.inner.tokens
    }

    /// Concurrency gate shared by every clone of this client.
    pub fn gate(&self) -> &ConcurrencyGate {
        &self.inner.gate
    }

    /// Endpoint registry.
    pub fn registry(&self) -> &EndpointRegistry {
        &self.inner.registry
    }

    /// Stop accepting requests and drop the cached token.
    ///
    /// Requests already holding a permit run to completion; new and waiting
    /// ones fail with `ErrorKind::Closed`.
    pub async fn shutdown(&self) {
        self.inner.gate.close();
        self.inner.tokens.invalidate().await;
        tracing::info!(base_url = %self.inner.base_url, "Client shut down");
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }
}

/// Builder for [`JamfProClient`].
#[derive(Default)]
pub struct JamfProClientBuilder {
    credentials: Option<Credentials>,
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
    tokens: Option<TokenManager>,
    base_url: Option<String>,
    registry: Option<EndpointRegistry>,
}

impl JamfProClientBuilder {
    /// Credentials used for the token endpoint and the instance address.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Client configuration.
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Transport for resource requests and, unless a token manager is given,
    /// for the token endpoint.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use an existing token manager instead of one built from the credentials.
    pub fn with_token_manager(mut self, tokens: TokenManager) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Override the base URL derived from the credentials.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into().trim_end_matches('/').to_string());
        self
    }

    /// Replace the standard endpoint registry.
    pub fn with_registry(mut self, registry: EndpointRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<JamfProClient> {
        self.config.validate()?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(&self.config)?),
        };

        let base_url = match (self.base_url, &self.credentials) {
            (Some(base_url), _) => base_url,
            (None, Some(credentials)) => credentials.base_url()?,
            (None, None) => {
                return Err(Error::new(ErrorKind::Config(
                    "credentials or a base URL are required".to_string(),
                )))
            }
        };

        let tokens = match (self.tokens, &self.credentials) {
            (Some(tokens), _) => tokens,
            (None, Some(credentials)) => {
                TokenManager::for_credentials(transport.clone(), credentials, &self.config)?
            }
            (None, None) => {
                return Err(Error::new(ErrorKind::Config(
                    "credentials or a token manager are required".to_string(),
                )))
            }
        };

        let gate = ConcurrencyGate::new(self.config.max_concurrent_requests)?;

        Ok(JamfProClient {
            inner: Arc::new(Inner {
                base_url,
                transport,
                tokens,
                gate,
                registry: self.registry.unwrap_or_else(EndpointRegistry::standard),
                config: self.config,
            }),
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
mod dispatch_properties;
