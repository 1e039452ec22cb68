//! Token endpoint client.
//!
//! Two flows are supported:
//! - OAuth client-credentials: `POST /api/oauth/token` with a form body
//! - Basic bearer: `POST /api/v1/auth/token` with HTTP Basic credentials

use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use futures::future::BoxFuture;
use futures::FutureExt;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use jamfpro_client::{HttpRequest, HttpResponse, RequestMethod, Transport};

use crate::credentials::{Credentials, Grant};
use crate::error::{Error, ErrorKind, Result};

/// Path of the OAuth client-credentials token endpoint.
pub const OAUTH_TOKEN_PATH: &str = "/api/oauth/token";

/// Path of the basic-auth bearer token endpoint.
pub const BASIC_TOKEN_PATH: &str = "/api/v1/auth/token";

/// A freshly issued bearer token as reported by the token endpoint.
#[derive(Clone)]
pub struct IssuedToken {
    /// Bearer value.
    pub value: String,
    /// Lifespan reported by the endpoint, if it reported one.
    pub lifespan: Option<Duration>,
}

impl std::fmt::Debug for IssuedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssuedToken")
            .field("value", &"[REDACTED]")
            .field("lifespan", &self.lifespan)
            .finish()
    }
}

impl IssuedToken {
    /// Create an issued token.
    pub fn new(value: impl Into<String>, lifespan: Option<Duration>) -> Self {
        Self {
            value: value.into(),
            lifespan,
        }
    }
}

/// Something that can mint bearer tokens.
///
/// [`TokenEndpoint`] talks to the real service; tests substitute their own.
pub trait TokenSource: Send + Sync {
    /// Fetch a new token. Exactly one remote call per invocation.
    fn fetch(&self) -> BoxFuture<'_, Result<IssuedToken>>;
}

/// OAuth client-credentials token response.
#[derive(Deserialize)]
struct OAuthTokenResponse {
    access_token: String,
    expires_in: u64,
    #[serde(default)]
    scope: Option<String>,
}

/// Basic-auth bearer token response.
#[derive(Deserialize)]
struct BasicTokenResponse {
    token: String,
    expires: chrono::DateTime<chrono::Utc>,
}

/// OAuth error body, e.g. `{"error":"invalid_client"}`.
#[derive(Deserialize)]
struct OAuthErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// The instance's token endpoint, reached through a [`Transport`].
#[derive(Clone)]
pub struct TokenEndpoint {
    transport: Arc<dyn Transport>,
    base_url: String,
    grant: Grant,
}

impl std::fmt::Debug for TokenEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenEndpoint")
            .field("base_url", &self.base_url)
            .field("grant", &self.grant)
            .finish_non_exhaustive()
    }
}

impl TokenEndpoint {
    /// Create a token endpoint client for the given credentials.
    pub fn new(transport: Arc<dyn Transport>, credentials: &Credentials) -> Result<Self> {
        credentials.validate()?;
        Ok(Self {
            transport,
            base_url: credentials.base_url()?,
            grant: credentials.grant().clone(),
        })
    }

    /// Full URL of the endpoint used for this grant.
    pub fn url(&self) -> String {
        let path = match self.grant {
            Grant::ClientCredentials { .. } => OAUTH_TOKEN_PATH,
            Grant::Basic { .. } => BASIC_TOKEN_PATH,
        };
        format!("{}{}", self.base_url, path)
    }

    fn build_request(&self) -> Result<HttpRequest> {
        let request = HttpRequest::new(RequestMethod::Post, self.url()).accept("application/json");
        match &self.grant {
            Grant::ClientCredentials {
                client_id,
                client_secret,
            } => {
                let body = serde_urlencoded::to_string([
                    ("grant_type", "client_credentials"),
                    ("client_id", client_id.as_str()),
                    ("client_secret", client_secret.as_str()),
                ])?;
                Ok(request.body("application/x-www-form-urlencoded", body))
            }
            Grant::Basic { username, password } => {
                let encoded = base64::engine::general_purpose::STANDARD
                    .encode(format!("{}:{}", username, password));
                Ok(request.header("Authorization", format!("Basic {}", encoded)))
            }
        }
    }

    /// Request a new token. Credentials are never logged.
    #[instrument(skip(self), fields(url = %self.url()))]
    pub async fn request_token(&self) -> Result<IssuedToken> {
        let request = self.build_request()?;
        let response = self.transport.send(request).await?;
        let response = classify(response)?;

        let issued = match self.grant {
            Grant::ClientCredentials { .. } => {
                let token: OAuthTokenResponse = parse(&response)?;
                if let Some(scope) = &token.scope {
                    debug!(scope = %scope, "Token scope");
                }
                IssuedToken::new(token.access_token, Some(Duration::from_secs(token.expires_in)))
            }
            Grant::Basic { .. } => {
                let token: BasicTokenResponse = parse(&response)?;
                let lifespan = (token.expires - chrono::Utc::now())
                    .to_std()
                    .unwrap_or(Duration::ZERO);
                IssuedToken::new(token.token, Some(lifespan))
            }
        };

        if issued.value.is_empty() {
            return Err(Error::new(ErrorKind::InvalidResponse(
                "token endpoint returned an empty token".to_string(),
            )));
        }

        info!(lifespan_secs = issued.lifespan.map(|l| l.as_secs()), "Token issued");
        Ok(issued)
    }
}

impl TokenSource for TokenEndpoint {
    fn fetch(&self) -> BoxFuture<'_, Result<IssuedToken>> {
        self.request_token().boxed()
    }
}

/// Map token endpoint statuses onto terminal and retryable failures.
fn classify(response: HttpResponse) -> Result<HttpResponse> {
    let status = response.status();
    if response.is_success() {
        return Ok(response);
    }

    let message = serde_json::from_slice::<OAuthErrorResponse>(response.body())
        .map(|err| match err.error_description {
            Some(description) => format!("{}: {}", err.error, description),
            None => err.error,
        })
        .unwrap_or_else(|_| format!("HTTP {}", status));

    match status {
        429 | 500..=599 => {
            warn!(status, "Token endpoint temporarily failing");
            Err(Error::new(ErrorKind::Unavailable(message)))
        }
        _ => {
            warn!(status, "Token endpoint rejected credentials");
            Err(Error::new(ErrorKind::CredentialsRejected { status, message }))
        }
    }
}

fn parse<T: serde::de::DeserializeOwned>(response: &HttpResponse) -> Result<T> {
    serde_json::from_slice(response.body())
        .map_err(|e| Error::with_source(ErrorKind::InvalidResponse(e.to_string()), e))
}
