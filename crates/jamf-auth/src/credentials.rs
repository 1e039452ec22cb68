//! Credential store: instance address plus client identity.
//!
//! Secrets are redacted in Debug output.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, ErrorKind, Result};

/// Environment variable holding the instance name or URL.
pub const ENV_INSTANCE_NAME: &str = "JAMFPRO_INSTANCE_NAME";
/// Environment variable holding the API client ID.
pub const ENV_CLIENT_ID: &str = "JAMFPRO_CLIENT_ID";
/// Environment variable holding the API client secret.
pub const ENV_CLIENT_SECRET: &str = "JAMFPRO_CLIENT_SECRET";
/// Environment variable holding a user account name (basic flow).
pub const ENV_USERNAME: &str = "JAMFPRO_USERNAME";
/// Environment variable holding a user account password (basic flow).
pub const ENV_PASSWORD: &str = "JAMFPRO_PASSWORD";
/// Environment variable overriding the `.jamfcloud.com` base domain.
pub const ENV_BASE_DOMAIN: &str = "JAMFPRO_BASE_DOMAIN";

/// How the client proves its identity to the token endpoint.
#[derive(Clone, PartialEq, Eq)]
pub enum Grant {
    /// API client ID and secret (OAuth client-credentials grant).
    ClientCredentials {
        client_id: String,
        client_secret: String,
    },
    /// User account exchanged for a bearer token over HTTP Basic.
    Basic { username: String, password: String },
}

impl std::fmt::Debug for Grant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grant::ClientCredentials { client_id, .. } => f
                .debug_struct("ClientCredentials")
                .field("client_id", client_id)
                .field("client_secret", &"[REDACTED]")
                .finish(),
            Grant::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
        }
    }
}

/// Immutable identity of one client instance.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    instance: String,
    base_domain: Option<String>,
    grant: Grant,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("instance", &self.instance)
            .field("base_domain", &self.base_domain)
            .field("grant", &self.grant)
            .finish()
    }
}

/// Shape of the JSON auth file.
#[derive(Deserialize)]
struct AuthFile {
    #[serde(rename = "instanceName")]
    instance_name: String,
    #[serde(rename = "clientID", default)]
    client_id: Option<String>,
    #[serde(rename = "clientSecret", default)]
    client_secret: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(rename = "overrideBaseDomain", default)]
    override_base_domain: Option<String>,
}

impl Credentials {
    /// Credentials for an API client (OAuth client-credentials grant).
    pub fn client_credentials(
        instance: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            instance: instance.into(),
            base_domain: None,
            grant: Grant::ClientCredentials {
                client_id: client_id.into(),
                client_secret: client_secret.into(),
            },
        }
    }

    /// Credentials for a user account (basic bearer flow).
    pub fn basic(
        instance: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            instance: instance.into(),
            base_domain: None,
            grant: Grant::Basic {
                username: username.into(),
                password: password.into(),
            },
        }
    }

    /// Replace the default `.jamfcloud.com` base domain.
    pub fn with_base_domain(mut self, base_domain: impl Into<String>) -> Self {
        let domain = base_domain.into();
        self.base_domain = if domain.is_empty() {
            None
        } else if domain.starts_with('.') {
            Some(domain)
        } else {
            Some(format!(".{}", domain))
        };
        self
    }

    /// Instance name or URL as configured.
    pub fn instance(&self) -> &str {
        &self.instance
    }

    /// Base-domain override, if any.
    pub fn base_domain(&self) -> Option<&str> {
        self.base_domain.as_deref()
    }

    /// Identity presented to the token endpoint.
    pub fn grant(&self) -> &Grant {
        &self.grant
    }

    /// Resolve the base URL of the instance.
    ///
    /// A value containing `://` is used verbatim (trailing `/` removed);
    /// a bare name becomes `https://<name><base-domain>`.
    pub fn base_url(&self) -> Result<String> {
        let base = if self.instance.contains("://") {
            self.instance.trim_end_matches('/').to_string()
        } else {
            format!(
                "https://{}{}",
                self.instance,
                self.base_domain
                    .as_deref()
                    .unwrap_or(jamfpro_client::DEFAULT_BASE_DOMAIN)
            )
        };

        url::Url::parse(&base).map_err(|e| {
            Error::with_source(
                ErrorKind::InvalidCredentials(format!("invalid instance address: {}", base)),
                e,
            )
        })?;
        Ok(base)
    }

    /// Check that no required value is empty.
    pub fn validate(&self) -> Result<()> {
        if self.instance.trim().is_empty() {
            return Err(invalid("instance name is empty"));
        }
        match &self.grant {
            Grant::ClientCredentials {
                client_id,
                client_secret,
            } => {
                if client_id.is_empty() {
                    return Err(invalid("client ID is empty"));
                }
                if client_secret.is_empty() {
                    return Err(invalid("client secret is empty"));
                }
            }
            Grant::Basic { username, password } => {
                if username.is_empty() {
                    return Err(invalid("username is empty"));
                }
                if password.is_empty() {
                    return Err(invalid("password is empty"));
                }
            }
        }
        self.base_url().map(|_| ())
    }

    /// Load credentials from environment variables.
    ///
    /// Requires `JAMFPRO_INSTANCE_NAME` and either `JAMFPRO_CLIENT_ID` +
    /// `JAMFPRO_CLIENT_SECRET` or `JAMFPRO_USERNAME` + `JAMFPRO_PASSWORD`.
    /// `JAMFPRO_BASE_DOMAIN` is optional.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let instance = get(ENV_INSTANCE_NAME)
            .ok_or_else(|| Error::new(ErrorKind::EnvVar(ENV_INSTANCE_NAME.to_string())))?;

        let grant = match (get(ENV_CLIENT_ID), get(ENV_CLIENT_SECRET)) {
            (Some(client_id), Some(client_secret)) => Grant::ClientCredentials {
                client_id,
                client_secret,
            },
            (Some(_), None) => {
                return Err(Error::new(ErrorKind::EnvVar(ENV_CLIENT_SECRET.to_string())))
            }
            _ => match (get(ENV_USERNAME), get(ENV_PASSWORD)) {
                (Some(username), Some(password)) => Grant::Basic { username, password },
                (Some(_), None) => {
                    return Err(Error::new(ErrorKind::EnvVar(ENV_PASSWORD.to_string())))
                }
                _ => return Err(Error::new(ErrorKind::EnvVar(ENV_CLIENT_ID.to_string()))),
            },
        };

        let creds = Self {
            instance,
            base_domain: None,
            grant,
        };
        Ok(match get(ENV_BASE_DOMAIN) {
            Some(domain) => creds.with_base_domain(domain),
            None => creds,
        })
    }

    /// Load credentials from a JSON auth file.
    ///
    /// ```json
    /// { "instanceName": "acme", "clientID": "...", "clientSecret": "..." }
    /// ```
    ///
    /// `username`/`password` may replace the client pair; `overrideBaseDomain`
    /// is optional.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let file: AuthFile = serde_json::from_str(&content)?;

        let grant = match (file.client_id, file.client_secret, file.username, file.password) {
            (Some(client_id), Some(client_secret), _, _)
                if !client_id.is_empty() && !client_secret.is_empty() =>
            {
                Grant::ClientCredentials {
                    client_id,
                    client_secret,
                }
            }
            (_, _, Some(username), Some(password)) => Grant::Basic { username, password },
            _ => {
                return Err(invalid(
                    "auth file needs clientID and clientSecret, or username and password",
                ))
            }
        };

        let creds = Self {
            instance: file.instance_name,
            base_domain: None,
            grant,
        };
        Ok(match file.override_base_domain {
            Some(domain) => creds.with_base_domain(domain),
            None => creds,
        })
    }
}

fn invalid(message: &str) -> Error {
    Error::new(ErrorKind::InvalidCredentials(message.to_string()))
}
