//! # jamfpro-auth
//!
//! Authentication for Jamf Pro instances.
//!
//! ## Security
//!
//! - Client secrets, passwords and bearer tokens are redacted in Debug output
//! - Tracing spans skip every credential parameter
//! - Token endpoint error messages are built from the OAuth error code only
//!
//! ## Supported Flows
//!
//! - **OAuth 2.0 client credentials** - API clients (`/api/oauth/token`)
//! - **Basic bearer** - user accounts exchanged over HTTP Basic (`/api/v1/auth/token`)
//!
//! ## Token lifecycle
//!
//! [`TokenManager::valid_token`] hands out a token that stays valid for at
//! least the configured buffer period. Refreshes are single-flight: callers
//! that arrive while one is running wait for it and share its outcome.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use jamfpro_auth::{Credentials, TokenManager};
//! use jamfpro_client::{ClientConfig, HttpTransport};
//!
//! let config = ClientConfig::default();
//! let credentials = Credentials::from_env()?;
//! let transport = Arc::new(HttpTransport::new(&config)?);
//! let tokens = TokenManager::for_credentials(transport, &credentials, &config)?;
//!
//! let token = tokens.valid_token().await?;
//! println!("expires in {:?}", token.remaining());
//! ```

mod credentials;
mod error;
mod oauth;
mod token;

pub use credentials::{
    Credentials, Grant, ENV_BASE_DOMAIN, ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_INSTANCE_NAME,
    ENV_PASSWORD, ENV_USERNAME,
};
pub use error::{Error, ErrorKind, Result};
pub use oauth::{IssuedToken, TokenEndpoint, TokenSource, BASIC_TOKEN_PATH, OAUTH_TOKEN_PATH};
pub use token::{Token, TokenManager};
