//! # jamfpro-sdk
//!
//! A Jamf Pro API client library for Rust.
//!
//! Every request goes through one authenticated, concurrency-bounded
//! dispatcher: a permit from the client's gate, a bearer token that is
//! renewed before it expires, the XML or JSON codec of the endpoint family,
//! then a single attempt over the transport with a classified outcome.
//!
//! ## Security
//!
//! - Secrets and tokens are redacted in Debug output
//! - Tracing spans skip credentials and request bodies
//! - Error messages redact bearer tokens and truncate long bodies
//!
//! ## Crates
//!
//! - **jamfpro-client** - Transport, config, errors, concurrency gate, codecs, multipart uploads
//! - **jamfpro-auth** - Credentials, OAuth client-credentials and basic token flows, token manager
//! - **jamfpro-api** - The dispatcher and typed Classic / Jamf Pro resource operations
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use jamfpro_sdk::{ClientConfig, Credentials, JamfProClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Credentials::from_file("clientconfig.json")?;
//!     let client = JamfProClient::new(credentials, ClientConfig::default())?;
//!
//!     for computer in client.list_computers().await?.computers {
//!         println!("{} {}", computer.id, computer.name);
//!     }
//!
//!     client.shutdown().await;
//!     Ok(())
//! }
//! ```

#[cfg(feature = "api")]
pub use jamfpro_api as api;
#[cfg(feature = "auth")]
pub use jamfpro_auth as auth;
#[cfg(feature = "client")]
pub use jamfpro_client as client;

#[cfg(feature = "api")]
pub use jamfpro_api::JamfProClient;
#[cfg(feature = "auth")]
pub use jamfpro_auth::{Credentials, TokenManager};
#[cfg(feature = "client")]
pub use jamfpro_client::{ClientConfig, Error, ErrorKind, Result};
