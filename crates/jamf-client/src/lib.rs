//! # jamfpro-client
//!
//! Core HTTP infrastructure for the Jamf Pro APIs.
//!
//! This crate provides the building blocks the dispatcher in `jamfpro-api`
//! composes:
//! - A `Transport` contract with a reqwest-backed implementation
//! - A fair, cancellation-safe concurrency gate
//! - XML (Classic API) and JSON (Jamf Pro API) codecs
//! - Multipart form assembly for file uploads
//! - A single classified error type for every request outcome
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Resource Layer                           │
//! │  (jamfpro-api: computers, sites, api roles, uploads, ...)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   JamfProClient (dispatcher)                │
//! │  gate.acquire → tokens.valid_token → codec → transport      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Transport / HttpTransport                │
//! │  - send(method, url, headers, body) → status/headers/body   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use jamfpro_client::{ClientConfig, HttpRequest, HttpTransport, RequestMethod, Transport};
//!
//! let transport = HttpTransport::new(&ClientConfig::default())?;
//! let response = transport
//!     .send(HttpRequest::new(RequestMethod::Get, "https://acme.jamfcloud.com/api/v1/jamf-pro-version"))
//!     .await?;
//! assert!(response.is_success());
//! ```

mod codec;
mod config;
mod error;
mod gate;
mod multipart;
mod request;
mod response;
pub mod security;
mod transport;

pub use codec::{Codec, ContentKind};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{ApiErrorDetail, Error, ErrorKind, Result};
pub use gate::{ConcurrencyGate, GatePermit};
pub use multipart::{
    MultipartForm, UploadDescriptor, FILE_UPLOADS_PATH, FORCE_IPA_UPLOAD_RESOURCE,
};
pub use request::{HttpRequest, RequestBody, RequestMethod};
pub use response::HttpResponse;
pub use transport::{HttpTransport, Transport};

/// Default Jamf Cloud base domain appended to bare instance names.
pub const DEFAULT_BASE_DOMAIN: &str = ".jamfcloud.com";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("jamfpro-sdk/", env!("CARGO_PKG_VERSION"));
