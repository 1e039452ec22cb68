//! # jamfpro-api
//!
//! Typed client for the Jamf Pro Classic (XML) and Jamf Pro (JSON) APIs.
//!
//! ## Features
//!
//! - **Bounded dispatch** - At most `max_concurrent_requests` requests in flight per client
//! - **Token management** - Bearer tokens renewed before expiry, one refresh at a time
//! - **Classic API** - Computers, sites, scripts, computer groups, policies, LDAP servers,
//!   computer extension attributes, ebooks, advanced computer searches, directory
//!   bindings, mobile device provisioning profiles and patch policies
//! - **Jamf Pro API** - API roles, API integrations and SSO failover, with paging and
//!   RSQL name lookup
//! - **File uploads** - Multipart attachments for any Classic resource
//!
//! ## Example
//!
//! ```rust,ignore
//! use jamfpro_api::{JamfProClient, Site};
//! use jamfpro_auth::Credentials;
//! use jamfpro_client::ClientConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), jamfpro_client::Error> {
//!     let credentials = Credentials::from_env().expect("JAMFPRO_* variables");
//!     let config = ClientConfig::builder()
//!         .with_max_concurrent_requests(3)
//!         .build();
//!     let client = JamfProClient::new(credentials, config)?;
//!
//!     let id = client.create_site(&Site::new("Annex")).await?;
//!     let site = client.get_site_by_id(id).await?;
//!     let roles = client.list_api_roles().await?;
//!
//!     client.shutdown().await;
//!     Ok(())
//! }
//! ```

mod client;
pub mod registry;

pub mod advanced_computer_searches;
pub mod api_integrations;
pub mod api_roles;
pub mod common;
pub mod computer_extension_attributes;
pub mod computer_groups;
pub mod computers;
pub mod directory_bindings;
pub mod ebooks;
pub mod ldap_servers;
pub mod mobile_device_provisioning_profiles;
pub mod patch_policies;
pub mod policies;
pub mod scripts;
pub mod sites;
pub mod sso_failover;

pub use client::{JamfProClient, JamfProClientBuilder, RequestDescriptor};
pub use registry::{ApiFamily, Endpoint, EndpointRegistry, Target};

pub use advanced_computer_searches::AdvancedComputerSearch;
pub use api_integrations::{ApiIntegration, ClientCredentials};
pub use api_roles::ApiRole;
pub use common::{HrefResponse, IdName, ListItem, Page, PageRequest, ResourceId};
pub use computer_extension_attributes::ComputerExtensionAttribute;
pub use computer_groups::ComputerGroup;
pub use computers::Computer;
pub use directory_bindings::DirectoryBinding;
pub use ebooks::Ebook;
pub use ldap_servers::LdapServer;
pub use mobile_device_provisioning_profiles::MobileDeviceProvisioningProfile;
pub use patch_policies::PatchPolicy;
pub use policies::{Policy, PolicyCreatedBy};
pub use scripts::Script;
pub use sites::Site;
pub use sso_failover::SsoFailover;
