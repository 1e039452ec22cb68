//! Endpoint registry: which API family serves a resource and how it is addressed.
//!
//! The family fixes the codec, so request code never branches on XML vs JSON.

use std::collections::HashMap;

use jamfpro_client::security::path as path_security;
use jamfpro_client::{Codec, Error, ErrorKind, Result};

/// Classic API base path.
pub const CLASSIC_BASE: &str = "/JSSResource";

/// Jamf Pro API base path.
pub const PRO_BASE: &str = "/api";

/// The two API surfaces of a Jamf Pro instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiFamily {
    /// `/JSSResource`, XML bodies.
    Classic,
    /// `/api/<version>`, JSON bodies.
    Pro,
}

impl ApiFamily {
    /// Codec used for request and response bodies.
    pub fn codec(&self) -> Codec {
        match self {
            ApiFamily::Classic => Codec::Xml,
            ApiFamily::Pro => Codec::Json,
        }
    }
}

/// What a request addresses within a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// The resource collection itself.
    Collection,
    /// A single object by numeric or opaque ID.
    Id(String),
    /// A single object by human-readable name (Classic only).
    Name(String),
    /// A path below the collection. Segments must already be encoded.
    Subpath(String),
}

impl Target {
    /// Address an object by ID.
    pub fn id(id: impl ToString) -> Self {
        Target::Id(id.to_string())
    }

    /// Address an object by name.
    pub fn name(name: impl Into<String>) -> Self {
        Target::Name(name.into())
    }
}

/// A registered resource endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    family: ApiFamily,
    base_path: String,
}

impl Endpoint {
    /// Classic endpoint at `/JSSResource/<resource>`.
    pub fn classic(resource: &str) -> Self {
        Self {
            family: ApiFamily::Classic,
            base_path: format!("{}/{}", CLASSIC_BASE, resource),
        }
    }

    /// Jamf Pro endpoint at `/api/<version>/<resource>`.
    pub fn pro(version: &str, resource: &str) -> Self {
        Self {
            family: ApiFamily::Pro,
            base_path: format!("{}/{}/{}", PRO_BASE, version, resource),
        }
    }

    /// API family.
    pub fn family(&self) -> ApiFamily {
        self.family
    }

    /// Codec of the family.
    pub fn codec(&self) -> Codec {
        self.family.codec()
    }

    /// Path of the collection, e.g. `/JSSResource/computers`.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Resolve a target to a request path.
    ///
    /// Classic objects live at `…/id/<id>` and `…/name/<name>`; Jamf Pro objects
    /// at `…/<id>`. Jamf Pro has no by-name path; look names up with a filter.
    pub fn path_for(&self, target: &Target) -> Result<String> {
        match (self.family, target) {
            (_, Target::Collection) => Ok(self.base_path.clone()),
            (_, Target::Id(id)) | (_, Target::Name(id)) if id.is_empty() => Err(Error::new(
                ErrorKind::InvalidInput("empty identifier".to_string()),
            )),
            (ApiFamily::Classic, Target::Id(id)) => Ok(format!(
                "{}/id/{}",
                self.base_path,
                path_security::encode_segment(id)
            )),
            (ApiFamily::Classic, Target::Name(name)) => Ok(format!(
                "{}/name/{}",
                self.base_path,
                path_security::encode_segment(name)
            )),
            (ApiFamily::Pro, Target::Id(id)) => Ok(format!(
                "{}/{}",
                self.base_path,
                path_security::encode_segment(id)
            )),
            (ApiFamily::Pro, Target::Name(_)) => Err(Error::new(ErrorKind::InvalidInput(
                format!("{} does not support addressing by name", self.base_path),
            ))),
            (_, Target::Subpath(subpath)) => Ok(format!(
                "{}/{}",
                self.base_path,
                subpath.trim_start_matches('/')
            )),
        }
    }
}

/// Resource name → endpoint.
#[derive(Debug, Clone, Default)]
pub struct EndpointRegistry {
    endpoints: HashMap<String, Endpoint>,
}

/// Classic resources shipped with the crate.
const CLASSIC_RESOURCES: &[&str] = &[
    "computers",
    "sites",
    "scripts",
    "computergroups",
    "policies",
    "ldapservers",
    "computerextensionattributes",
    "ebooks",
    "advancedcomputersearches",
    "directorybindings",
    "mobiledeviceprovisioningprofiles",
    "patchpolicies",
];

/// Jamf Pro resources shipped with the crate: (name, version, path).
const PRO_RESOURCES: &[(&str, &str, &str)] = &[
    ("api-roles", "v1", "api-roles"),
    ("api-integrations", "v1", "api-integrations"),
    ("sso-failover", "v1", "sso/failover"),
];

impl EndpointRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every resource this crate has typed operations for.
    pub fn standard() -> Self {
        let mut endpoints = HashMap::new();
        for resource in CLASSIC_RESOURCES {
            endpoints.insert(resource.to_string(), Endpoint::classic(resource));
        }
        for (name, version, path) in PRO_RESOURCES {
            endpoints.insert(name.to_string(), Endpoint::pro(version, path));
        }
        Self { endpoints }
    }

    /// Register (or replace) an endpoint.
    pub fn register(&mut self, name: impl Into<String>, endpoint: Endpoint) -> Result<()> {
        let name = name.into();
        if !path_security::is_safe_path(endpoint.base_path()) {
            return Err(Error::new(ErrorKind::InvalidInput(format!(
                "unsafe endpoint path for {}: {}",
                name,
                endpoint.base_path()
            ))));
        }
        self.endpoints.insert(name, endpoint);
        Ok(())
    }

    /// Look up an endpoint.
    pub fn get(&self, name: &str) -> Result<&Endpoint> {
        self.endpoints.get(name).ok_or_else(|| {
            Error::new(ErrorKind::InvalidInput(format!(
                "unknown resource: {}",
                name
            )))
        })
    }

    /// Number of registered endpoints.
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}
