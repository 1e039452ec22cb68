//! Classic directory bindings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::ListItem;

/// `GET /JSSResource/directorybindings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "directory_bindings")]
pub struct DirectoryBindingsList {
    #[serde(default)]
    pub size: i64,
    #[serde(rename = "directory_binding", default)]
    pub bindings: Vec<ListItem>,
}

/// Binding of managed computers to a directory domain.
///
/// Jamf Pro does not return the password; it is sent only on create/update.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "directory_binding")]
pub struct DirectoryBinding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computer_ou: Option<String>,
    /// `Active Directory`, `Open Directory`, `PowerBroker Identity Services` ...
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub binding_type: Option<String>,
}

impl fmt::Debug for DirectoryBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryBinding")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("domain", &self.domain)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("computer_ou", &self.computer_ou)
            .field("binding_type", &self.binding_type)
            .finish()
    }
}
