//! Classic LDAP server connections.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::ListItem;

/// `GET /JSSResource/ldapservers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "ldap_servers")]
pub struct LdapServersList {
    #[serde(default)]
    pub size: i64,
    #[serde(rename = "ldap_server", default)]
    pub servers: Vec<ListItem>,
}

/// An LDAP server. Attribute mappings are not modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "ldap_server")]
pub struct LdapServer {
    pub connection: LdapConnection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LdapConnection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub hostname: String,
    /// `Active Directory`, `Open Directory`, `eDirectory` or `Custom`.
    pub server_type: String,
    pub port: u16,
    #[serde(default)]
    pub use_ssl: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<LdapAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_close_timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_wildcards: Option<bool>,
}

/// Bind account. Jamf Pro never returns the password; send it only on create/update.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LdapAccount {
    pub distinguished_username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl fmt::Debug for LdapAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LdapAccount")
            .field("distinguished_username", &self.distinguished_username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// `GET /JSSResource/ldapservers/id/<id>/group/<group>`: groups matching a search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "ldap_groups")]
pub struct LdapGroupSearch {
    #[serde(default)]
    pub searchterm: String,
    #[serde(rename = "ldap_group", default)]
    pub groups: Vec<LdapGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LdapGroup {
    #[serde(default)]
    pub uid: String,
    pub groupname: String,
    #[serde(default)]
    pub distinguished_name: String,
}
