//! Classic ebooks.

use serde::{Deserialize, Serialize};

use crate::common::{IdName, ListItem};
use crate::policies::{ScopeComputerGroups, ScopeComputers};

/// `GET /JSSResource/ebooks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "ebooks")]
pub struct EbooksList {
    #[serde(default)]
    pub size: i64,
    #[serde(rename = "ebook", default)]
    pub ebooks: Vec<ListItem>,
}

/// An ebook distributed to computers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "ebook")]
pub struct Ebook {
    pub general: EbookGeneral,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<EbookScope>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EbookGeneral {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// `Install Automatically` or `Make Available in Self Service`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<IdName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<IdName>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EbookScope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_computers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computers: Option<ScopeComputers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computer_groups: Option<ScopeComputerGroups>,
}
