//! Classic sites.

use serde::{Deserialize, Serialize};

use crate::common::ListItem;

/// `GET /JSSResource/sites`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "sites")]
pub struct SitesList {
    #[serde(default)]
    pub size: i64,
    #[serde(rename = "site", default)]
    pub sites: Vec<ListItem>,
}

/// A site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "site")]
pub struct Site {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
}

impl Site {
    /// New site with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}
