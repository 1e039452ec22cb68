//! Classic scripts.

use serde::{Deserialize, Serialize};

use crate::common::ListItem;

/// `GET /JSSResource/scripts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "scripts")]
pub struct ScriptsList {
    #[serde(default)]
    pub size: i64,
    #[serde(rename = "script", default)]
    pub scripts: Vec<ListItem>,
}

/// A script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "script")]
pub struct Script {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// `Before`, `After` or `At Reboot`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ScriptParameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_requirements: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_contents: Option<String>,
}

/// Labels for script parameters 4 through 11 (1-3 are reserved by the agent).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter5: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter6: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter7: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter8: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter9: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter10: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter11: Option<String>,
}
