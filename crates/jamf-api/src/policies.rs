//! Classic policies.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::{IdName, ListItem};

/// `GET /JSSResource/policies` and `…/createdBy/<kind>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "policies")]
pub struct PoliciesList {
    #[serde(default)]
    pub size: i64,
    #[serde(rename = "policy", default)]
    pub policies: Vec<ListItem>,
}

/// Who created a policy: the web console or Jamf Admin (formerly Casper Admin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyCreatedBy {
    Jss,
    Casper,
}

impl PolicyCreatedBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyCreatedBy::Jss => "jss",
            PolicyCreatedBy::Casper => "casper",
        }
    }
}

impl fmt::Display for PolicyCreatedBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A policy. Package, script and maintenance payloads are not modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "policy")]
pub struct Policy {
    pub general: PolicyGeneral,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<PolicyScope>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_service: Option<PolicySelfService>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyGeneral {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// `EVENT` or `USER_INITIATED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_checkin: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_enrollment_complete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_other: Option<String>,
    /// e.g. `Once per computer`, `Ongoing`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<IdName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<IdName>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyScope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_computers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computers: Option<ScopeComputers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computer_groups: Option<ScopeComputerGroups>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeComputers {
    #[serde(rename = "computer", default)]
    pub computers: Vec<IdName>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeComputerGroups {
    #[serde(rename = "computer_group", default)]
    pub groups: Vec<IdName>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySelfService {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_for_self_service: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_service_display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_button_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_service_description: Option<String>,
}
