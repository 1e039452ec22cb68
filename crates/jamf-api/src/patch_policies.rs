//! Classic patch policies.
//!
//! Patch policies belong to a patch software title configuration; they are
//! created under it and listed per title.

use serde::{Deserialize, Serialize};

use crate::common::ListItem;
use crate::policies::PolicyScope;

/// `GET /JSSResource/patchpolicies` and
/// `GET /JSSResource/patchpolicies/softwaretitleconfig/id/<id>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "patch_policies")]
pub struct PatchPoliciesList {
    #[serde(default)]
    pub size: i64,
    #[serde(rename = "patch_policy", default)]
    pub policies: Vec<ListItem>,
}

/// A patch policy. User interaction settings are not modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "patch_policy")]
pub struct PatchPolicy {
    pub general: PatchPolicyGeneral,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<PolicyScope>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software_title_configuration_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchPolicyGeneral {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Title version this policy installs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incremental_update: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reboot: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_os: Option<String>,
    /// `prompt` or `selfservice`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_downgrade: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch_unknown: Option<bool>,
}
