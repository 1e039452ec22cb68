//! Classic computer extension attributes.

use serde::{Deserialize, Serialize};

use crate::common::ListItem;

/// `GET /JSSResource/computerextensionattributes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "computer_extension_attributes")]
pub struct ComputerExtensionAttributesList {
    #[serde(default)]
    pub size: i64,
    #[serde(rename = "computer_extension_attribute", default)]
    pub attributes: Vec<ListItem>,
}

/// An inventory field populated by a script, pop-up menu, text field or LDAP mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "computer_extension_attribute")]
pub struct ComputerExtensionAttribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `String`, `Integer` or `Date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,
    /// Inventory category the value is shown under, e.g. `Extension Attributes`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recon_display: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputType {
    /// `script`, `Text Field`, `Pop-up Menu` or `LDAP Attribute Mapping`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
}
