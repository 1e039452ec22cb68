//! Classic advanced computer searches.

use serde::{Deserialize, Serialize};

use crate::common::{IdName, ListItem};
use crate::computer_groups::Criteria;

/// `GET /JSSResource/advancedcomputersearches`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "advanced_computer_searches")]
pub struct AdvancedComputerSearchesList {
    #[serde(default)]
    pub size: i64,
    #[serde(rename = "advanced_computer_search", default)]
    pub searches: Vec<ListItem>,
}

/// A saved inventory search: criteria plus the columns shown for each match.
///
/// Search results (`computers`) are read-only and not modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "advanced_computer_search")]
pub struct AdvancedComputerSearch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    /// e.g. `Standard Web Page`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_as: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria: Option<Criteria>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_fields: Option<DisplayFields>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<IdName>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFields {
    #[serde(rename = "display_field", default)]
    pub fields: Vec<DisplayField>,
}

/// Inventory column, e.g. `Computer Name` or `Architecture Type`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayField {
    pub name: String,
}

impl DisplayFields {
    /// Columns by name.
    pub fn named<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: names
                .into_iter()
                .map(|name| DisplayField { name: name.into() })
                .collect(),
        }
    }
}
