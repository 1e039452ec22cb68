//! Classic computer groups, static and smart.

use serde::{Deserialize, Serialize};

use crate::common::{IdName, ListItem};

/// `GET /JSSResource/computergroups`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "computer_groups")]
pub struct ComputerGroupsList {
    #[serde(default)]
    pub size: i64,
    #[serde(rename = "computer_group", default)]
    pub groups: Vec<ComputerGroupListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerGroupListItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub is_smart: bool,
}

/// A computer group. Smart groups carry criteria; static groups carry members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "computer_group")]
pub struct ComputerGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub is_smart: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<IdName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria: Option<Criteria>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computers: Option<GroupComputers>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(rename = "criterion", default)]
    pub criteria: Vec<Criterion>,
}

/// One smart group rule, e.g. `Operating System Version` `like` `14.`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub priority: i32,
    /// `and` or `or`.
    pub and_or: String,
    pub search_type: String,
    pub value: String,
    #[serde(default)]
    pub opening_paren: bool,
    #[serde(default)]
    pub closing_paren: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupComputers {
    #[serde(rename = "computer", default)]
    pub computers: Vec<ListItem>,
}
