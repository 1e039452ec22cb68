//! Shapes shared by many resources.

use serde::{Deserialize, Serialize};

/// `<resource><id>N</id></resource>` as returned by Classic create/update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceId {
    pub id: i64,
}

/// Entry of a Classic list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: i64,
    pub name: String,
}

/// Reference to another object by ID and/or name, e.g. a site or category.
///
/// Classic payloads accept either field; unset ones are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl IdName {
    /// Reference by ID.
    pub fn id(id: i64) -> Self {
        Self {
            id: Some(id),
            name: None,
        }
    }

    /// Reference by name.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }
}

/// Jamf Pro paged collection: `{"totalCount": N, "results": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub total_count: i64,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Jamf Pro create response: `{"id": "..", "href": ".."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrefResponse {
    pub id: String,
    pub href: String,
}

/// Paging parameters for Jamf Pro collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: u32,
    /// Results per page.
    pub page_size: u32,
    /// Sort expression, e.g. `id:asc`.
    pub sort: Option<String>,
    /// RSQL filter expression.
    pub filter: Option<String>,
}

/// Largest page the Jamf Pro API serves.
pub const MAX_PAGE_SIZE: u32 = 2000;

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 100,
            sort: None,
            filter: None,
        }
    }
}

impl PageRequest {
    /// First page with the given size, capped at [`MAX_PAGE_SIZE`].
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            ..Self::default()
        }
    }

    /// Set the sort expression.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Set the RSQL filter.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub(crate) fn query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("page".to_string(), self.page.to_string()),
            ("page-size".to_string(), self.page_size.to_string()),
        ];
        if let Some(sort) = &self.sort {
            query.push(("sort".to_string(), sort.clone()));
        }
        if let Some(filter) = &self.filter {
            query.push(("filter".to_string(), filter.clone()));
        }
        query
    }
}
