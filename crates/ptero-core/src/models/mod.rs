//! Wire types for the Application API.
//!
//! Every resource comes wrapped as `{"object": "...", "attributes": {...}}`
//! and every list as `{"object": "list", "data": [...], "meta": {...}}`.
//! Endpoint wrappers unwrap these before handing values to callers.

pub mod database;
pub mod location;
pub mod nest;
pub mod node;
pub mod server;
pub mod user;

pub use database::*;
pub use location::*;
pub use nest::*;
pub use node::*;
pub use server::*;
pub use user::*;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{PanelError, Result};

pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource<T> {
    pub object: String,
    pub attributes: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceList<T> {
    pub object: String,
    pub data: Vec<Resource<T>>,
    #[serde(default)]
    pub meta: Option<ListMeta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMeta {
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    pub count: u64,
    pub per_page: u64,
    pub current_page: u64,
    pub total_pages: u64,
}

/// One page of unwrapped resources.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
}

impl<T> Page<T> {
    pub fn has_next_page(&self) -> bool {
        self.pagination
            .as_ref()
            .map(|p| p.current_page < p.total_pages)
            .unwrap_or(false)
    }
}

impl<T> From<ResourceList<T>> for Page<T> {
    fn from(list: ResourceList<T>) -> Self {
        Page {
            items: list.data.into_iter().map(|r| r.attributes).collect(),
            pagination: list.meta.map(|m| m.pagination),
        }
    }
}

/// Query options shared by the list endpoints.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// `(field, value)` pairs, sent as `filter[field]=value`
    pub filters: Vec<(String, String)>,
    /// Sort column, `-` prefix for descending
    pub sort: Option<String>,
    pub include: Vec<String>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn include(mut self, relation: impl Into<String>) -> Self {
        self.include.push(relation.into());
        self
    }

    /// Validate and render as query-string pairs.
    pub fn to_pairs(&self) -> Result<Vec<(String, String)>> {
        let mut pairs = Vec::new();

        if let Some(page) = self.page {
            if page == 0 {
                return Err(PanelError::invalid("page", "must be at least 1"));
            }
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            if per_page == 0 || per_page > MAX_PER_PAGE {
                return Err(PanelError::invalid(
                    "per_page",
                    format!("must be between 1 and {}", MAX_PER_PAGE),
                ));
            }
            pairs.push(("per_page".to_string(), per_page.to_string()));
        }
        for (field, value) in &self.filters {
            if field.trim().is_empty() {
                return Err(PanelError::invalid("filter", "field name is empty"));
            }
            pairs.push((format!("filter[{}]", field), value.clone()));
        }
        if let Some(sort) = &self.sort {
            if sort.trim_start_matches('-').is_empty() {
                return Err(PanelError::invalid("sort", "column name is empty"));
            }
            pairs.push(("sort".to_string(), sort.clone()));
        }
        if !self.include.is_empty() {
            pairs.push(("include".to_string(), self.include.join(",")));
        }
        Ok(pairs)
    }
}

/// The panel has sent some flags as `true`/`false` and others as `1`/`0`
/// across releases.
pub(crate) fn bool_or_int<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(i) => i != 0,
    })
}
