//! Source models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::pagination::PaginationResponse;

/// A configured content source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: String,
    pub name: String,
    pub account_id: String,
    pub source_type: String,
    #[serde(default)]
    pub content_filter: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Page of sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceListResponse {
    #[serde(default)]
    pub data: Vec<Source>,
    pub pagination: PaginationResponse,
}

/// Query parameters for listing sources. Zero and empty values are omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListSourcesParams {
    pub page: u32,
    pub limit: u32,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub account_id: Option<String>,
}

impl ListSourcesParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>, order: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self.order = Some(order.into());
        self
    }

    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }
}
