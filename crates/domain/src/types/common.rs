//! Shared request/response shapes: pagination, sorting, message envelopes

use serde::{Deserialize, Serialize};

use crate::impl_wire_enum_conversions;

/// Sort order accepted by the list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortBy {
    #[default]
    #[serde(rename = "CREATEDAT_DESC")]
    CreatedAtDesc,
    #[serde(rename = "CREATEDAT_ASC")]
    CreatedAtAsc,
    #[serde(rename = "UPDATEDAT_DESC")]
    UpdatedAtDesc,
    #[serde(rename = "UPDATEDAT_ASC")]
    UpdatedAtAsc,
}

impl_wire_enum_conversions!(SortBy {
    CreatedAtDesc => "CREATEDAT_DESC",
    CreatedAtAsc => "CREATEDAT_ASC",
    UpdatedAtDesc => "UPDATEDAT_DESC",
    UpdatedAtAsc => "UPDATEDAT_ASC",
});

/// Page/limit/sort arguments shared by user and organisation listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryListRequest {
    pub page: u32,
    pub limit: u32,
    pub sort_by: SortBy,
}

impl Default for QueryListRequest {
    fn default() -> Self {
        Self { page: 1, limit: 10, sort_by: SortBy::default() }
    }
}

impl QueryListRequest {
    pub fn new(page: u32, limit: u32, sort_by: SortBy) -> Self {
        Self { page, limit, sort_by }
    }
}

/// One page of results plus the total count across all pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    #[serde(default)]
    pub total_count: i64,
    #[serde(default)]
    pub list: Vec<T>,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self { total_count: 0, list: Vec::new() }
    }
}

/// `{ message, code }` pair returned by mutations such as `sendEmail`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonMessageAndCode {
    pub message: Option<String>,
    pub code: Option<i64>,
}
