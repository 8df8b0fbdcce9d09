//! Role types

use serde::{Deserialize, Serialize};

use super::common::{Paginated, SortBy};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Role {
    pub id: Option<String>,
    pub namespace: Option<String>,
    pub code: String,
    pub arn: Option<String>,
    pub description: Option<String>,
    pub is_system: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub parent: Option<Box<Role>>,
}

pub type PaginatedRoles = Paginated<Role>;

/// Arguments for the `roles` query; `namespace: None` means the default namespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRoleListRequest {
    pub page: u32,
    pub limit: u32,
    pub sort_by: SortBy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl Default for GetRoleListRequest {
    fn default() -> Self {
        Self { page: 1, limit: 10, sort_by: SortBy::default(), namespace: None }
    }
}

/// Arguments for listing the users that hold a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRoleUserListRequest {
    pub page: u32,
    pub limit: u32,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl GetRoleUserListRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self { page: 1, limit: 10, code: code.into(), namespace: None }
    }
}
