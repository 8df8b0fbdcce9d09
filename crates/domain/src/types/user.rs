//! User records
//!
//! Returned by `users`, `role.users`, `nodeById.users` and the
//! `/api/v2/users/{id}` endpoint.

use serde::{Deserialize, Serialize};

use super::common::Paginated;

/// User profile as stored in the user pool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: String,
    pub arn: Option<String>,
    pub status: Option<String>,
    pub user_pool_id: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    pub phone: Option<String>,
    pub phone_verified: Option<bool>,
    pub unionid: Option<String>,
    pub openid: Option<String>,
    pub nickname: Option<String>,
    pub register_source: Option<Vec<String>>,
    pub photo: Option<String>,
    pub logins_count: Option<i64>,
    pub last_login: Option<String>,
    #[serde(rename = "lastIP")]
    pub last_ip: Option<String>,
    pub signed_up: Option<String>,
    pub blocked: Option<bool>,
    pub is_deleted: Option<bool>,
    pub company: Option<String>,
    pub name: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub preferred_username: Option<String>,
    pub gender: Option<String>,
    pub birthdate: Option<String>,
    pub locale: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: Option<String>,
    pub external_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

pub type PaginatedUsers = Paginated<User>;
