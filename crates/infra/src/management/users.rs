//! User queries

use authing_domain::constants::USERS_PATH;
use authing_domain::{PaginatedUsers, QueryListRequest, Result, User};
use reqwest::Method;

use super::client::ManagementClient;
use super::documents;
use crate::transport::{variables_of, Variables};

impl ManagementClient {
    /// One page of users in the pool.
    pub async fn get_user_list(&self, request: QueryListRequest) -> Result<PaginatedUsers> {
        self.graphql(&documents::users(), variables_of(&request)?, "users").await
    }

    /// Full profile of a single user.
    pub async fn get_user_detail(&self, user_id: &str) -> Result<User> {
        self.rest_resource(Method::GET, USERS_PATH, user_id, Variables::new()).await
    }
}
