//! Role queries

use authing_domain::{GetRoleListRequest, GetRoleUserListRequest, PaginatedRoles, PaginatedUsers, Result};

use super::client::ManagementClient;
use super::documents;
use crate::transport::variables_of;

impl ManagementClient {
    /// One page of roles; the default namespace when none is given.
    pub async fn get_role_list(&self, request: GetRoleListRequest) -> Result<PaginatedRoles> {
        self.graphql(documents::ROLES, variables_of(&request)?, "roles").await
    }

    /// One page of the users that hold the role `request.code`.
    pub async fn get_role_user_list(&self, request: GetRoleUserListRequest) -> Result<PaginatedUsers> {
        self.graphql(&documents::role_with_users(), variables_of(&request)?, "role.users").await
    }
}
