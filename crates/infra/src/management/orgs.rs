//! Organisation tree queries

use authing_domain::constants::{ORGS_EXPORT_PATH, ORGS_PAGINATION_PATH};
use authing_domain::{ListMemberRequest, Node, Org, PaginatedOrgs, PaginatedUsers, QueryListRequest, Result};
use reqwest::Method;
use serde_json::json;

use super::client::ManagementClient;
use super::documents;
use crate::transport::{variables_of, Variables};

impl ManagementClient {
    /// Organisation with its root node and every node of the tree.
    pub async fn get_organization_by_id(&self, org_id: &str) -> Result<Org> {
        self.graphql(&documents::org(), variables_of(&json!({ "id": org_id }))?, "org").await
    }

    /// A single organisation node without its members.
    pub async fn get_node_by_id(&self, node_id: &str) -> Result<Node> {
        self.graphql(&documents::node_by_id(), variables_of(&json!({ "id": node_id }))?, "nodeById")
            .await
    }

    /// Members of a node, optionally including those of its descendants.
    pub async fn list_org_members(&self, request: ListMemberRequest) -> Result<PaginatedUsers> {
        self.graphql(&documents::node_by_id_with_members(), variables_of(&request)?, "nodeById.users")
            .await
    }

    /// One page of organisations in the pool.
    pub async fn list_organizations(&self, request: QueryListRequest) -> Result<PaginatedOrgs> {
        self.rest(Method::GET, ORGS_PAGINATION_PATH, variables_of(&request)?).await
    }

    /// Every node of every organisation in the pool, flattened.
    pub async fn export_all_organizations(&self) -> Result<Vec<Node>> {
        self.rest(Method::GET, ORGS_EXPORT_PATH, Variables::new()).await
    }
}
