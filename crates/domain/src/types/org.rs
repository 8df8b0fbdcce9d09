//! Organisation tree types

use serde::{Deserialize, Serialize};

use super::common::Paginated;

/// A department node inside an organisation tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Node {
    pub id: String,
    pub org_id: Option<String>,
    pub name: String,
    pub name_i18n: Option<String>,
    pub description: Option<String>,
    pub order: Option<i64>,
    pub code: Option<String>,
    pub root: Option<bool>,
    pub depth: Option<i64>,
    pub path: Vec<String>,
    pub code_path: Vec<Option<String>>,
    pub name_path: Vec<String>,
    pub children: Vec<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// An organisation: its root node plus every node in the tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Org {
    pub id: String,
    pub root_node: Node,
    pub nodes: Vec<Node>,
}

pub type PaginatedOrgs = Paginated<Org>;

/// Arguments for listing the members of an organisation node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMemberRequest {
    pub node_id: String,
    pub page: u32,
    pub limit: u32,
    pub include_children_nodes: bool,
}

impl ListMemberRequest {
    /// First page of ten direct members
    pub fn new(node_id: impl Into<String>) -> Self {
        Self { node_id: node_id.into(), page: 1, limit: 10, include_children_nodes: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_org_with_nested_nodes() {
        let org: Org = serde_json::from_value(serde_json::json!({
            "id": "org1",
            "rootNode": {"id": "n0", "name": "Root", "root": true, "children": ["n1"]},
            "nodes": [
                {"id": "n0", "name": "Root"},
                {"id": "n1", "name": "R&D", "depth": 1, "path": ["n0", "n1"]}
            ]
        }))
        .unwrap();

        assert_eq!(org.root_node.name, "Root");
        assert_eq!(org.root_node.children, vec!["n1".to_string()]);
        assert_eq!(org.nodes.len(), 2);
        assert_eq!(org.nodes[1].path, vec!["n0".to_string(), "n1".to_string()]);
    }
}
