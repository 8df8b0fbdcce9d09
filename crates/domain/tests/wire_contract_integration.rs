//! Integration tests for the wire contract of the domain types
//!
//! **Coverage:**
//! - Realistic service payloads decode into the typed records
//! - Request records serialize to the variable names the service expects
//! - Errors serialize as `{ type, message }` for transport across process
//!   boundaries

use authing_domain::{
    AuthingError, ClientCredentialInput, ClientCredentialsRequest, GetRoleUserListRequest,
    ListMemberRequest, PaginatedOrgs, PaginatedUsers, User,
};
use serde_json::json;

#[test]
fn decodes_user_page_from_service_payload() {
    let page: PaginatedUsers = serde_json::from_value(json!({
        "totalCount": 2,
        "list": [
            {
                "id": "60b4a1",
                "arn": "arn:cn:authing:user:60b4a1",
                "userPoolId": "pool",
                "username": "ann",
                "email": "ann@example.com",
                "emailVerified": true,
                "loginsCount": 12,
                "lastIP": "10.0.0.1",
                "registerSource": ["import:manual"],
                "createdAt": "2021-05-31T08:00:00+00:00"
            },
            {"id": "60b4a2", "phone": "13800000000", "blocked": false}
        ]
    }))
    .expect("user page should decode");

    assert_eq!(page.total_count, 2);
    let ann: &User = &page.list[0];
    assert_eq!(ann.last_ip.as_deref(), Some("10.0.0.1"));
    assert_eq!(ann.logins_count, Some(12));
    assert_eq!(page.list[1].username, None);
}

#[test]
fn decodes_org_page_from_service_payload() {
    let page: PaginatedOrgs = serde_json::from_value(json!({
        "totalCount": 1,
        "list": [{
            "id": "org1",
            "rootNode": {"id": "n0", "orgId": "org1", "name": "HQ", "root": true, "depth": 0},
            "nodes": [
                {"id": "n0", "name": "HQ", "codePath": [null], "namePath": ["HQ"]},
                {"id": "n1", "name": "R&D", "codePath": [null, "rd"], "namePath": ["HQ", "R&D"]}
            ]
        }]
    }))
    .expect("org page should decode");

    let org = &page.list[0];
    assert_eq!(org.root_node.org_id.as_deref(), Some("org1"));
    assert_eq!(org.nodes[1].code_path, vec![None, Some("rd".to_string())]);
}

#[test]
fn request_records_use_service_variable_names() {
    let members = serde_json::to_value(ListMemberRequest::new("n1")).unwrap();
    assert_eq!(
        members,
        json!({"nodeId": "n1", "page": 1, "limit": 10, "includeChildrenNodes": false})
    );

    let role_users = serde_json::to_value(GetRoleUserListRequest::new("admin")).unwrap();
    assert_eq!(role_users, json!({"page": 1, "limit": 10, "code": "admin"}));

    let credentials = serde_json::to_value(ClientCredentialsRequest {
        scope: "openid".into(),
        credentials: ClientCredentialInput { access_key: "ak".into(), secret_key: "sk".into() },
    })
    .unwrap();
    assert_eq!(
        credentials,
        json!({"scope": "openid", "client_credential_input": {"access_key": "ak", "secret_key": "sk"}})
    );
}

#[test]
fn errors_serialize_with_type_tag() {
    let err = AuthingError::Remote { message: "用户不存在".into(), code: Some(2004) };
    let value = serde_json::to_value(&err).unwrap();
    assert_eq!(
        value,
        json!({"type": "Remote", "message": {"message": "用户不存在", "code": 2004}})
    );

    let network = serde_json::to_value(AuthingError::Network("refused".into())).unwrap();
    assert_eq!(network, json!({"type": "Network", "message": "refused"}));

    let back: AuthingError = serde_json::from_value(value).unwrap();
    assert_eq!(back, err);
}
