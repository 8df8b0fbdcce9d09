//! GraphQL documents sent to `/graphql/v2`
//!
//! Each document selects the fields decoded by the matching record in
//! `authing_domain::types`.

/// Credential exchange; sent without a bearer header.
pub const ACCESS_TOKEN: &str = r#"
query accessToken($userPoolId: String!, $secret: String!) {
    accessToken(userPoolId: $userPoolId, secret: $secret) {
        accessToken
        exp
        iat
    }
}
"#;

const USER_FIELDS: &str = r#"
        id
        arn
        status
        userPoolId
        username
        email
        emailVerified
        phone
        phoneVerified
        unionid
        openid
        nickname
        registerSource
        photo
        loginsCount
        lastLogin
        lastIP
        signedUp
        blocked
        isDeleted
        company
        name
        givenName
        familyName
        preferredUsername
        gender
        birthdate
        locale
        address
        city
        province
        country
        externalId
        createdAt
        updatedAt
"#;

const NODE_FIELDS: &str = r#"
        id
        orgId
        name
        nameI18n
        description
        order
        code
        root
        depth
        path
        codePath
        namePath
        children
        createdAt
        updatedAt
"#;

fn with_fields(template: &str, placeholder: &str, fields: &str) -> String {
    template.replace(placeholder, fields)
}

pub fn users() -> String {
    with_fields(
        r#"
query users($page: Int, $limit: Int, $sortBy: SortByEnum) {
    users(page: $page, limit: $limit, sortBy: $sortBy) {
        totalCount
        list {__USER__}
    }
}
"#,
        "__USER__",
        USER_FIELDS,
    )
}

pub const ROLES: &str = r#"
query roles($namespace: String, $page: Int, $limit: Int, $sortBy: SortByEnum) {
    roles(namespace: $namespace, page: $page, limit: $limit, sortBy: $sortBy) {
        totalCount
        list {
            id
            namespace
            code
            arn
            description
            isSystem
            createdAt
            updatedAt
            parent {
                code
                description
                createdAt
                updatedAt
            }
        }
    }
}
"#;

pub fn role_with_users() -> String {
    with_fields(
        r#"
query roleWithUsers($code: String!, $namespace: String, $page: Int, $limit: Int) {
    role(code: $code, namespace: $namespace) {
        users(page: $page, limit: $limit) {
            totalCount
            list {__USER__}
        }
    }
}
"#,
        "__USER__",
        USER_FIELDS,
    )
}

pub fn org() -> String {
    with_fields(
        r#"
query org($id: String!) {
    org(id: $id) {
        id
        rootNode {__NODE__}
        nodes {__NODE__}
    }
}
"#,
        "__NODE__",
        NODE_FIELDS,
    )
}

pub fn node_by_id() -> String {
    with_fields(
        r#"
query nodeById($id: String!) {
    nodeById(id: $id) {__NODE__}
}
"#,
        "__NODE__",
        NODE_FIELDS,
    )
}

pub fn node_by_id_with_members() -> String {
    with_fields(
        r#"
query nodeByIdWithMembers($page: Int, $limit: Int, $sortBy: SortByEnum, $includeChildrenNodes: Boolean, $nodeId: String!) {
    nodeById(id: $nodeId) {
        id
        users(page: $page, limit: $limit, sortBy: $sortBy, includeChildrenNodes: $includeChildrenNodes) {
            totalCount
            list {__USER__}
        }
    }
}
"#,
        "__USER__",
        USER_FIELDS,
    )
}

pub const SEND_EMAIL: &str = r#"
mutation sendEmail($email: String!, $scene: EmailScene!) {
    sendEmail(email: $email, scene: $scene) {
        message
        code
    }
}
"#;

pub const CHECK_LOGIN_STATUS: &str = r#"
query checkLoginStatus($token: String) {
    checkLoginStatus(token: $token) {
        code
        message
        status
        exp
        iat
        data {
            id
            userPoolId
            arn
        }
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_document_names_the_operation() {
        assert!(ACCESS_TOKEN.trim_start().starts_with("query accessToken"));
    }

    #[test]
    fn placeholders_are_expanded() {
        for document in [users(), role_with_users(), org(), node_by_id(), node_by_id_with_members()] {
            assert!(!document.contains("__"), "unexpanded placeholder in {document}");
        }
        assert!(users().contains("lastIP"));
        assert!(org().contains("codePath"));
    }
}
