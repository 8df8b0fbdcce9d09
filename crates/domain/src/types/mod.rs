//! Wire types mirroring the Authing GraphQL and REST contracts
//!
//! Field names follow the remote camelCase spelling on the wire. Response
//! fields are optional wherever the service may omit them so that a sparse
//! payload still decodes.

pub mod account;
pub mod common;
pub mod org;
pub mod role;
pub mod user;

// Re-export for convenience
pub use account::{
    AccessTokenGrant, CheckLoginStatusResponse, ClientCredentialInput, ClientCredentialsRequest,
    ClientCredentialsToken, EmailScene, LoginStatusDetail, PasswordValidity, TokenToValidate,
};
pub use common::{CommonMessageAndCode, Paginated, QueryListRequest, SortBy};
pub use org::{ListMemberRequest, Node, Org, PaginatedOrgs};
pub use role::{GetRoleListRequest, GetRoleUserListRequest, PaginatedRoles, Role};
pub use user::{PaginatedUsers, User};
