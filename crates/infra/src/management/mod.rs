//! Management API client and its operations
//!
//! Operations are grouped by resource; each file adds methods to
//! [`ManagementClient`].

pub mod account;
pub mod client;
pub mod documents;
pub mod orgs;
pub mod roles;
pub mod users;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{ManagementClient, ManagementClientBuilder};
