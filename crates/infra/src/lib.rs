//! # Authing Infrastructure
//!
//! HTTP implementation of the Authing management client.
//!
//! This crate contains:
//! - The HTTP client wrapper and `reqwest` error conversions
//! - Request transport and response envelope decoding
//! - Access token acquisition with a TTL cache
//! - The [`ManagementClient`] and its user, organisation, role and account
//!   operations
//! - Configuration loading from the environment or JSON/TOML files
//!
//! ## Architecture
//! - Depends on `authing-domain` for wire types and errors
//! - Depends on `authing-common` for the clock and cache
//! - Contains all "impure" code (network and file I/O)

pub mod auth;
pub mod config;
pub mod envelope;
pub mod errors;
pub mod http;
pub mod management;
pub mod transport;

// Re-export commonly used items
pub use auth::{AccessTokenProvider, CredentialProvider, TokenCache};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use management::{ManagementClient, ManagementClientBuilder};
pub use transport::{Transport, Variables};
