//! Bearer token providers for the management API

pub mod provider;

pub use provider::{AccessTokenProvider, CredentialProvider, TokenCache};
