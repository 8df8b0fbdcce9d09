//! # Authing Domain
//!
//! Wire types and error definitions for the Authing management client.
//!
//! This crate contains:
//! - Request/response records mirroring the remote JSON contract
//! - The SDK error type and `Result` alias
//! - Client configuration structures
//! - Protocol constants (paths, header names, credential TTL)
//!
//! ## Architecture
//! - No dependencies on other SDK crates
//! - No I/O; pure data and serde derives

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
