//! TTL cache
//!
//! A small thread-safe key/value store where every entry carries its own
//! absolute expiry. Expired entries are dropped lazily on read; there is no
//! capacity bound and no other eviction policy.
//!
//! # Example
//! ```
//! use std::time::Duration;
//!
//! use authing_common::cache::TtlCache;
//!
//! let cache: TtlCache<String, String> = TtlCache::new();
//! cache.set("token:pool".to_string(), "abc".to_string(), Duration::from_secs(60));
//! assert_eq!(cache.get(&"token:pool".to_string()), Some("abc".to_string()));
//! ```

pub mod ttl;

pub use ttl::TtlCache;
