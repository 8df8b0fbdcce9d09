//! Time abstractions
//!
//! Real and mock clocks so that expiry-driven code (the credential cache)
//! can be tested without sleeping.
//!
//! ```rust
//! use std::time::Duration;
//!
//! use authing_common::time::{Clock, MockClock};
//!
//! let clock = MockClock::new();
//! let before = clock.now();
//! clock.advance(Duration::from_secs(5));
//! assert_eq!(clock.now() - before, Duration::from_secs(5));
//! ```

pub mod clock;

pub use clock::{Clock, MockClock, SystemClock};
