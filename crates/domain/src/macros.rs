//! Macro for implementing Display and FromStr for wire enums
//!
//! Authing encodes enum arguments (sort orders, email scenes) as upper-case
//! GraphQL enum literals. This macro keeps the `Display` text and the
//! `FromStr` parser in one mapping so the two never drift apart.
//!
//! # Example
//!
//! ```rust
//! use authing_domain::impl_wire_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Direction {
//!     Ascending,
//!     Descending,
//! }
//!
//! impl_wire_enum_conversions!(Direction {
//!     Ascending => "ASC",
//!     Descending => "DESC",
//! });
//!
//! assert_eq!(Direction::Ascending.to_string(), "ASC");
//! assert_eq!("desc".parse::<Direction>().unwrap(), Direction::Descending);
//! ```

/// Implements Display and FromStr traits for wire enums
///
/// This macro generates:
/// - Display trait: writes the upper-case wire literal
/// - FromStr trait: parses case-insensitive strings to enum variants
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their upper-case wire
///   literal
#[macro_export]
macro_rules! impl_wire_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_uppercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
