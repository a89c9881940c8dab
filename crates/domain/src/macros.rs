//! Macro for implementing Display and FromStr for domain enums
//!
//! Booking statuses, member roles and booking conditions are stored as
//! strings by the surrounding application. This macro gives each enum one
//! canonical lowercase rendering and a case-insensitive parser.
//!
//! # Example
//!
//! ```rust
//! use slotwise_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Channel {
//!     Email,
//!     Sms,
//! }
//!
//! impl_domain_status_conversions!(Channel {
//!     Email => "email",
//!     Sms => "sms",
//! });
//!
//! assert_eq!(Channel::Sms.to_string(), "sms");
//! assert_eq!("EMAIL".parse::<Channel>().unwrap(), Channel::Email);
//! ```

/// Implements Display and FromStr traits for domain enums
///
/// - Display: the mapped lowercase string
/// - FromStr: case-insensitive match; unknown input yields a message naming
///   the enum
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
