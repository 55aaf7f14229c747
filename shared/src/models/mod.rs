//! Data models
//!
//! Mirrors of the JSON shapes returned by the DineDash REST API.
//! All IDs are backend-generated UUID strings; timestamps stay ISO-8601
//! strings as sent by the server.
//!
//! Status fields use [`wire_enum!`] so that a status this client does not
//! know yet deserializes into `Other(..)` instead of failing the whole
//! payload.

/// Declare a string-valued status enum with an `Other(String)` fallback.
///
/// Generates `as_str`, `all` (known variants in declaration order),
/// `is_known`, `From<String>`, `From<&str>`, `Into<String>` and `Display`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Value not known to this client
            Other(String),
        }

        impl $name {
            /// Wire representation
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Other(s) => s.as_str(),
                }
            }

            /// All known variants
            pub fn all() -> Vec<Self> {
                vec![$( Self::$variant ),+]
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                match s.as_str() {
                    $( $wire => Self::$variant, )+
                    _ => Self::Other(s),
                }
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::from(s.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                match value {
                    $name::Other(s) => s,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad(self.as_str())
            }
        }
    };
}

pub mod admin;
pub mod menu;
pub mod order;
pub mod payment;
pub mod reservation;
pub mod restaurant;
pub mod user;

// Re-exports
pub use admin::*;
pub use menu::*;
pub use order::*;
pub use payment::*;
pub use reservation::*;
pub use restaurant::*;
pub use user::*;
