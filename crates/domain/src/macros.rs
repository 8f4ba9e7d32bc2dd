//! Macro for implementing string conversions on unit-variant enums
//!
//! Generates `as_str`, `Display` and a case-insensitive `FromStr` from a single
//! variant table, so the wire spelling of an enum lives in one place.
//!
//! # Example
//!
//! ```rust
//! use tork_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Channel {
//!     Input,
//!     Output,
//! }
//!
//! impl_domain_enum_conversions!(Channel {
//!     Input => "input",
//!     Output => "output",
//! });
//!
//! assert_eq!("OUTPUT".parse::<Channel>().unwrap(), Channel::Output);
//! assert_eq!(Channel::Input.to_string(), "input");
//! ```

/// Implements `as_str`, `Display` and `FromStr` for unit-variant enums
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their lowercase
///   spelling
///
/// Parsing trims surrounding whitespace and ignores case. Unknown values
/// yield [`TorkError::Config`](crate::errors::TorkError::Config) naming the
/// enum and the rejected input.
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical lowercase spelling.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::errors::TorkError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err($crate::errors::TorkError::Config(format!(
                        "Invalid {}: {}",
                        stringify!($enum_name),
                        s
                    ))),
                }
            }
        }
    };
}
