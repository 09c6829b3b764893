//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_entity_id!` macro to create type-safe ID wrappers that
//! prevent accidentally mixing IDs from different entity types.
//!
//! Identifiers are strings of the form `<prefix><base36 millis><suffix>`,
//! e.g. `q-m3k1x7a9f2kq`. Generation is randomized rather than coordinated;
//! uniqueness holds with high probability for an uncontended workload, and
//! the millisecond component gives rough chronological ordering only.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Number of random characters appended to a generated identifier.
const SUFFIX_LENGTH: usize = 6;

/// Macro to define a type-safe entity ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - A `generate()` constructor producing a prefixed, timestamped identifier
/// - `as_str()`, `Display`, `From<String>`, and `From<&str>` implementations
///
/// # Example
///
/// ```rust
/// # use quorum_core::define_entity_id;
/// define_entity_id!(TopicId, "t-");
///
/// let id = TopicId::generate();
/// assert!(id.as_str().starts_with("t-"));
/// ```
#[macro_export]
macro_rules! define_entity_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Identifier prefix for this entity type.
            pub const PREFIX: &'static str = $prefix;

            /// Generate a fresh identifier.
            ///
            /// Not cryptographically unique; collision probability is low
            /// enough for a single-writer-at-a-time workload.
            #[must_use]
            pub fn generate() -> Self {
                Self($crate::types::id::generate_raw($prefix))
            }

            /// Get the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_entity_id!(QuestionId, "q-");
define_entity_id!(AnswerId, "a-");

/// Build a raw identifier string: prefix, base36 of the current millisecond
/// timestamp, and a short random alphanumeric suffix.
#[must_use]
pub fn generate_raw(prefix: &str) -> String {
    let millis = u128::from(chrono::Utc::now().timestamp_millis().unsigned_abs());
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(SUFFIX_LENGTH)
        .map(|b| char::from(b.to_ascii_lowercase()))
        .collect();

    format!("{prefix}{}{suffix}", base36(millis))
}

/// Encode a number in lowercase base36.
fn base36(mut n: u128) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if n == 0 {
        return "0".to_owned();
    }

    let mut digits = Vec::new();
    while n > 0 {
        let d = usize::try_from(n % 36).unwrap_or_default();
        digits.push(char::from(DIGITS.get(d).copied().unwrap_or(b'0')));
        n /= 36;
    }
    digits.iter().rev().collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_base36_zero() {
        assert_eq!(base36(0), "0");
    }

    #[test]
    fn test_base36_known_values() {
        assert_eq!(base36(35), "z");
        assert_eq!(base36(36), "10");
        assert_eq!(base36(1_295), "zz");
    }

    #[test]
    fn test_generate_has_prefix() {
        let id = QuestionId::generate();
        assert!(id.as_str().starts_with("q-"));

        let id = AnswerId::generate();
        assert!(id.as_str().starts_with("a-"));
    }

    #[test]
    fn test_generate_is_lowercase_alphanumeric() {
        let id = QuestionId::generate();
        let rest = id.as_str().strip_prefix("q-").unwrap();
        assert!(!rest.is_empty());
        assert!(
            rest.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn test_generate_unique() {
        let a = QuestionId::generate();
        let b = QuestionId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_serde_transparent() {
        let id = QuestionId::from("q-abc123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"q-abc123\"");

        let parsed: QuestionId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_display() {
        let id = AnswerId::from("a-xyz");
        assert_eq!(format!("{id}"), "a-xyz");
    }
}
