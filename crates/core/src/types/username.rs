//! Username type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Username`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum UsernameError {
    /// The input string is empty.
    #[error("username cannot be empty")]
    Empty,
    /// The input string is too short.
    #[error("username must be at least {min} characters")]
    TooShort {
        /// Minimum allowed length.
        min: usize,
    },
    /// The input string is too long.
    #[error("username must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside the allowed set.
    #[error("username may only contain letters, digits, '.', '_' and '-'")]
    InvalidCharacter,
}

/// A validated username.
///
/// ## Constraints
///
/// - Length: 3-32 characters
/// - Allowed characters: ASCII letters, digits, `.`, `_`, `-`
///
/// Usernames are unique case-insensitively: `Alice` and `alice` refer to the
/// same account. The original casing is preserved as the canonical form.
///
/// ## Examples
///
/// ```
/// use quorum_core::Username;
///
/// // Valid usernames
/// assert!(Username::parse("alice").is_ok());
/// assert!(Username::parse("bob.smith_42").is_ok());
///
/// // Invalid usernames
/// assert!(Username::parse("").is_err());        // empty
/// assert!(Username::parse("ab").is_err());      // too short
/// assert!(Username::parse("a b").is_err());     // whitespace
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Minimum length of a username.
    pub const MIN_LENGTH: usize = 3;

    /// Maximum length of a username.
    pub const MAX_LENGTH: usize = 32;

    /// Parse a `Username` from a string.
    ///
    /// Leading and trailing whitespace is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty after trimming
    /// - Is shorter than 3 or longer than 32 characters
    /// - Contains characters outside `[A-Za-z0-9._-]`
    pub fn parse(s: &str) -> Result<Self, UsernameError> {
        let s = s.trim();

        if s.is_empty() {
            return Err(UsernameError::Empty);
        }

        if s.len() < Self::MIN_LENGTH {
            return Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        let valid = s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid {
            return Err(UsernameError::InvalidCharacter);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the username as a string slice (canonical casing).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Username` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Case-insensitive comparison against an arbitrary string.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Username {
    type Err = UsernameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_usernames() {
        assert!(Username::parse("alice").is_ok());
        assert!(Username::parse("bob.smith").is_ok());
        assert!(Username::parse("user_42").is_ok());
        assert!(Username::parse("first-last").is_ok());
        assert!(Username::parse("ABC").is_ok());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let name = Username::parse("  alice  ").unwrap();
        assert_eq!(name.as_str(), "alice");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Username::parse(""), Err(UsernameError::Empty)));
        assert!(matches!(Username::parse("   "), Err(UsernameError::Empty)));
    }

    #[test]
    fn test_parse_too_short() {
        assert!(matches!(
            Username::parse("ab"),
            Err(UsernameError::TooShort { .. })
        ));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "a".repeat(33);
        assert!(matches!(
            Username::parse(&long),
            Err(UsernameError::TooLong { .. })
        ));
    }

    #[test]
    fn test_parse_invalid_characters() {
        assert!(matches!(
            Username::parse("has space"),
            Err(UsernameError::InvalidCharacter)
        ));
        assert!(matches!(
            Username::parse("email@host"),
            Err(UsernameError::InvalidCharacter)
        ));
        assert!(matches!(
            Username::parse("emoji\u{1F600}"),
            Err(UsernameError::InvalidCharacter)
        ));
    }

    #[test]
    fn test_matches_case_insensitive() {
        let name = Username::parse("Alice").unwrap();
        assert!(name.matches("alice"));
        assert!(name.matches("ALICE"));
        assert!(name.matches("  alice "));
        assert!(!name.matches("bob"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let name = Username::parse("alice").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"alice\"");

        let parsed: Username = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, name);
    }

    #[test]
    fn test_from_str() {
        let name: Username = "alice".parse().unwrap();
        assert_eq!(name.as_str(), "alice");
    }
}
