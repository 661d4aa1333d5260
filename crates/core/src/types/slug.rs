//! URL slug type for public content.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Slug`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum SlugError {
    /// The input string is empty.
    #[error("slug cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("slug must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside `a-z`, `0-9`, `-`.
    #[error("slug may only contain lowercase letters, digits, and hyphens")]
    InvalidCharacter,
    /// The input starts or ends with a hyphen.
    #[error("slug cannot start or end with a hyphen")]
    EdgeHyphen,
}

/// A URL path segment identifying public content (e.g. a case study).
///
/// Slugs are part of public URLs and are immutable in spirit: changing one
/// breaks inbound links, so repositories treat them as identifiers.
///
/// ## Constraints
///
/// - Length: 1-80 characters
/// - Characters: `a-z`, `0-9`, `-`
/// - Must not start or end with a hyphen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Maximum length of a slug.
    pub const MAX_LENGTH: usize = 80;

    /// Parse a `Slug` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, too long, contains a
    /// disallowed character, or starts/ends with a hyphen.
    pub fn parse(s: &str) -> Result<Self, SlugError> {
        if s.is_empty() {
            return Err(SlugError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(SlugError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if !s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(SlugError::InvalidCharacter);
        }

        if s.starts_with('-') || s.ends_with('-') {
            return Err(SlugError::EdgeHyphen);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert!(Slug::parse("acme-rollout-2026").is_ok());
        assert!(Slug::parse("a").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Slug::parse(""), Err(SlugError::Empty)));
    }

    #[test]
    fn test_parse_uppercase_rejected() {
        assert!(matches!(
            Slug::parse("Acme-Rollout"),
            Err(SlugError::InvalidCharacter)
        ));
    }

    #[test]
    fn test_parse_spaces_rejected() {
        assert!(matches!(
            Slug::parse("acme rollout"),
            Err(SlugError::InvalidCharacter)
        ));
    }

    #[test]
    fn test_parse_edge_hyphen_rejected() {
        assert!(matches!(Slug::parse("-acme"), Err(SlugError::EdgeHyphen)));
        assert!(matches!(Slug::parse("acme-"), Err(SlugError::EdgeHyphen)));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "a".repeat(81);
        assert!(matches!(
            Slug::parse(&long),
            Err(SlugError::TooLong { max: 80 })
        ));
    }
}
