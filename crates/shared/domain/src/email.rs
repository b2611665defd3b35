//! Email address value object.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::EMAIL_PATTERN;
use crate::error::{DomainError, DomainResult};

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).unwrap_or_else(|e| panic!("invalid email pattern: {e}")));

/// Validated email address.
///
/// Can only be obtained through [`UserEmail::parse`], so holding a value of
/// this type guarantees the address is structurally valid. Surrounding
/// whitespace is trimmed before validation; the stored form is otherwise
/// exactly what the caller supplied.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserEmail(String);

impl UserEmail {
    /// Parse and validate a raw email string.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let value = raw.trim();

        if value.is_empty() {
            return Err(DomainError::invalid_email("email cannot be blank"));
        }
        if !value.contains('@') {
            return Err(DomainError::invalid_email("email must contain @ symbol"));
        }
        if !EMAIL_REGEX.is_match(value) {
            return Err(DomainError::invalid_email("email format is invalid"));
        }

        Ok(Self(value.to_owned()))
    }

    /// Get the email as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UserEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for UserEmail {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for UserEmail {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<UserEmail> for String {
    fn from(email: UserEmail) -> Self {
        email.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email_round_trips() {
        let email = UserEmail::parse("john@example.com").unwrap();
        assert_eq!(email.as_str(), "john@example.com");
        assert_eq!(email.to_string(), "john@example.com");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let email = UserEmail::parse("  john@example.com  ").unwrap();
        assert_eq!(email.as_str(), "john@example.com");
    }

    #[test]
    fn blank_email_is_rejected() {
        assert!(matches!(
            UserEmail::parse("   "),
            Err(DomainError::InvalidEmail(_))
        ));
    }

    #[test]
    fn missing_at_symbol_is_rejected() {
        assert!(matches!(
            UserEmail::parse("not-an-email"),
            Err(DomainError::InvalidEmail(_))
        ));
    }

    #[test]
    fn missing_tld_is_rejected() {
        assert!(matches!(
            UserEmail::parse("a@b"),
            Err(DomainError::InvalidEmail(_))
        ));
    }

    #[test]
    fn case_is_preserved() {
        let email = UserEmail::parse("John.Doe@Example.com").unwrap();
        assert_eq!(email.as_str(), "John.Doe@Example.com");
    }
}
