use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque bearer token. Never empty.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(Error::EmptyToken);
        }
        Ok(Self(token))
    }

    /// Build from a raw stored value, treating an empty string as absent
    pub fn from_stored(raw: Option<String>) -> Option<Self> {
        raw.and_then(|value| Self::new(value).ok())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for an `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl TryFrom<String> for SessionToken {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<SessionToken> for String {
    fn from(token: SessionToken) -> Self {
        token.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_token() {
        assert_eq!(SessionToken::new(""), Err(Error::EmptyToken));
        assert_eq!(SessionToken::from_stored(Some(String::new())), None);
        assert_eq!(SessionToken::from_stored(None), None);
    }

    #[test]
    fn bearer_header_value() {
        let token = SessionToken::new("abc").unwrap();
        assert_eq!(token.bearer(), "Bearer abc");
    }

    #[test]
    fn debug_does_not_leak_value() {
        let token = SessionToken::new("secret-value").unwrap();
        assert!(!format!("{token:?}").contains("secret-value"));
    }
}
