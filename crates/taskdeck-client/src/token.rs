//! Opaque bearer token handling.

use std::fmt;

/// Opaque session token obtained from a successful login.
///
/// Held in memory for the lifetime of a session and never persisted by this
/// crate. Absence of a token is the sentinel for "unauthenticated"; there is
/// no expiry or refresh handling, a token is trusted until the process ends.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token string, for callers that must hand it to the user.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl From<String> for SessionToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

// Tokens are credentials; keep them out of debug logs.
impl fmt::Debug for SessionToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("SessionToken(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_value_uses_bearer_scheme() {
        let token = SessionToken::new("abc123");
        assert_eq!(token.authorization_value(), "Bearer abc123");
        assert_eq!(token.as_str(), "abc123");
    }

    #[test]
    fn debug_redacts_token_material() {
        let token = SessionToken::new("super-secret");
        assert_eq!(format!("{token:?}"), "SessionToken(<redacted>)");
    }
}
