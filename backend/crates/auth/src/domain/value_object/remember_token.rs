//! Remember Token Value Object
//!
//! Long-lived credential behind the `Remember` cookie. Holding the signed
//! cookie whose value equals the stored token is treated as a fresh login,
//! so the token is drawn from the OS RNG and never logged.

use std::fmt;

use platform::crypto::random_token;

/// Token length in characters (~174 bits over a 56-symbol alphabet)
pub const REMEMBER_TOKEN_LEN: usize = 30;

#[derive(Clone, PartialEq, Eq)]
pub struct RememberToken(String);

impl RememberToken {
    pub fn generate() -> Self {
        Self(random_token(REMEMBER_TOKEN_LEN))
    }

    /// Parse an inbound cookie value. Anything that could not have been
    /// generated here is rejected before touching storage.
    pub fn parse(value: &str) -> Option<Self> {
        let well_formed = value.len() == REMEMBER_TOKEN_LEN
            && value
                .bytes()
                .all(|b| platform::crypto::UNAMBIGUOUS_ALPHABET.contains(&b));
        well_formed.then(|| Self(value.to_string()))
    }

    pub fn from_db(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RememberToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RememberToken").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_length() {
        assert_eq!(RememberToken::generate().as_str().len(), REMEMBER_TOKEN_LEN);
    }

    #[test]
    fn test_parse_accepts_generated() {
        let token = RememberToken::generate();
        assert_eq!(RememberToken::parse(token.as_str()), Some(token));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(RememberToken::parse("").is_none());
        assert!(RememberToken::parse("short").is_none());
        assert!(RememberToken::parse(&"0".repeat(REMEMBER_TOKEN_LEN)).is_none());
        assert!(RememberToken::parse(&"A".repeat(REMEMBER_TOKEN_LEN + 1)).is_none());
    }

    #[test]
    fn test_debug_redacted() {
        let token = RememberToken::generate();
        assert!(!format!("{:?}", token).contains(token.as_str()));
    }
}
