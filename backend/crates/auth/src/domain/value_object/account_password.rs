//! Account Password Value Objects
//!
//! Domain wrappers over `platform::password`:
//! - [`RawPassword`] holds submitted clear text (zeroized on drop)
//! - [`AccountPassword`] holds the Argon2id hash stored on the account
//!
//! ```rust
//! use auth::domain::value_object::account_password::{AccountPassword, RawPassword};
//!
//! let raw = RawPassword::new("Secret1".to_string()).unwrap();
//! let hashed = AccountPassword::from_raw(&raw, None).unwrap();
//! assert!(hashed.verify(&RawPassword::submitted("Secret1".to_string()).unwrap(), None));
//! ```

use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
use platform::password::{ClearTextPassword, HashedPassword, PasswordPolicyError};
use std::fmt;

/// Clear-text password from a request
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Password being set (sign-up or change); the policy applies.
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::TooShort { min, .. } => {
                AppError::bad_request(format!("Password must be at least {} characters", min))
                    .with_action("Please choose a longer password")
            }
            PasswordPolicyError::TooLong { max, .. } => {
                AppError::bad_request(format!("Password must be at most {} characters", max))
                    .with_action("Please choose a shorter password")
            }
            PasswordPolicyError::EmptyOrWhitespace => {
                AppError::bad_request("Password cannot be empty")
                    .with_action("Please enter a password")
            }
            PasswordPolicyError::InvalidCharacter => {
                AppError::bad_request("Password contains invalid characters")
            }
            PasswordPolicyError::CommonPattern => {
                AppError::bad_request("Password is too common or follows a predictable pattern")
                    .with_action("Please choose a more unique password")
            }
        })?;

        Ok(Self(clear_text))
    }

    /// Password being checked against a stored hash; no policy.
    pub fn submitted(raw: String) -> Option<Self> {
        ClearTextPassword::for_verification(raw).map(Self)
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

/// Salted Argon2id hash (PHC string). Never the plaintext.
#[derive(Clone, PartialEq, Eq)]
pub struct AccountPassword(HashedPassword);

impl AccountPassword {
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AppResult<Self> {
        let hashed = raw
            .inner()
            .hash(pepper)
            .map_err(|e| AppError::internal("Password hashing failed").with_source(e))?;

        Ok(Self(hashed))
    }

    pub fn from_phc_string(phc_string: impl Into<String>) -> AppResult<Self> {
        let hashed = HashedPassword::from_phc_string(phc_string).map_err(|e| {
            AppError::new(
                ErrorKind::InternalServerError,
                "Invalid password hash in database",
            )
            .with_source(e)
        })?;

        Ok(Self(hashed))
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Constant-time check; a mismatch is `false`, never an error.
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }

    /// Same cost as [`Self::verify`] for an account that does not exist.
    pub fn verify_dummy(raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        HashedPassword::verify_dummy(raw.inner(), pepper)
    }

    pub fn needs_rehash(&self) -> bool {
        self.0.needs_rehash()
    }
}

impl fmt::Debug for AccountPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitted(s: &str) -> RawPassword {
        RawPassword::submitted(s.to_string()).unwrap()
    }

    #[test]
    fn test_compare_password_example() {
        let raw = RawPassword::new("Secret1".to_string()).unwrap();
        let hashed = AccountPassword::from_raw(&raw, None).unwrap();

        assert_ne!(hashed.as_phc_string(), "Secret1");
        assert!(hashed.verify(&submitted("Secret1"), None));
        assert!(!hashed.verify(&submitted("wrong"), None));
    }

    #[test]
    fn test_policy_errors_are_bad_requests() {
        let err = RawPassword::new("abc".to_string()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert!(err.action().is_some());

        let err = RawPassword::new("password123".to_string()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn test_submitted_rejects_only_empty() {
        assert!(RawPassword::submitted(String::new()).is_none());
        assert!(RawPassword::submitted("x".to_string()).is_some());
    }

    #[test]
    fn test_phc_roundtrip_from_db() {
        let raw = RawPassword::new("Secret1".to_string()).unwrap();
        let hashed = AccountPassword::from_raw(&raw, Some(b"pepper")).unwrap();
        let stored = AccountPassword::from_phc_string(hashed.as_phc_string()).unwrap();

        assert!(stored.verify(&raw, Some(b"pepper")));
        assert!(!stored.verify(&raw, None));
        assert!(AccountPassword::from_phc_string("Secret1").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::new("Secret1".to_string()).unwrap();
        assert!(!format!("{:?}", raw).contains("Secret1"));
        let hashed = AccountPassword::from_raw(&raw, None).unwrap();
        assert!(format!("{:?}", hashed).contains("[HASH]"));
    }
}
