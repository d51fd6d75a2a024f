//! Password Hashing off the Async Workers
//!
//! Argon2id takes tens of milliseconds of CPU, so every hash and verify
//! runs on tokio's blocking pool.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::value_object::account_password::{AccountPassword, RawPassword};
use crate::error::{AuthError, AuthResult};

/// Result of checking a submitted password
pub(crate) struct PasswordCheck {
    pub matches: bool,
    /// Fresh hash when the stored one used outdated parameters
    pub rehashed: Option<AccountPassword>,
}

/// Verify `submitted` against `stored`.
///
/// With no stored hash (unknown account) a dummy verification runs, so
/// both outcomes cost one Argon2 pass.
pub(crate) async fn check_password(
    config: Arc<AuthConfig>,
    stored: Option<AccountPassword>,
    submitted: RawPassword,
) -> AuthResult<PasswordCheck> {
    tokio::task::spawn_blocking(move || {
        let pepper = config.pepper();

        let Some(stored) = stored else {
            AccountPassword::verify_dummy(&submitted, pepper);
            return Ok(PasswordCheck {
                matches: false,
                rehashed: None,
            });
        };

        if !stored.verify(&submitted, pepper) {
            return Ok(PasswordCheck {
                matches: false,
                rehashed: None,
            });
        }

        let rehashed = if stored.needs_rehash() {
            Some(AccountPassword::from_raw(&submitted, pepper)?)
        } else {
            None
        };

        Ok::<_, AuthError>(PasswordCheck {
            matches: true,
            rehashed,
        })
    })
    .await
    .map_err(|e| AuthError::Internal(format!("Password check task failed: {e}")))?
}

/// Hash a policy-checked password.
pub(crate) async fn hash_password(
    config: Arc<AuthConfig>,
    password: RawPassword,
) -> AuthResult<AccountPassword> {
    tokio::task::spawn_blocking(move || {
        AccountPassword::from_raw(&password, config.pepper()).map_err(AuthError::from)
    })
    .await
    .map_err(|e| AuthError::Internal(format!("Password hash task failed: {e}")))?
}
