//! Session cookie tokens
//!
//! Cookie value is `session_id.signature` (HMAC-SHA256 under
//! `AuthConfig::session_secret`). The session row holds everything else.

use platform::client::ClientInfo;
use platform::crypto::{sign_value, unsign_value};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::entity::session::Session;
use crate::domain::value_object::AccountId;
use crate::error::{AuthError, AuthResult};

pub fn issue_session_token(config: &AuthConfig, session_id: Uuid) -> String {
    sign_value(&config.session_secret, &session_id.to_string())
}

/// `None` for a bad signature or a malformed ID
pub fn parse_session_token(config: &AuthConfig, token: &str) -> Option<Uuid> {
    unsign_value(&config.session_secret, token)?.parse().ok()
}

/// Build a session with the configured lifetime
pub(crate) fn start_session(
    config: &AuthConfig,
    account_id: AccountId,
    via_remember: bool,
    client: &ClientInfo,
) -> AuthResult<Session> {
    let ttl = chrono::Duration::from_std(config.session_ttl)
        .map_err(|e| AuthError::Internal(format!("Invalid session TTL: {e}")))?;

    Ok(Session::new(account_id, via_remember, client, ttl))
}
