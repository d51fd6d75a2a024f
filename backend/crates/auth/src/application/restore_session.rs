//! Restore Session Use Case
//!
//! Turns a signed `Remember` cookie back into a session when the session
//! cookie is gone. Every rejection (bad signature, malformed value, no
//! account holding the token) is an anonymous outcome, not an error; only
//! storage faults propagate. There is no retry.

use std::sync::Arc;

use platform::client::ClientInfo;
use platform::crypto::unsign_value;

use crate::application::config::AuthConfig;
use crate::application::session_token::{issue_session_token, start_session};
use crate::domain::entity::{account::Account, session::Session};
use crate::domain::repository::{AccountRepository, SessionRepository};
use crate::domain::value_object::remember_token::RememberToken;
use crate::error::AuthResult;

pub struct RestoredSession {
    pub account: Account,
    pub session: Session,
    /// Signed value for the session cookie
    pub session_token: String,
}

pub struct RestoreSessionUseCase<A, S>
where
    A: AccountRepository,
    S: SessionRepository,
{
    account_repo: Arc<A>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<A, S> RestoreSessionUseCase<A, S>
where
    A: AccountRepository,
    S: SessionRepository,
{
    pub fn new(account_repo: Arc<A>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            account_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(
        &self,
        remember_cookie: &str,
        client: &ClientInfo,
    ) -> AuthResult<Option<RestoredSession>> {
        let Some(value) = unsign_value(&self.config.cookie_secret, remember_cookie) else {
            tracing::debug!("Remember cookie signature rejected");
            return Ok(None);
        };

        let Some(token) = RememberToken::parse(value) else {
            tracing::debug!("Remember cookie value malformed");
            return Ok(None);
        };

        let Some(mut account) = self.account_repo.find_by_remember_token(&token).await? else {
            tracing::debug!("Remember token matches no account");
            return Ok(None);
        };

        account.record_login();
        self.account_repo.update(&account).await?;

        let session = start_session(&self.config, account.account_id, true, client)?;
        self.session_repo.create(&session).await?;

        let session_token = issue_session_token(&self.config, session.session_id);

        tracing::info!(
            account_id = %account.account_id,
            session_id = %session.session_id,
            "Session restored from remember cookie"
        );

        Ok(Some(RestoredSession {
            account,
            session,
            session_token,
        }))
    }
}
