//! Check Session Use Case
//!
//! Verifies the signed session cookie and loads the session it names.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token::parse_session_token;
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};

pub struct CheckSessionUseCase<S>
where
    S: SessionRepository + Send + Sync + 'static,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionRepository + Send + Sync + 'static,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Load the session and record activity.
    ///
    /// The expiry is fixed at creation; activity does not extend it.
    pub async fn get_session(&self, session_token: &str) -> AuthResult<Session> {
        let session_id =
            parse_session_token(&self.config, session_token).ok_or(AuthError::SessionInvalid)?;

        let mut session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.session_repo.delete(session_id).await?;
            return Err(AuthError::SessionInvalid);
        }

        session.touch();

        let touched = session.clone();
        let repo = self.session_repo.clone();
        tokio::spawn(async move {
            if let Err(e) = repo.touch(&touched).await {
                tracing::warn!(error = %e, "Failed to update session activity");
            }
        });

        Ok(session)
    }
}
