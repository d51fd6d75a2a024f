//! Sign In Use Case
//!
//! Verifies email + password, opens a session and, when asked, issues a
//! remember token.

use std::sync::Arc;

use platform::client::ClientInfo;

use crate::application::config::AuthConfig;
use crate::application::password_check::check_password;
use crate::application::remember::{IssueRememberUseCase, IssuedRemember};
use crate::application::session_token::{issue_session_token, start_session};
use crate::domain::entity::{account::Account, session::Session};
use crate::domain::repository::{AccountRepository, SessionRepository};
use crate::domain::value_object::{account_password::RawPassword, email::Email};
use crate::error::{AuthError, AuthResult};

pub struct SignInInput {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

pub struct SignInOutput {
    pub account: Account,
    pub session: Session,
    /// Signed value for the session cookie
    pub session_token: String,
    /// Present when `remember_me` was requested
    pub remember: Option<IssuedRemember>,
}

pub struct SignInUseCase<A, S>
where
    A: AccountRepository + Send + Sync + 'static,
    S: SessionRepository,
{
    account_repo: Arc<A>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<A, S> SignInUseCase<A, S>
where
    A: AccountRepository + Send + Sync + 'static,
    S: SessionRepository,
{
    pub fn new(account_repo: Arc<A>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            account_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput, client: &ClientInfo) -> AuthResult<SignInOutput> {
        // Malformed email and unknown email look the same to the caller
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;
        let password =
            RawPassword::submitted(input.password).ok_or(AuthError::InvalidCredentials)?;

        // Unknown email still pays for one Argon2 verification
        let found = self.account_repo.find_by_email(&email).await?;
        let stored = found.as_ref().map(|account| account.password_hash.clone());
        let check = check_password(self.config.clone(), stored, password).await?;

        let mut account = match found {
            Some(account) if check.matches => account,
            _ => return Err(AuthError::InvalidCredentials),
        };

        if let Some(rehashed) = check.rehashed {
            account.change_password(rehashed);
            tracing::info!(account_id = %account.account_id, "Password hash upgraded");
        }

        account.record_login();
        self.account_repo.update(&account).await?;

        let session = start_session(&self.config, account.account_id, false, client)?;
        self.session_repo.create(&session).await?;
        let session_token = issue_session_token(&self.config, session.session_id);

        let remember = input.remember_me.then(|| {
            IssueRememberUseCase::new(self.account_repo.clone(), self.config.clone())
                .execute(&mut account)
        });

        tracing::info!(
            account_id = %account.account_id,
            session_id = %session.session_id,
            remember_me = input.remember_me,
            "Account signed in"
        );

        Ok(SignInOutput {
            account,
            session,
            session_token,
            remember,
        })
    }
}
